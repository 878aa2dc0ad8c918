use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{marshal_compressed, unmarshal_compressed, CurveContext, Projective};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_scalar(ctx: &CurveContext, rng: &mut StdRng) -> BigUint {
    ctx.random_scalar(rng)
}

fn bench_affine_add(c: &mut Criterion) {
    let ctx = CurveContext::secp256k1();
    let g = ctx.generator().clone();
    let h = ctx.scalar_base_mult(&BigUint::from(2u8));
    c.bench_function("affine_add", |bencher| {
        bencher.iter(|| black_box(ctx.add(black_box(&g), black_box(&h))))
    });
}

fn bench_projective_double(c: &mut Criterion) {
    let ctx = CurveContext::secp256k1();
    let g = Projective::from_affine(ctx.generator());
    let fp = ctx.base_field();
    c.bench_function("projective_double", |bencher| {
        bencher.iter(|| black_box(black_box(&g).double(fp)))
    });
}

fn bench_projective_add(c: &mut Criterion) {
    let ctx = CurveContext::secp256k1();
    let fp = ctx.base_field();
    let g = Projective::from_affine(ctx.generator());
    let h = g.double(fp);
    c.bench_function("projective_add", |bencher| {
        bencher.iter(|| black_box(black_box(&g).add(black_box(&h), fp)))
    });
}

fn bench_scalar_base_mult(c: &mut Criterion) {
    let ctx = CurveContext::secp256k1();
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&ctx, &mut rng);

    c.bench_function("scalar_base_mult", |bencher| {
        bencher.iter(|| black_box(ctx.scalar_base_mult(black_box(&scalar))))
    });
}

fn bench_scalar_mult(c: &mut Criterion) {
    let ctx = CurveContext::secp256k1();
    let mut rng = StdRng::seed_from_u64(42);
    let point = ctx.scalar_base_mult(&random_scalar(&ctx, &mut rng));
    let scalar = random_scalar(&ctx, &mut rng);

    c.bench_function("scalar_mult", |bencher| {
        bencher.iter(|| black_box(ctx.scalar_mult(black_box(&point), black_box(&scalar))))
    });
}

fn bench_unmarshal_compressed(c: &mut Criterion) {
    let ctx = CurveContext::secp256k1();
    let encoded = marshal_compressed(ctx.generator());

    c.bench_function("unmarshal_compressed", |bencher| {
        bencher.iter(|| black_box(unmarshal_compressed(&ctx, black_box(&encoded))))
    });
}

criterion_group!(
    benches,
    bench_affine_add,
    bench_projective_double,
    bench_projective_add,
    bench_scalar_base_mult,
    bench_scalar_mult,
    bench_unmarshal_compressed
);
criterion_main!(benches);
