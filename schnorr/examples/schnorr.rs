use curve::CurveContext;
use rand::SeedableRng;
use rand::rngs::StdRng;
use schnorr::{
    Signature, SigningKey, VerifyingKey, aggregate_signing_keys, aggregate_verifying_keys,
    hash_message,
};

fn main() {
    let ctx = CurveContext::secp256k1();
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&ctx, &mut rng);
    let vk = sk.verifying_key(&ctx);

    let sk_bytes = bincode::serialize(&sk).expect("serialize sk");
    let vk_bytes = bincode::serialize(&vk).expect("serialize vk");

    let msg = hash_message(b"hello schnorr");
    let sig = sk.sign(&ctx, &msg).expect("sign");
    let sig_bytes = bincode::serialize(&sig).expect("serialize sig");

    let sk2: SigningKey = bincode::deserialize(&sk_bytes).expect("deserialize sk");
    let vk2: VerifyingKey = bincode::deserialize(&vk_bytes).expect("deserialize vk");
    let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");

    vk2.verify(&ctx, &msg, &sig2).expect("verify");
    assert_eq!(sk2.sign(&ctx, &msg).expect("sign"), sig);

    println!("public key: {}", hex::encode(vk.to_bytes()));
    println!("signature:  {sig}");

    let signers: Vec<SigningKey> = (0..3)
        .map(|_| SigningKey::random(&ctx, &mut rng))
        .collect();
    let public: Vec<VerifyingKey> = signers.iter().map(|k| k.verifying_key(&ctx)).collect();

    let aggregate_sig = aggregate_signing_keys(&ctx, &signers, &msg).expect("aggregate");
    let aggregate_key = aggregate_verifying_keys(&ctx, &public).expect("aggregate key");
    aggregate_key
        .verify(&ctx, &msg, &aggregate_sig)
        .expect("verify aggregate");

    println!("aggregate key: {}", hex::encode(aggregate_key.to_bytes()));
    println!("aggregate sig: {aggregate_sig}");
}
