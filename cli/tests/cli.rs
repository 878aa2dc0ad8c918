use clap::Parser;
use curve::CurveContext;
use schnorr::{SchnorrError, SigningKey};
use schnorr_cli::{Args, CliError, run};

const KEY: &str = "22a47fa09a223f2aa079edf85a7c2d4f8720ee63e502ee2869afab7de234b80c";
const KEY_PUBKEY: &str = "02a673638cb9587cb68ea08dbef685c6f2d2a751a8b3c6f2a7e9a4999e6e4bfaf5";
const KEY_SIG: &str = "168f1f139e512eed231ae6cd56a67e7707cd57febd5afd230fe7d42429fec78b\
                       65e753b2af1957ad63d21abcd8b48ed1942cabc1b9f9f8328a3e0b114b294807";
const SEVEN: &str = "0000000000000000000000000000000000000000000000000000000000000007";
const NINE: &str = "0000000000000000000000000000000000000000000000000000000000000009";
const AGGREGATE_SIG: &str = "cc97c427a5370d59f19e3f67a55676388cfec7f73a081f984f67c7b93fd2ff57\
                             0dbad37d026775eaba50b6ab3e65d5adb4984aa7d0181f85ea8b49a6b44d7384";
const AGGREGATE_PUBKEY: &str =
    "028df42db0ffe4d8ab2c0a03804fe6f909316976b64191f1733890dacd2bed6904";

fn run_with(argv: &[&str]) -> Result<String, CliError> {
    let args = Args::try_parse_from(std::iter::once("schnorr").chain(argv.iter().copied()))
        .expect("arguments parse");
    let mut out = Vec::new();
    run(&args, &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

fn pubkey_of(hex: &str) -> String {
    let ctx = CurveContext::secp256k1();
    let key = SigningKey::from_hex(&ctx, hex).expect("key");
    hex::encode(key.verifying_key(&ctx).to_bytes())
}

#[test]
fn test_sign_prints_signature() {
    let out = run_with(&["--sign", "--privkey", KEY, "--message", "hello schnorr"]).expect("sign");
    assert_eq!(out, format!("{KEY_SIG}\n"));
}

#[test]
fn test_verify_prints_result() {
    let out = run_with(&[
        "--verify",
        "--pubkey",
        KEY_PUBKEY,
        "--sig",
        KEY_SIG,
        "--message",
        "hello schnorr",
    ])
    .expect("verify");
    assert_eq!(out, "Signature Verified? true\n");

    let out = run_with(&[
        "--verify",
        "--pubkey",
        KEY_PUBKEY,
        "--sig",
        KEY_SIG,
        "--message",
        "goodbye schnorr",
    ])
    .expect("verify");
    assert_eq!(out, "Signature Verified? false\n");
}

#[test]
fn test_sign_then_verify() {
    let sig = run_with(&["--sign", "--privkey", SEVEN, "-m", "round trip"]).expect("sign");
    let out = run_with(&[
        "--verify",
        "--pubkey",
        &pubkey_of(SEVEN),
        "--sig",
        sig.trim(),
        "-m",
        "round trip",
    ])
    .expect("verify");
    assert_eq!(out, "Signature Verified? true\n");
}

#[test]
fn test_aggregate_sign_and_verify() {
    let out = run_with(&[
        "--sign",
        "--privkey",
        KEY,
        "--privkey",
        SEVEN,
        "--privkey",
        NINE,
        "--message",
        "hello schnorr",
    ])
    .expect("sign");
    assert_eq!(out, format!("{AGGREGATE_SIG}\n"));

    let seven = pubkey_of(SEVEN);
    let nine = pubkey_of(NINE);
    let out = run_with(&[
        "--verify",
        "--pubkey",
        KEY_PUBKEY,
        "--pubkey",
        &seven,
        "--pubkey",
        &nine,
        "--sig",
        AGGREGATE_SIG,
        "--message",
        "hello schnorr",
    ])
    .expect("verify");
    assert_eq!(out, "Signature Verified? true\n");

    let out = run_with(&[
        "--verify",
        "--pubkey",
        AGGREGATE_PUBKEY,
        "--sig",
        AGGREGATE_SIG,
        "--message",
        "hello schnorr",
    ])
    .expect("verify");
    assert_eq!(out, "Signature Verified? true\n");
}

#[test]
fn test_no_mode_prints_usage() {
    let out = run_with(&[]).expect("usage");
    assert!(out.contains("Usage:"));
    assert!(out.contains("--sign"));
    assert!(out.contains("--verify"));
}

#[test]
fn test_missing_arguments() {
    assert!(matches!(
        run_with(&["--sign", "-m", "x"]),
        Err(CliError::MissingArgument("--privkey"))
    ));
    assert!(matches!(
        run_with(&["--verify", "--pubkey", KEY_PUBKEY]),
        Err(CliError::MissingArgument("--sig"))
    ));
    assert!(matches!(
        run_with(&["--verify", "--sig", KEY_SIG]),
        Err(CliError::MissingArgument("--pubkey"))
    ));
}

#[test]
fn test_malformed_input() {
    assert!(matches!(
        run_with(&["--sign", "--privkey", "not hex"]),
        Err(CliError::Schnorr(SchnorrError::Encoding(_)))
    ));
    assert!(matches!(
        run_with(&["--sign", "--privkey", &"00".repeat(32)]),
        Err(CliError::Schnorr(SchnorrError::InvalidKeyRange))
    ));
    assert!(matches!(
        run_with(&["--verify", "--pubkey", KEY_PUBKEY, "--sig", "abcd"]),
        Err(CliError::Schnorr(SchnorrError::InvalidLength { .. }))
    ));
    assert!(matches!(
        run_with(&["--verify", "--pubkey", &KEY_PUBKEY[2..], "--sig", KEY_SIG]),
        Err(CliError::Schnorr(SchnorrError::PointDecode(_)))
    ));
}

#[test]
fn test_argument_parsing() {
    let args = Args::try_parse_from(["schnorr", "--sign", "--verify"]);
    assert!(args.is_err(), "--sign and --verify conflict");

    let args = Args::try_parse_from(["schnorr", "--log-level", "debug"]).expect("parse");
    assert_eq!(args.log_level, tracing::Level::DEBUG);

    let args = Args::try_parse_from(["schnorr"]).expect("parse");
    assert_eq!(args.log_level, tracing::Level::WARN);
    assert!(args.message.is_empty());

    assert!(Args::try_parse_from(["schnorr", "--log-level", "loud"]).is_err());
}

#[test]
fn test_signature_hex_checked_before_key_decoding() {
    // x = 5 is valid hex but has no point on the curve.
    let no_root = format!("02{}05", "00".repeat(31));
    assert!(matches!(
        run_with(&["--verify", "--pubkey", &no_root, "--sig", "zz"]),
        Err(CliError::Schnorr(SchnorrError::Encoding(_)))
    ));
    assert!(matches!(
        run_with(&["--verify", "--pubkey", KEY_PUBKEY, "--pubkey", "0x", "--sig", KEY_SIG]),
        Err(CliError::Schnorr(SchnorrError::Encoding(_)))
    ));
    assert!(matches!(
        run_with(&["--sign", "--privkey", &"00".repeat(32), "--privkey", "zz"]),
        Err(CliError::Schnorr(SchnorrError::Encoding(_)))
    ));
    assert!(matches!(
        run_with(&["--verify", "--pubkey", &no_root, "--sig", KEY_SIG]),
        Err(CliError::Schnorr(SchnorrError::PointDecode(_)))
    ));
}

#[test]
fn test_sign_with_cancelling_keys() {
    // 11 + (N - 11) = 0, so the aggregate public key is the identity.
    let eleven = format!("{}0b", "00".repeat(31));
    let negated = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364136";

    let out = run_with(&["--sign", "--privkey", &eleven, "--privkey", negated, "-m", "x"])
        .expect("signing still prints the signature");

    let ctx = CurveContext::secp256k1();
    let keys = [eleven.as_str(), negated].map(|hex| SigningKey::from_hex(&ctx, hex).expect("key"));
    let expected = schnorr::aggregate_signing_keys(&ctx, &keys, &schnorr::hash_message(b"x"))
        .expect("aggregate");
    assert_eq!(out, format!("{expected}\nsigning has failed validation\n"));
}
