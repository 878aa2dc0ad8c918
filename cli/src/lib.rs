//! Command surface for signing and verifying messages from the shell.
//!
//! Messages are taken as strings and hashed with SHA-256 before signing.
//! Keys and signatures are exchanged as hex.

use std::io::{self, Write};

use clap::{CommandFactory, Parser};
use curve::CurveContext;
use schnorr::{
    SchnorrError, Signature, SigningKey, VerifyingKey, aggregate_signing_keys,
    aggregate_verifying_keys, hash_message,
};
use thiserror::Error;
use tracing::{Level, debug};

#[derive(Parser, Debug)]
#[command(name = "schnorr", about = "Schnorr signatures on secp256k1")]
pub struct Args {
    /// Sign the message
    #[arg(long, conflicts_with = "verify")]
    pub sign: bool,

    /// Verify a signature on the message
    #[arg(long)]
    pub verify: bool,

    /// Message to sign or verify
    #[arg(short = 'm', long, default_value = "")]
    pub message: String,

    /// Hex private key; repeat to produce an aggregate signature
    #[arg(long = "privkey", value_name = "HEX")]
    pub privkeys: Vec<String>,

    /// Hex compressed public key; repeat to verify against the aggregate key
    #[arg(long = "pubkey", value_name = "HEX")]
    pub pubkeys: Vec<String>,

    /// Hex signature to verify (64 bytes)
    #[arg(long, value_name = "HEX")]
    pub sig: Option<String>,

    /// Log level for diagnostics written to stderr
    #[arg(long, default_value_t = Level::WARN)]
    pub log_level: Level,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("missing required argument {0}")]
    MissingArgument(&'static str),
    #[error(transparent)]
    Schnorr(#[from] SchnorrError),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Runs the selected mode, writing its result to `out`.
///
/// Without `--sign` or `--verify` the usage text is written instead.
pub fn run(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    let ctx = CurveContext::secp256k1();
    if args.sign {
        sign(&ctx, args, out)
    } else if args.verify {
        verify(&ctx, args, out)
    } else {
        writeln!(out, "{}", Args::command().render_help())?;
        Ok(())
    }
}

fn sign(ctx: &CurveContext, args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    if args.privkeys.is_empty() {
        return Err(CliError::MissingArgument("--privkey"));
    }
    let secrets = decode_all(&args.privkeys)?;
    let keys = secrets
        .iter()
        .map(|bytes| SigningKey::from_bytes(ctx, bytes))
        .collect::<Result<Vec<_>, _>>()?;
    let message = hash_message(args.message.as_bytes());

    let signature = match keys.as_slice() {
        [key] => key.sign(ctx, &message)?,
        _ => aggregate_signing_keys(ctx, &keys, &message)?,
    };
    writeln!(out, "{signature}")?;

    // A single key aggregates to itself. Keys that cancel out have no
    // usable public key, which counts as a failed check.
    let public: Vec<VerifyingKey> = keys.iter().map(|k| k.verifying_key(ctx)).collect();
    let checked = aggregate_verifying_keys(ctx, &public)
        .and_then(|key| key.verify(ctx, &message, &signature));
    if let Err(err) = checked {
        debug!(reason = %err, "fresh signature did not verify");
        writeln!(out, "signing has failed validation")?;
    }
    Ok(())
}

fn verify(ctx: &CurveContext, args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    let signature = args.sig.as_deref().ok_or(CliError::MissingArgument("--sig"))?;
    if args.pubkeys.is_empty() {
        return Err(CliError::MissingArgument("--pubkey"));
    }
    let pubkeys = decode_all(&args.pubkeys)?;
    let signature = decode(signature)?;

    let signature = Signature::from_bytes(&signature)?;
    let keys = pubkeys
        .iter()
        .map(|bytes| VerifyingKey::from_bytes(ctx, bytes))
        .collect::<Result<Vec<_>, _>>()?;
    let key = aggregate_verifying_keys(ctx, &keys)?;
    let message = hash_message(args.message.as_bytes());

    let verified = key.verify(ctx, &message, &signature).is_ok();
    writeln!(out, "Signature Verified? {verified}")?;
    Ok(())
}

/// Hex decoding runs over every argument before any key is parsed.
fn decode(hex: &str) -> Result<Vec<u8>, CliError> {
    Ok(hex::decode(hex).map_err(SchnorrError::from)?)
}

fn decode_all(values: &[String]) -> Result<Vec<Vec<u8>>, CliError> {
    values.iter().map(|hex| decode(hex)).collect()
}
