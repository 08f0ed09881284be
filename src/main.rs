mod cmd;

use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "z32-identity",
    about = "Deterministic Ed25519 identities with z-base-32 public keys"
)]
enum Options {
    /// Derive the public key for a secret seed.
    Derive(cmd::derive::Options),
    /// Generate a fresh random identity.
    Generate,
    /// Encode hex data as z-base-32.
    Encode(cmd::codec::EncodeOptions),
    /// Decode z-base-32 text as hex data.
    Decode(cmd::codec::DecodeOptions),
    /// Parse a public key and print its canonical forms.
    Inspect(cmd::inspect::Options),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = match Options::parse() {
        Options::Derive(options) => cmd::derive::run(options),
        Options::Generate => cmd::generate::run(),
        Options::Encode(options) => cmd::codec::encode(options),
        Options::Decode(options) => cmd::codec::decode(options),
        Options::Inspect(options) => cmd::inspect::run(options),
    } {
        if cfg!(debug_assertions) {
            eprintln!("ERROR: {:?}", err);
        } else {
            eprintln!("ERROR: {}", err);
        }
        process::exit(-1);
    }
}
