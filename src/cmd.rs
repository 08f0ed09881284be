//! Module containing subcommands.

pub mod derive {
    //! The `derive` subcommand: secret seed to public key.

    use anyhow::Result;
    use clap::Args;
    use z32_identity::Keypair;

    #[derive(Debug, Args)]
    pub struct Options {
        /// Hex-encoded 32-byte secret seed.
        #[arg(short, long, env = "SECRET_KEY", hide_env_values = true)]
        secret: String,
    }

    pub fn run(options: Options) -> Result<()> {
        let keypair = Keypair::from_secret_hex(&options.secret)?;
        println!("{}", keypair.public_key());
        Ok(())
    }
}

pub mod generate {
    //! The `generate` subcommand: a fresh random identity.

    use anyhow::Result;
    use z32_identity::Keypair;

    pub fn run() -> Result<()> {
        let keypair = Keypair::random();
        println!("secret: {}", hex::encode(keypair.secret_key()));
        println!("public: {}", keypair.public_key());
        Ok(())
    }
}

pub mod codec {
    //! The `encode` and `decode` subcommands for raw z-base-32.

    use anyhow::Result;
    use clap::Args;
    use z32_identity::encoding::z32;

    #[derive(Debug, Args)]
    pub struct EncodeOptions {
        /// Hex data to encode, with or without a `0x` prefix.
        #[arg(value_name = "HEX")]
        data: String,
    }

    #[derive(Debug, Args)]
    pub struct DecodeOptions {
        /// z-base-32 text to decode.
        #[arg(value_name = "TEXT")]
        text: String,
    }

    pub fn encode(options: EncodeOptions) -> Result<()> {
        let data = options.data.trim();
        let bytes = hex::decode(data.strip_prefix("0x").unwrap_or(data))?;
        println!("{}", z32::encode(&bytes));
        Ok(())
    }

    pub fn decode(options: DecodeOptions) -> Result<()> {
        let bytes = z32::decode(options.text.trim())?;
        println!("0x{}", hex::encode(bytes));
        Ok(())
    }
}

pub mod inspect {
    //! The `inspect` subcommand: parse a public key in any accepted form.

    use anyhow::Result;
    use clap::Args;
    use std::path::PathBuf;
    use z32_identity::{IdentityConfig, PublicKey};

    #[derive(Debug, Args)]
    pub struct Options {
        /// Public key, optionally as `pk:<key>` or a domain ending in the key.
        #[arg(value_name = "KEY")]
        key: String,

        /// JSON file with parsing options.
        #[arg(short, long, env = "Z32_IDENTITY_CONFIG")]
        config: Option<PathBuf>,
    }

    pub fn run(options: Options) -> Result<()> {
        let config = match &options.config {
            Some(path) => IdentityConfig::from_json_file(path)?,
            None => IdentityConfig::default(),
        };

        let key = PublicKey::parse_with(&options.key, &config)?;
        println!("z32: {key}");
        println!("hex: 0x{}", hex::encode(key.as_bytes()));
        Ok(())
    }
}
