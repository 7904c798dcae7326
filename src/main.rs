use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
mod auth;
use log::debug;
use passcrypt::{
    CipherConfig, CipherProfile, DEFAULT_ITERATIONS, DEFAULT_SALT_LEN, HashAlgorithm, KeySize,
    compute_hash, create_salt, decrypt, encrypt, verify_hash,
};
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
struct CipherArgs {
    /// Salt text for key derivation (used as-is, not base64-decoded)
    #[arg(long, env = "PASSCRYPT_SALT")]
    salt: Option<String>,

    /// Initialization vector, exactly 16 ASCII characters
    #[arg(long, env = "PASSCRYPT_IV")]
    iv: Option<String>,

    /// PBKDF2 iteration count (default: 1000)
    #[arg(long, env = "PASSCRYPT_ITERATIONS")]
    iterations: Option<u32>,

    /// AES key size in bits: 128, 192 or 256 (default: 256)
    #[arg(long = "key-size", env = "PASSCRYPT_KEY_SIZE")]
    key_size: Option<KeySize>,

    /// JSON file with salt, iterations, initialization_vector and key_size
    #[arg(long, value_name = "PATH", env = "PASSCRYPT_PROFILE")]
    profile: Option<PathBuf>,
}

impl CipherArgs {
    fn to_config(&self, password: &str) -> Result<CipherConfig> {
        let explicit = CipherProfile {
            salt: self.salt.clone(),
            iterations: self.iterations,
            initialization_vector: self.iv.clone(),
            key_size: self.key_size,
        };

        let profile = match &self.profile {
            Some(path) => explicit.or(CipherProfile::load(path)?),
            None => explicit,
        };

        Ok(profile.into_config(password, DEFAULT_ITERATIONS)?)
    }
}

#[derive(Debug, Parser)]
#[command(name = "passcrypt")]
#[command(
    version,
    about = "Salted password hashing and password-based text encryption."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generates a random base64 salt
    Salt {
        /// Salt length in bytes
        #[arg(short, long, default_value_t = DEFAULT_SALT_LEN)]
        size: usize,
    },

    /// Computes a salted hash of the plaintext
    #[command(arg_required_else_help = true)]
    Hash {
        plaintext: String,

        /// sha1, sha256, sha384, sha512 or md5
        #[arg(short, long, default_value_t = HashAlgorithm::Sha256)]
        algorithm: HashAlgorithm,

        /// Base64 salt; a fresh one is generated when omitted
        #[arg(long, conflicts_with = "salt_size")]
        salt: Option<String>,

        /// Length in bytes of the generated salt
        #[arg(long, default_value_t = DEFAULT_SALT_LEN)]
        salt_size: usize,
    },

    /// Checks a plaintext against a salted hash
    #[command(arg_required_else_help = true)]
    Verify {
        plaintext: String,
        hash: String,

        /// sha1, sha256, sha384, sha512 or md5
        #[arg(short, long, default_value_t = HashAlgorithm::Sha256)]
        algorithm: HashAlgorithm,
    },

    /// Encrypts text with a password-derived key
    #[command(arg_required_else_help = true)]
    Encrypt {
        plaintext: String,

        #[command(flatten)]
        cipher: CipherArgs,
    },

    /// Decrypts base64 ciphertext with a password-derived key
    #[command(arg_required_else_help = true)]
    Decrypt {
        ciphertext: String,

        #[command(flatten)]
        cipher: CipherArgs,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Cli::parse();
    match args.command {
        Commands::Salt { size } => {
            println!("{}", create_salt(size)?);
        }
        Commands::Hash {
            plaintext,
            algorithm,
            salt,
            salt_size,
        } => {
            let salt = match salt {
                Some(s) => s,
                None => create_salt(salt_size)?,
            };
            println!("{}", compute_hash(&plaintext, algorithm, &salt)?);
        }
        Commands::Verify {
            plaintext,
            hash,
            algorithm,
        } => {
            if !verify_hash(&plaintext, algorithm, &hash)? {
                bail!("hash does not match");
            }
            println!("hash verified");
        }
        Commands::Encrypt { plaintext, cipher } => {
            let password = auth::read_password()?;
            let config = cipher.to_config(&password)?;
            debug!("encrypting with {config:?}");
            println!("{}", encrypt(&plaintext, &config)?);
        }
        Commands::Decrypt { ciphertext, cipher } => {
            let password = auth::read_password()?;
            let config = cipher.to_config(&password)?;
            debug!("decrypting with {config:?}");
            println!("{}", decrypt(&ciphertext, &config)?);
        }
    }

    Ok(())
}
