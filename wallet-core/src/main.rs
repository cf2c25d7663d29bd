// wallet-core/src/main.rs
//
// keygen - CLI quanh `assemble`
//
// Mnemonic luôn đọc từ stdin (không nhận qua argv để tránh lộ trong shell
// history / process list). Passphrase đọc từ biến môi trường.

use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use multichain_keygen::config::{KeygenConfig, PASSPHRASE_ENV};
use multichain_keygen::logging::init_logging;
use multichain_keygen::{assemble_from, NetworkKind, WalletMnemonic, WalletRecord, WordCount};
use tracing::{debug, info};
use zeroize::Zeroizing;

#[derive(Parser, Debug)]
#[command(name = "keygen", version, about = "Derive Solana and Ethereum keypairs from a BIP-39 mnemonic")]
struct Cli {
    /// TOML config file
    #[arg(long, global = true, env = "KEYGEN_CONFIG")]
    config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "multichain_keygen=trace"
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// "text" or "json"
    #[arg(long, global = true)]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a fresh mnemonic
    Generate {
        /// 12, 15, 18, 21 or 24
        #[arg(long)]
        words: Option<usize>,
    },

    /// Check the mnemonic read from stdin
    Validate,

    /// Derive keypairs for the mnemonic read from stdin (empty stdin generates one)
    Derive {
        /// solana | ethereum | 501 | 60
        #[arg(long)]
        network: Option<NetworkKind>,

        /// Number of consecutive accounts
        #[arg(long)]
        accounts: Option<u32>,

        /// First account index
        #[arg(long, default_value_t = 0)]
        start: u32,

        /// Environment variable holding the BIP-39 passphrase
        #[arg(long, default_value = PASSPHRASE_ENV)]
        passphrase_env: String,

        /// Print records as a JSON array
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = KeygenConfig::load(cli.config.as_deref())?;
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.logging.format = format.clone();
    }
    if let Command::Derive {
        network, accounts, ..
    } = &cli.command
    {
        if let Some(network) = network {
            config.derivation.network = *network;
        }
        if let Some(accounts) = accounts {
            config.derivation.accounts = *accounts;
        }
    }
    config.validate()?;
    init_logging(&config.logging)?;
    debug!(?config, "configuration loaded");

    match cli.command {
        Command::Generate { words } => generate(&config, words),
        Command::Validate => validate(),
        Command::Derive {
            start,
            passphrase_env,
            json,
            ..
        } => derive(&config, start, &passphrase_env, json),
    }
}

fn generate(config: &KeygenConfig, words: Option<usize>) -> Result<()> {
    let word_count = match words {
        Some(n) => WordCount::try_from(n)?,
        None => config.derivation.word_count,
    };
    let mnemonic = WalletMnemonic::generate_with(word_count)?;
    println!("{}", mnemonic.phrase());
    Ok(())
}

fn validate() -> Result<()> {
    let input = read_stdin()?;
    let mnemonic = WalletMnemonic::validate(&input)?;
    println!("valid ({} words)", mnemonic.word_count());
    Ok(())
}

fn derive(config: &KeygenConfig, start: u32, passphrase_env: &str, json: bool) -> Result<()> {
    config.validate_range(start)?;

    let input = read_stdin()?;
    let generated = input.trim().is_empty();
    let mnemonic = if generated {
        WalletMnemonic::generate_with(config.derivation.word_count)?
    } else {
        WalletMnemonic::validate(&input)?
    };
    let passphrase = Zeroizing::new(std::env::var(passphrase_env).unwrap_or_default());

    let network = config.derivation.network;
    let records = (0..config.derivation.accounts)
        .map(|offset| {
            let account_index = start + offset;
            assemble_from(mnemonic.clone(), network, account_index, &passphrase)
                .with_context(|| format!("deriving {} account {}", network, account_index))
        })
        .collect::<Result<Vec<WalletRecord>>>()?;
    info!(network = %network, count = records.len(), "derived wallets");

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if generated {
        println!("mnemonic: {}", mnemonic.phrase());
    }
    for record in &records {
        println!("{}", record.path());
        println!("  public key:  {}", record.public_key());
        println!("  private key: {}", record.private_key());
    }
    Ok(())
}

/// Đọc toàn bộ stdin; terminal tương tác coi như input rỗng.
fn read_stdin() -> Result<Zeroizing<String>> {
    let mut input = Zeroizing::new(String::new());
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        stdin
            .lock()
            .read_to_string(&mut input)
            .context("failed to read mnemonic from stdin")?;
    }
    Ok(input)
}
