// wallet-core/src/wallet/assembler.rs
//
// Wallet Record Assembler - entry point duy nhất cho caller
//
//   mnemonic text ──validate / generate──▶ WalletMnemonic
//   (network, account) ─────────────────▶ DerivationPath
//   WalletMnemonic ──PBKDF2─────────────▶ Seed (64B)
//   Seed + path ──SLIP-0010─────────────▶ DerivedSeed (32B)
//   network + DerivedSeed ──────────────▶ (public, private) strings
//                                        ▶ WalletRecord

use super::record::WalletRecord;
use crate::chains;
use crate::crypto::key_deriver::Ed25519Deriver;
use crate::crypto::seed::Seed;
use crate::crypto::{DerivationPath, WalletMnemonic};
use crate::error::DerivationResult;
use crate::network::NetworkKind;
use tracing::{debug, instrument};

/// Derive one wallet record.
///
/// * `mnemonic_text` - phrase typed by the user; empty (after trimming)
///   means "generate a fresh 12-word mnemonic".
/// * `network` - `"solana"` or `"ethereum"` (coin-type tags `"501"` / `"60"`
///   are accepted too). Rejected before any cryptographic work.
/// * `account_index` - caller-maintained counter, `0..=2^31-1`.
///
/// Pure apart from mnemonic generation: the same non-empty input always
/// yields the same record.
pub fn assemble(
    mnemonic_text: &str,
    network: &str,
    account_index: u32,
) -> DerivationResult<WalletRecord> {
    let network: NetworkKind = network.parse()?;
    assemble_with_passphrase(mnemonic_text, network, account_index, "")
}

/// [`assemble`] with a typed network and a BIP-39 passphrase.
pub fn assemble_with_passphrase(
    mnemonic_text: &str,
    network: NetworkKind,
    account_index: u32,
    passphrase: &str,
) -> DerivationResult<WalletRecord> {
    let mnemonic = resolve_mnemonic(mnemonic_text)?;
    assemble_from(mnemonic, network, account_index, passphrase)
}

/// Same pipeline for a mnemonic the caller already holds.
#[instrument(level = "debug", skip(mnemonic, network, passphrase), fields(network = %network))]
pub fn assemble_from(
    mnemonic: WalletMnemonic,
    network: NetworkKind,
    account_index: u32,
    passphrase: &str,
) -> DerivationResult<WalletRecord> {
    let path = DerivationPath::new(network, account_index)?;

    let seed = Seed::derive(&mnemonic, passphrase);
    let derived = Ed25519Deriver::derive(&seed, &path)?;
    drop(seed);

    let mut keypair = chains::build(network, &derived)?;
    drop(derived);

    debug!(path = %path, public_key = %keypair.public_key, "derived wallet");

    // Move buffer sang record (không copy); record tự zeroize khi drop
    let private_key = std::mem::take(&mut *keypair.private_key);
    Ok(WalletRecord::new(
        mnemonic,
        path,
        keypair.public_key,
        private_key,
    ))
}

fn resolve_mnemonic(mnemonic_text: &str) -> DerivationResult<WalletMnemonic> {
    let trimmed = mnemonic_text.trim();
    if trimmed.is_empty() {
        debug!("no mnemonic supplied, generating a fresh one");
        Ok(WalletMnemonic::generate()?)
    } else {
        Ok(WalletMnemonic::validate(trimmed)?)
    }
}
