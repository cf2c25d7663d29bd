// wallet-core/src/error.rs

use thiserror::Error;

pub type DerivationResult<T> = std::result::Result<T, DerivationError>;

/// Error surfaced by the single derivation entry point.
///
/// Every step of the pipeline fails fast with one of these; no step swallows
/// an error from the step below it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DerivationError {
    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(#[from] MnemonicError),

    #[error("Invalid account index {0}: must be within 0..=2147483647")]
    InvalidAccountIndex(u32),

    #[error("Unsupported network '{0}'. Expected 'solana' or 'ethereum'.")]
    UnsupportedNetwork(String),

    #[error("Invalid derivation path: {0}")]
    InvalidPath(String),

    #[error("Cryptography Error: {0}")]
    Crypto(#[from] CryptoError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("Invalid word count: {0}. Expected 12, 15, 18, 21 or 24 words.")]
    InvalidWordCount(usize),

    #[error("Word '{word}' at position {index} not found in the BIP39 wordlist.")]
    UnknownWord { index: usize, word: String },

    #[error("Checksum validation failed.")]
    ChecksumFailed,

    #[error("BIP39 internal error: {0}")]
    Bip39(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),
}
