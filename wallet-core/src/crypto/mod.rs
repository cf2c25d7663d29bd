// wallet-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! - **Mnemonic**: BIP-39 phrase generation and validation via [`WalletMnemonic`].
//! - **Seed**: PBKDF2-HMAC-SHA512 stretching of a validated mnemonic.
//! - **Derivation Paths**: the hardened `m/44'/coin'/0'/account'` template via [`DerivationPath`].
//! - **Key Derivation**: SLIP-0010 Ed25519 hardened derivation.
//!
//! Seed and key derivation are crate-private: callers go through
//! [`crate::wallet::assemble`], which always validates before stretching.

pub(crate) mod key_deriver;
pub mod mnemonic;
pub mod paths;
pub(crate) mod seed;

// Re-exports for cleaner API access
pub use mnemonic::{WalletMnemonic, WordCount};
pub use paths::{DerivationPath, MAX_ACCOUNT_INDEX};
