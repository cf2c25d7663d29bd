// wallet-core/src/lib.rs

//! Deterministic Solana and Ethereum keypair derivation from a BIP-39 mnemonic.
//!
//! ```text
//! assemble(mnemonic, "solana", 0)   → m/44'/501'/0'/0'  base58 keypair
//! assemble(mnemonic, "ethereum", 0) → m/44'/60'/0'/0'   EIP-55 address + hex key
//! ```
//!
//! The crate is stateless: every call returns an owned [`WalletRecord`] and
//! keeps no copy of the mnemonic, seed or keys. Secret buffers are zeroized
//! when dropped.

pub mod chains;
pub mod config;
pub mod crypto;
pub mod error;
pub mod logging;
pub mod network;
pub mod session;
pub mod wallet;

pub use crypto::{DerivationPath, WalletMnemonic, WordCount, MAX_ACCOUNT_INDEX};
pub use error::{CryptoError, DerivationError, DerivationResult, MnemonicError};
pub use network::NetworkKind;
pub use session::{SessionError, WalletSession};
pub use wallet::{assemble, assemble_from, assemble_with_passphrase, WalletRecord};
