// wallet-core/src/wallet/mod.rs

//! Wallet Record Assembler
//!
//! [`assemble`] is the entry point external collaborators call. It runs
//! validate-or-generate → seed → path → SLIP-0010 → keypair in that order and
//! returns an owned [`WalletRecord`]; the crate keeps nothing afterwards.

pub mod assembler;
pub mod record;

pub use assembler::{assemble, assemble_from, assemble_with_passphrase};
pub use record::WalletRecord;
