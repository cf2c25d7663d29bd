// wallet-core/src/chains/evm/mod.rs

//! Ethereum Keypair Builder
//!
//! The 32-byte derived seed is the secp256k1 private key; the public-facing
//! string is the EIP-55 checksummed address via [`EvmAddress`].

pub mod address;

pub use address::EvmAddress;
