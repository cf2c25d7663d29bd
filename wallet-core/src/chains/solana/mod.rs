// wallet-core/src/chains/solana/mod.rs

//! Solana Keypair Builder (Ed25519, base58).

pub mod keypair;

pub use keypair::SolanaKeypair;
