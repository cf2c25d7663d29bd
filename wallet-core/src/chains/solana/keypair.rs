// wallet-core/src/chains/solana/keypair.rs
//
// Solana Keypair - Ed25519 seed (32B) → secret key blob (64B) → base58

use crate::chains::{EncodedKeypair, KeypairBuilder};
use crate::crypto::key_deriver::DerivedSeed;
use crate::error::DerivationResult;
use ed25519_dalek::SigningKey;
use zeroize::Zeroizing;

/// Độ dài secret key blob (seed 32B || public key 32B)
pub const SECRET_KEY_LEN: usize = 64;

/// Solana Keypair Builder
///
/// Public key (base58) là địa chỉ ví. Private key là secret key blob 64 bytes
/// theo Ed25519 reference construction, cũng base58 (không checksum), đúng
/// format mà Phantom / solana-keygen import được.
pub struct SolanaKeypair;

impl KeypairBuilder for SolanaKeypair {
    fn build(derived: &DerivedSeed) -> DerivationResult<EncodedKeypair> {
        // SigningKey tự zeroize khi drop
        let signing_key = SigningKey::from_bytes(derived.as_bytes());
        let public_key = signing_key.verifying_key().to_bytes();
        let secret_blob = Zeroizing::new(signing_key.to_keypair_bytes());

        Ok(EncodedKeypair {
            public_key: bs58::encode(public_key).into_string(),
            private_key: Zeroizing::new(bs58::encode(secret_blob.as_slice()).into_string()),
        })
    }
}

impl SolanaKeypair {
    /// Kiểm tra chuỗi có phải Solana address hợp lệ (base58 của 32 bytes)
    pub fn is_valid_address(address: &str) -> bool {
        matches!(bs58::decode(address).into_vec(), Ok(bytes) if bytes.len() == 32)
    }
}
