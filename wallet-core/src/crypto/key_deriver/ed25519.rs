// wallet-core/src/crypto/key_deriver/ed25519.rs
//
// Ed25519 Key Derivation - SLIP-0010 Standard
//
// Algorithm: HMAC-SHA512 (khác BIP-32, chỉ hỗ trợ hardened derivation)
// Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md
//
// QUAN TRỌNG: SLIP-0010 cho ed25519 CHỈ hỗ trợ hardened child derivation.
// Mọi index đều được cộng 2^31 trước khi đưa vào HMAC.

use super::DerivedSeed;
use crate::crypto::paths::{DerivationPath, HARDENED_OFFSET};
use crate::crypto::seed::Seed;
use crate::error::{CryptoError, DerivationError, DerivationResult};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

type HmacSha512 = Hmac<Sha512>;

/// Ed25519 Key Deriver - SLIP-0010 Standard
///
/// # Khác biệt với secp256k1 (BIP-32)
/// - Master key seed: "ed25519 seed" (thay vì "Bitcoin seed")
/// - Chỉ hỗ trợ hardened derivation (index >= 2^31)
/// - Không cần validate key range (ed25519 key là bất kỳ 32 bytes)
///
/// # Security
/// - Private key + chain code được zeroize sau mỗi level
/// - Không lưu intermediate state
pub(crate) struct Ed25519Deriver;

impl Ed25519Deriver {
    /// SLIP-0010 master key seed constant
    const MASTER_SECRET: &'static [u8] = b"ed25519 seed";

    /// Walk `path` from the BIP-39 seed and return the 32-byte child key.
    pub(crate) fn derive(seed: &Seed, path: &DerivationPath) -> DerivationResult<DerivedSeed> {
        let key = Self::derive_indices(seed.as_bytes(), &path.indices())?;
        Ok(DerivedSeed::new(key))
    }

    /// Derive theo danh sách index (chưa hardened), mỗi level đều hardened.
    pub(crate) fn derive_indices(
        seed: &[u8],
        indices: &[u32],
    ) -> DerivationResult<Zeroizing<[u8; 32]>> {
        // Step 1: Master key generation
        // I = HMAC-SHA512(Key = "ed25519 seed", Data = seed)
        let (mut key, mut chain_code) = Self::hmac_split(Self::MASTER_SECRET, &[seed])?;

        // Step 2: Child key derivation (mỗi level)
        // I = HMAC-SHA512(Key = chain_code, Data = 0x00 || key || ser32(index + 2^31))
        for &index in indices {
            if index >= HARDENED_OFFSET {
                key.zeroize();
                chain_code.zeroize();
                return Err(DerivationError::InvalidAccountIndex(index));
            }
            let hardened_index = (index | HARDENED_OFFSET).to_be_bytes();
            let data: [&[u8]; 3] = [&[0x00], &key, &hardened_index];
            let (child_key, child_chain) = Self::hmac_split(&chain_code, &data)?;
            // Zeroize old values trước khi overwrite
            key.zeroize();
            chain_code.zeroize();
            key = child_key;
            chain_code = child_chain;
        }

        // Zeroize chain code (không cần nữa)
        chain_code.zeroize();

        Ok(Zeroizing::new(key))
    }

    /// I = HMAC-SHA512(Key, Data); IL = key, IR = chain code
    fn hmac_split(hmac_key: &[u8], data: &[&[u8]]) -> DerivationResult<([u8; 32], [u8; 32])> {
        let mut mac = HmacSha512::new_from_slice(hmac_key).map_err(|e| {
            CryptoError::DerivationFailed(format!("HMAC init failed: {}", e))
        })?;
        for chunk in data {
            mac.update(chunk);
        }
        let result = mac.finalize().into_bytes();

        // Copy into stack buffer we fully control, then zeroize
        let mut buf = [0u8; 64];
        buf.copy_from_slice(&result);

        let mut key = [0u8; 32];
        let mut chain_code = [0u8; 32];
        key.copy_from_slice(&buf[..32]);
        chain_code.copy_from_slice(&buf[32..]);

        // Zeroize local buffer - chứa raw key material
        buf.zeroize();

        Ok((key, chain_code))
    }
}

// =============================================================================
// TESTS
// =============================================================================
