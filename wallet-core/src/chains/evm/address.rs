// wallet-core/src/chains/evm/address.rs
//
// EVM Address Module - EIP-55 (Checksum), Keccak-256, secp256k1

use crate::chains::{EncodedKeypair, KeypairBuilder};
use crate::crypto::key_deriver::DerivedSeed;
use crate::error::{CryptoError, DerivationResult};
use alloy::primitives::Address;
use k256::{elliptic_curve::sec1::ToEncodedPoint, SecretKey};
use tiny_keccak::{Hasher, Keccak};
use zeroize::{Zeroize, Zeroizing};

/// EVM Address Generator
///
/// # Flow:  Private Key (32B) → Public Key (64B) → Keccak256 → Address (20B)
///
/// # Security
/// - Zeroize: Mọi intermediate data (hash, public key bytes) đều bị xóa sau khi dùng
/// - No Storage: Module này KHÔNG lưu private key
pub struct EvmAddress;

impl KeypairBuilder for EvmAddress {
    /// The derived seed is used directly as the secp256k1 private key.
    /// Private key → lowercase hex (no `0x`), address → EIP-55.
    fn build(derived: &DerivedSeed) -> DerivationResult<EncodedKeypair> {
        let address = Self::derive_bytes(derived.as_bytes())?;
        Ok(EncodedKeypair {
            public_key: Address::from_slice(&address).to_checksum(None),
            private_key: Zeroizing::new(hex::encode(derived.as_bytes())),
        })
    }
}

impl EvmAddress {
    // =========================================================================
    // CORE: Private Key → Address Bytes (20 bytes)
    // =========================================================================

    /// # Algorithm (chuẩn Ethereum Yellow Paper)
    /// 1. `priv_key` (32B) → secp256k1 → `pub_key` (uncompressed, 65B)
    /// 2. Bỏ prefix byte 0x04 → `pub_key_raw` (64B)
    /// 3. Keccak-256(`pub_key_raw`) → `hash` (32B)
    /// 4. `hash[12..32]` → `address` (20B)
    ///
    /// A scalar of zero or at/above the curve order is rejected, never
    /// reduced, so no plausible-looking wrong address can come out.
    pub(crate) fn derive_bytes(priv_key: &[u8; 32]) -> DerivationResult<[u8; 20]> {
        let secret_key = SecretKey::from_slice(priv_key).map_err(|e| {
            CryptoError::InvalidKeyFormat(format!("Invalid secp256k1 private key: {}", e))
        })?;

        // Derive public key (uncompressed), wrap trong Zeroizing
        let public_key = secret_key.public_key();
        let encoded = Zeroizing::new(public_key.to_encoded_point(false));
        let pub_key_raw = &encoded.as_bytes()[1..]; // Bỏ 0x04 prefix

        // Keccak-256 hash (stack allocated)
        let mut hasher = Keccak::v256();
        let mut hash = [0u8; 32];
        hasher.update(pub_key_raw);
        hasher.finalize(&mut hash);

        // Extract 20 bytes cuối
        let mut address = [0u8; 20];
        address.copy_from_slice(&hash[12..]);

        hash.zeroize();

        Ok(address)
    }

    // =========================================================================
    // UTILITIES
    // =========================================================================

    /// Validate chuỗi có phải Ethereum address hợp lệ không
    ///
    /// Kiểm tra: `0x` prefix + 40 hex chars + EIP-55 checksum (nếu mixed case)
    pub fn is_valid(address: &str) -> bool {
        let Some(digits) = address.strip_prefix("0x") else {
            return false;
        };
        let mixed_case = digits.chars().any(|c| c.is_ascii_uppercase())
            && digits.chars().any(|c| c.is_ascii_lowercase());
        if mixed_case {
            Address::parse_checksummed(address, None).is_ok()
        } else {
            address.parse::<Address>().is_ok()
        }
    }

    /// Normalize về EIP-55 checksum format
    pub fn to_checksum(address: &str) -> DerivationResult<String> {
        let addr: Address = address.parse().map_err(|_| {
            CryptoError::InvalidKeyFormat("Invalid Ethereum address format".to_string())
        })?;
        Ok(addr.to_checksum(None))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DerivationError;

    // Anvil/Hardhat account #0
    const ANVIL_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const ANVIL_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    fn derived(hex_key: &str) -> DerivedSeed {
        let mut key = [0u8; 32];
        key.copy_from_slice(&hex::decode(hex_key).unwrap());
        DerivedSeed::new(Zeroizing::new(key))
    }

    #[test]
    fn test_build_anvil() {
        let keypair = EvmAddress::build(&derived(ANVIL_PRIVATE_KEY)).unwrap();
        assert_eq!(keypair.public_key, ANVIL_ADDRESS);
        assert_eq!(keypair.private_key.as_str(), ANVIL_PRIVATE_KEY);
    }

    #[test]
    fn test_private_key_is_lowercase_hex() {
        let keypair = EvmAddress::build(&derived(
            "bca443f5149618b5dbe6e80b5c096ad4280d5a2e8bc0ce3ebc71c9c0878ba5de",
        ))
        .unwrap();
        assert_eq!(keypair.private_key.len(), 64);
        assert!(!keypair.private_key.starts_with("0x"));
        assert_eq!(
            keypair.private_key.as_str(),
            keypair.private_key.to_ascii_lowercase()
        );
        assert_eq!(keypair.public_key, "0x2759A6Ad812b8A7B73A63a243816D66F5b72A0A7");
    }

    #[test]
    fn test_derive_bytes() {
        let address = EvmAddress::derive_bytes(derived(ANVIL_PRIVATE_KEY).as_bytes()).unwrap();
        assert_eq!(
            format!("0x{}", hex::encode(address)),
            ANVIL_ADDRESS.to_ascii_lowercase()
        );
    }

    #[test]
    fn test_zero_private_key_rejected() {
        let result = EvmAddress::build(&DerivedSeed::new(Zeroizing::new([0u8; 32])));
        assert!(matches!(
            result,
            Err(DerivationError::Crypto(CryptoError::InvalidKeyFormat(_)))
        ));
    }

    #[test]
    fn test_scalar_above_order_rejected() {
        let result = EvmAddress::build(&DerivedSeed::new(Zeroizing::new([0xff; 32])));
        assert!(result.is_err());
    }

    #[test]
    fn test_is_valid() {
        assert!(EvmAddress::is_valid(ANVIL_ADDRESS));
        assert!(EvmAddress::is_valid("0xdead000000000000000000000000000000000000"));
        assert!(!EvmAddress::is_valid("0xinvalid"));
        assert!(!EvmAddress::is_valid("0x123"));
        assert!(!EvmAddress::is_valid(""));
        // Sai checksum (đổi case 1 ký tự)
        assert!(!EvmAddress::is_valid("0xF39Fd6e51aad88F6F4ce6aB8827279cffFb92266"));
        // Thiếu prefix
        assert!(!EvmAddress::is_valid("f39fd6e51aad88f6f4ce6ab8827279cfffb92266"));
    }

    #[test]
    fn test_to_checksum() {
        let lowercase = ANVIL_ADDRESS.to_ascii_lowercase();
        assert_eq!(EvmAddress::to_checksum(&lowercase).unwrap(), ANVIL_ADDRESS);
        assert!(EvmAddress::to_checksum("not an address").is_err());
    }
}
