// wallet-core/src/chains/mod.rs
//
// Keypair Builder - DerivedSeed (32B) → (public key string, private key string)
// Dispatch theo NetworkKind bằng exhaustive match, không so sánh chuỗi.

pub mod evm;
pub mod solana;

use crate::crypto::key_deriver::DerivedSeed;
use crate::error::DerivationResult;
use crate::network::NetworkKind;
use zeroize::Zeroizing;

pub use evm::EvmAddress;
pub use solana::SolanaKeypair;

/// Encoded output of a keypair builder.
pub(crate) struct EncodedKeypair {
    pub public_key: String,
    pub private_key: Zeroizing<String>,
}

impl std::fmt::Debug for EncodedKeypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncodedKeypair")
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

/// Turns a 32-byte derived seed into a chain-specific encoded keypair.
///
/// One implementation per [`NetworkKind`] variant.
pub(crate) trait KeypairBuilder {
    fn build(derived: &DerivedSeed) -> DerivationResult<EncodedKeypair>;
}

/// Chọn builder theo network
pub(crate) fn build(network: NetworkKind, derived: &DerivedSeed) -> DerivationResult<EncodedKeypair> {
    match network {
        NetworkKind::Solana => SolanaKeypair::build(derived),
        NetworkKind::Ethereum => EvmAddress::build(derived),
    }
}
