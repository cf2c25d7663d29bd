// wallet-core/src/crypto/key_deriver/mod.rs
//
// Key Derivation Engine
//
// ┌──────────────────────────────────────────────┐
// │  Seed (64 bytes from BIP-39 Mnemonic)        │
// │                    │                         │
// │                    ▼                         │
// │         ed25519 (SLIP-0010, hardened)        │
// │           m/44'/<coin>'/0'/<account>'        │
// │                    │                         │
// │          DerivedSeed (32 bytes)              │
// │           ├─ Solana   → Ed25519 keypair      │
// │           └─ Ethereum → secp256k1 scalar     │
// └──────────────────────────────────────────────┘

pub mod ed25519;

pub(crate) use ed25519::Ed25519Deriver;

use zeroize::Zeroizing;

/// 32-byte child key produced by hardened derivation.
///
/// Lives only inside one derivation call; zeroized on drop and never
/// printed.
pub(crate) struct DerivedSeed(Zeroizing<[u8; 32]>);

impl DerivedSeed {
    #[inline]
    pub(crate) fn new(key: Zeroizing<[u8; 32]>) -> Self {
        Self(key)
    }

    #[inline]
    pub(crate) fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl std::fmt::Debug for DerivedSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedSeed([REDACTED])")
    }
}
