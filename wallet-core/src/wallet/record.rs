// wallet-core/src/wallet/record.rs
//
// WalletRecord - kết quả của một lần derive, caller sở hữu sau khi trả về.

use crate::crypto::{DerivationPath, WalletMnemonic};
use crate::error::DerivationResult;
use crate::network::NetworkKind;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Immutable result of one successful derivation.
///
/// Serialised as `{mnemonic, path, publicKey, privateKey}`. The network and
/// account index are read back from `path`, so they can never disagree with
/// it. Loading a record re-validates the mnemonic and the path; use
/// [`WalletRecord::verify`] to also check the keys.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletRecord {
    mnemonic: WalletMnemonic,
    path: DerivationPath,
    public_key: String,
    private_key: String,
}

// Mnemonic tự wipe khi drop; chỉ cần xóa private key
impl Drop for WalletRecord {
    fn drop(&mut self) {
        self.private_key.zeroize();
    }
}

impl ZeroizeOnDrop for WalletRecord {}

// Custom Debug - không in mnemonic / private key
impl std::fmt::Debug for WalletRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletRecord")
            .field("path", &self.path.as_str())
            .field("public_key", &self.public_key)
            .field("mnemonic", &"[REDACTED]")
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

impl WalletRecord {
    pub(crate) fn new(
        mnemonic: WalletMnemonic,
        path: DerivationPath,
        public_key: String,
        private_key: String,
    ) -> Self {
        Self {
            mnemonic,
            path,
            public_key,
            private_key,
        }
    }

    #[inline]
    pub fn mnemonic(&self) -> &WalletMnemonic {
        &self.mnemonic
    }

    #[inline]
    pub fn path(&self) -> &DerivationPath {
        &self.path
    }

    #[inline]
    pub fn network(&self) -> NetworkKind {
        self.path.network()
    }

    #[inline]
    pub fn account_index(&self) -> u32 {
        self.path.account_index()
    }

    /// Solana: base58 public key. Ethereum: EIP-55 address.
    #[inline]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Solana: base58 64-byte secret key. Ethereum: lowercase hex.
    ///
    /// # Warning
    /// Cẩn thận khi hiển thị hoặc log giá trị này!
    #[inline]
    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    /// Re-derive from the record's own mnemonic and path and compare.
    ///
    /// `passphrase` must be the one the record was assembled with (`""` for
    /// records produced by [`crate::wallet::assemble`]).
    pub fn verify(&self, passphrase: &str) -> DerivationResult<bool> {
        let fresh = super::assembler::assemble_from(
            self.mnemonic.clone(),
            self.network(),
            self.account_index(),
            passphrase,
        )?;
        Ok(fresh == *self)
    }
}
