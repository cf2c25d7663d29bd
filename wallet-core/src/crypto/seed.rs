// wallet-core/src/crypto/seed.rs
//
// Seed Deriver - BIP-39 mnemonic → 64-byte seed
// PBKDF2-HMAC-SHA512, 2048 rounds, salt = "mnemonic" || passphrase (NFKD)

use crate::crypto::mnemonic::WalletMnemonic;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

/// Số vòng PBKDF2 theo BIP-39
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Độ dài seed (bytes)
pub const SEED_LEN: usize = 64;

const SALT_PREFIX: &str = "mnemonic";

/// 64-byte BIP-39 seed, zeroized on drop.
///
/// Only constructible from a [`WalletMnemonic`], so an unvalidated phrase can
/// never be stretched into a seed.
pub(crate) struct Seed(Zeroizing<[u8; SEED_LEN]>);

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Seed([REDACTED])")
    }
}

impl Seed {
    pub(crate) fn derive(mnemonic: &WalletMnemonic, passphrase: &str) -> Self {
        let password = Zeroizing::new(mnemonic.phrase().nfkd().collect::<String>());
        let salt = Zeroizing::new(
            SALT_PREFIX
                .chars()
                .chain(passphrase.nfkd())
                .collect::<String>(),
        );

        let mut seed = Zeroizing::new([0u8; SEED_LEN]);
        pbkdf2_hmac::<Sha512>(
            password.as_bytes(),
            salt.as_bytes(),
            PBKDF2_ROUNDS,
            seed.as_mut_slice(),
        );
        Self(seed)
    }

    #[inline]
    pub(crate) fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }
}
