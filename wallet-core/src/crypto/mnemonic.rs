// wallet-core/src/crypto/mnemonic.rs
//
// Mnemonic Manager - BIP-39 generate / validate
// Seed stretching nằm ở `crypto::seed`, module này chỉ lo phrase.

use crate::error::MnemonicError;
use bip39::{Language, Mnemonic};
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Số lượng words hỗ trợ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum WordCount {
    /// 12 words (128-bit entropy)
    #[default]
    Twelve = 12,
    /// 15 words (160-bit entropy)
    Fifteen = 15,
    /// 18 words (192-bit entropy)
    Eighteen = 18,
    /// 21 words (224-bit entropy)
    TwentyOne = 21,
    /// 24 words (256-bit entropy)
    TwentyFour = 24,
}

impl WordCount {
    /// Lấy số bytes entropy cần thiết
    #[inline]
    pub const fn entropy_bytes(self) -> usize {
        match self {
            WordCount::Twelve => 16,
            WordCount::Fifteen => 20,
            WordCount::Eighteen => 24,
            WordCount::TwentyOne => 28,
            WordCount::TwentyFour => 32,
        }
    }

    #[inline]
    pub const fn strength_bits(self) -> usize {
        self.entropy_bytes() * 8
    }
}

impl TryFrom<usize> for WordCount {
    type Error = MnemonicError;

    fn try_from(count: usize) -> Result<Self, Self::Error> {
        match count {
            12 => Ok(WordCount::Twelve),
            15 => Ok(WordCount::Fifteen),
            18 => Ok(WordCount::Eighteen),
            21 => Ok(WordCount::TwentyOne),
            24 => Ok(WordCount::TwentyFour),
            other => Err(MnemonicError::InvalidWordCount(other)),
        }
    }
}

impl From<WordCount> for usize {
    fn from(count: WordCount) -> Self {
        count as usize
    }
}

/// A checksum-valid BIP-39 phrase.
///
/// The only ways to obtain one are [`WalletMnemonic::generate`] and
/// [`WalletMnemonic::validate`], so holding a `WalletMnemonic` means the
/// phrase has already passed word-count, wordlist and checksum checks.
///
/// # Security
/// - **ZeroizeOnDrop**: phrase bị ghi đè bằng 0 khi drop
/// - **CSPRNG**: entropy lấy từ `OsRng`
/// - **No Debug Leak**: Debug không in phrase
///
/// There is no public `zeroize()`: a live value can never be blanked into
/// an unvalidated phrase. Wiping happens only on drop.
///
/// ```compile_fail
/// use zeroize::Zeroize;
///
/// let mut mnemonic = multichain_keygen::WalletMnemonic::generate().unwrap();
/// mnemonic.zeroize();
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct WalletMnemonic {
    phrase: String,
    word_count: WordCount,
}

impl Drop for WalletMnemonic {
    fn drop(&mut self) {
        self.phrase.zeroize();
    }
}

impl ZeroizeOnDrop for WalletMnemonic {}

// Custom Debug - KHÔNG BAO GIỜ hiển thị mnemonic phrase
impl std::fmt::Debug for WalletMnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletMnemonic")
            .field("word_count", &(self.word_count as usize))
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl WalletMnemonic {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Tạo mnemonic mới với 12 words (128-bit entropy)
    pub fn generate() -> Result<Self, MnemonicError> {
        Self::generate_with(WordCount::Twelve)
    }

    /// Tạo mnemonic với số lượng words tùy chỉnh
    pub fn generate_with(word_count: WordCount) -> Result<Self, MnemonicError> {
        let entropy_size = word_count.entropy_bytes();

        // Stack-allocated entropy buffer (max 32 bytes)
        let mut entropy = [0u8; 32];
        OsRng.fill_bytes(&mut entropy[..entropy_size]);

        let mnemonic = Mnemonic::from_entropy(&entropy[..entropy_size])
            .map_err(|e| MnemonicError::Bip39(e.to_string()));

        // Zeroize entropy ngay sau khi sử dụng
        entropy.zeroize();

        Ok(Self {
            phrase: mnemonic?.to_string(),
            word_count,
        })
    }

    /// Validate a user-supplied phrase.
    ///
    /// The candidate is trimmed and split on single spaces; runs of spaces
    /// leave empty tokens and are rejected rather than collapsed. Checks run
    /// in order: word count, wordlist membership, checksum.
    pub fn validate(candidate: &str) -> Result<Self, MnemonicError> {
        let words: Vec<&str> = candidate.trim().split(' ').collect();
        let word_count = WordCount::try_from(words.len())?;

        if let Some((index, word)) = words
            .iter()
            .enumerate()
            .find(|(_, word)| !Self::is_valid_word(word))
        {
            return Err(MnemonicError::UnknownWord {
                index,
                word: (*word).to_string(),
            });
        }

        let phrase = words.join(" ");
        Mnemonic::parse_in_normalized(Language::English, &phrase).map_err(|e| match e {
            bip39::Error::InvalidChecksum => MnemonicError::ChecksumFailed,
            bip39::Error::BadWordCount(count) => MnemonicError::InvalidWordCount(count),
            bip39::Error::UnknownWord(index) => MnemonicError::UnknownWord {
                index,
                word: words.get(index).copied().unwrap_or_default().to_string(),
            },
            other => MnemonicError::Bip39(other.to_string()),
        })?;

        Ok(Self { phrase, word_count })
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// Lấy mnemonic phrase
    ///
    /// # Warning
    /// Cẩn thận khi hiển thị hoặc log giá trị này!
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count as usize
    }

    pub fn words(&self) -> Vec<&str> {
        self.phrase.split(' ').collect()
    }

    #[inline]
    pub fn strength_bits(&self) -> usize {
        self.word_count.strength_bits()
    }

    /// Kiểm tra một từ có trong BIP-39 English wordlist không
    pub fn is_valid_word(word: &str) -> bool {
        // English wordlist đã được sắp xếp nên binary search được
        Language::English.word_list().binary_search(&word).is_ok()
    }
}

impl Serialize for WalletMnemonic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.phrase)
    }
}

impl<'de> Deserialize<'de> for WalletMnemonic {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut phrase = String::deserialize(deserializer)?;
        let validated = Self::validate(&phrase).map_err(serde::de::Error::custom);
        phrase.zeroize();
        validated
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
