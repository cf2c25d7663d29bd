// wallet-core/src/network/models.rs
//
// Network identification - closed set of supported chains.
// Thêm network mới = thêm variant + nhánh Keypair Builder (compiler sẽ bắt
// mọi `match` chưa xử lý).

use crate::crypto::paths::coin_type;
use crate::error::DerivationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported networks.
///
/// Parsed from the caller's string tag before any cryptographic code runs,
/// so a malformed tag never reaches the key builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkKind {
    /// Solana - Ed25519, base58 keys
    #[default]
    Solana,
    /// Ethereum - secp256k1, EIP-55 address
    Ethereum,
}

impl NetworkKind {
    pub const ALL: [NetworkKind; 2] = [NetworkKind::Solana, NetworkKind::Ethereum];

    /// SLIP-44 coin type
    #[inline]
    pub const fn coin_type(self) -> u32 {
        match self {
            NetworkKind::Solana => coin_type::SOLANA,
            NetworkKind::Ethereum => coin_type::ETHEREUM,
        }
    }

    pub fn from_coin_type(coin: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.coin_type() == coin)
    }

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            NetworkKind::Solana => "solana",
            NetworkKind::Ethereum => "ethereum",
        }
    }

    /// Tên hiển thị
    pub const fn display_name(self) -> &'static str {
        match self {
            NetworkKind::Solana => "Solana",
            NetworkKind::Ethereum => "Ethereum",
        }
    }
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkKind {
    type Err = DerivationError;

    /// Accepts the canonical tags and the coin-type tags ("501", "60")
    /// that older persisted wallet lists used.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "solana" => Ok(NetworkKind::Solana),
            "ethereum" => Ok(NetworkKind::Ethereum),
            // So khớp chuỗi chính xác: "060", "+60" không được chấp nhận
            other => Self::ALL
                .into_iter()
                .find(|n| n.coin_type().to_string() == other)
                .ok_or_else(|| DerivationError::UnsupportedNetwork(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_types() {
        assert_eq!(NetworkKind::Solana.coin_type(), 501);
        assert_eq!(NetworkKind::Ethereum.coin_type(), 60);
        assert_eq!(NetworkKind::from_coin_type(60), Some(NetworkKind::Ethereum));
        assert_eq!(NetworkKind::from_coin_type(0), None);
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!("solana".parse::<NetworkKind>(), Ok(NetworkKind::Solana));
        assert_eq!("ethereum".parse::<NetworkKind>(), Ok(NetworkKind::Ethereum));
        assert_eq!("501".parse::<NetworkKind>(), Ok(NetworkKind::Solana));
        assert_eq!("60".parse::<NetworkKind>(), Ok(NetworkKind::Ethereum));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for tag in ["bitcoin", "Solana", "", "0", " solana", "118"] {
            assert_eq!(
                tag.parse::<NetworkKind>(),
                Err(DerivationError::UnsupportedNetwork(tag.to_string())),
                "tag {:?} should be rejected",
                tag
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_canonical_coin_types() {
        for tag in ["060", "+60", "0501", "60 ", "6e1", "eth"] {
            assert_eq!(
                tag.parse::<NetworkKind>(),
                Err(DerivationError::UnsupportedNetwork(tag.to_string())),
                "tag {:?} should be rejected",
                tag
            );
        }
    }

    #[test]
    fn test_display_roundtrip() {
        for network in NetworkKind::ALL {
            assert_eq!(network.to_string().parse::<NetworkKind>(), Ok(network));
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&NetworkKind::Ethereum).unwrap();
        assert_eq!(json, "\"ethereum\"");
        let back: NetworkKind = serde_json::from_str("\"solana\"").unwrap();
        assert_eq!(back, NetworkKind::Solana);
    }
}
