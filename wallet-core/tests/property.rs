use bip39::{Language, Mnemonic};
use multichain_keygen::chains::{EvmAddress, SolanaKeypair};
use multichain_keygen::{
    assemble, DerivationError, DerivationPath, NetworkKind, WalletMnemonic, MAX_ACCOUNT_INDEX,
};
use proptest::prelude::*;

// PBKDF2 2048 vòng mỗi case → giữ số case vừa phải
fn config() -> ProptestConfig {
    ProptestConfig::with_cases(24)
}

fn any_phrase() -> impl Strategy<Value = String> {
    prop::array::uniform16(any::<u8>()).prop_map(|entropy| {
        Mnemonic::from_entropy_in(Language::English, &entropy)
            .expect("16 bytes is a valid entropy length")
            .to_string()
    })
}

fn any_network() -> impl Strategy<Value = NetworkKind> {
    prop::sample::select(NetworkKind::ALL.to_vec())
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn generated_phrases_validate(_round in 0u8..4) {
        let generated = WalletMnemonic::generate().expect("os rng");
        let validated = WalletMnemonic::validate(generated.phrase()).expect("round trip");
        prop_assert_eq!(validated, generated);
    }

    #[test]
    fn assemble_is_deterministic(phrase in any_phrase(), network in any_network(), index in 0u32..1000) {
        let a = assemble(&phrase, network.as_str(), index).expect("valid input");
        let b = assemble(&phrase, network.as_str(), index).expect("valid input");
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.verify(""), Ok(true));
    }

    #[test]
    fn encodings_are_well_formed(phrase in any_phrase(), index in 0u32..1000) {
        let solana = assemble(&phrase, "solana", index).expect("valid input");
        prop_assert!(SolanaKeypair::is_valid_address(solana.public_key()));
        let blob = bs58::decode(solana.private_key()).into_vec().expect("base58");
        prop_assert_eq!(blob.len(), 64);
        let public = bs58::decode(solana.public_key()).into_vec().expect("base58");
        prop_assert_eq!(&blob[32..], &public[..]);

        let ethereum = assemble(&phrase, "ethereum", index).expect("valid input");
        prop_assert!(EvmAddress::is_valid(ethereum.public_key()));
        prop_assert_eq!(ethereum.private_key().len(), 64);
        prop_assert!(ethereum.private_key().chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }
}

proptest! {
    #[test]
    fn hardened_range_accepted(network in any_network(), index in 0u32..=MAX_ACCOUNT_INDEX) {
        let path = DerivationPath::new(network, index).expect("in range");
        let expected_suffix = format!("/0'/{}'", index);
        prop_assert!(path.as_str().ends_with(&expected_suffix));
        prop_assert_eq!(path.as_str().parse::<DerivationPath>(), Ok(path.clone()));
    }

    #[test]
    fn hardened_overflow_rejected(network in any_network(), index in (MAX_ACCOUNT_INDEX + 1)..=u32::MAX) {
        // Lỗi index báo trước khi chạy PBKDF2
        let phrase = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
        prop_assert_eq!(
            assemble(phrase, network.as_str(), index),
            Err(DerivationError::InvalidAccountIndex(index))
        );
    }

    #[test]
    fn wrong_word_counts_rejected(count in 1usize..30) {
        prop_assume!(![12, 15, 18, 21, 24].contains(&count));
        let phrase = vec!["abandon"; count].join(" ");
        prop_assert!(matches!(
            assemble(&phrase, "solana", 0),
            Err(DerivationError::InvalidMnemonic(_))
        ));
    }
}
