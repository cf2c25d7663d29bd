use multichain_keygen::{
    assemble, NetworkKind, SessionError, WalletMnemonic, WalletSession,
};
use serde_json::Value;

const TEST_MNEMONIC: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

fn sample_session() -> WalletSession {
    let mnemonic = WalletMnemonic::validate(TEST_MNEMONIC).expect("valid phrase");
    let mut session = WalletSession::with_mnemonic(mnemonic);
    session.add_wallet("", NetworkKind::Solana).expect("solana 0");
    session.add_wallet("", NetworkKind::Ethereum).expect("ethereum 0");
    session.add_wallet("", NetworkKind::Solana).expect("solana 1");
    session
}

#[test]
fn session_records_match_direct_assembly() {
    let session = sample_session();
    let expected = [
        assemble(TEST_MNEMONIC, "solana", 0).expect("valid input"),
        assemble(TEST_MNEMONIC, "ethereum", 0).expect("valid input"),
        assemble(TEST_MNEMONIC, "solana", 1).expect("valid input"),
    ];
    assert_eq!(session.records(), &expected[..]);
    assert_eq!(session.records_for(NetworkKind::Solana).count(), 2);
    assert_eq!(session.next_account_index(NetworkKind::Ethereum), 1);
}

#[test]
fn snapshot_round_trip() {
    let session = sample_session();
    let json = session.to_json().expect("serialize");

    let value: Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["mnemonic"], TEST_MNEMONIC);
    assert_eq!(value["wallets"][1]["path"], "m/44'/60'/0'/0'");
    assert_eq!(
        value["wallets"][1]["publicKey"],
        "0x2759A6Ad812b8A7B73A63a243816D66F5b72A0A7"
    );

    let loaded = WalletSession::from_json(&json).expect("load");
    assert_eq!(loaded.records(), session.records());
    assert_eq!(loaded.mnemonic(), session.mnemonic());
}

#[test]
fn snapshot_with_tampered_key_is_rejected() {
    let json = sample_session().to_json().expect("serialize");
    let mut value: Value = serde_json::from_str(&json).expect("valid json");
    value["wallets"][2]["privateKey"] = value["wallets"][0]["privateKey"].clone();

    let result = WalletSession::from_json(&value.to_string());
    assert!(matches!(result, Err(SessionError::NotReproducible(2))));
}

#[test]
fn snapshot_with_mixed_mnemonics_is_rejected() {
    let mut session = WalletSession::new();
    session.add_wallet("", NetworkKind::Ethereum).expect("generated");
    let foreign = assemble(TEST_MNEMONIC, "ethereum", 1).expect("valid input");

    let mut value: Value = serde_json::from_str(&session.to_json().expect("serialize"))
        .expect("valid json");
    let wallets = value["wallets"].as_array_mut().expect("array");
    wallets.push(serde_json::to_value(&foreign).expect("record json"));

    let result = WalletSession::from_json(&value.to_string());
    assert!(matches!(result, Err(SessionError::MixedMnemonics(1))));
}

#[test]
fn snapshot_with_repeated_path_is_rejected() {
    let json = sample_session().to_json().expect("serialize");
    let mut value: Value = serde_json::from_str(&json).expect("valid json");
    let first = value["wallets"][0].clone();
    value["wallets"].as_array_mut().expect("array").push(first);

    let result = WalletSession::from_json(&value.to_string());
    assert!(matches!(
        result,
        Err(SessionError::DuplicatePath { position: 3, ref path }) if path == "m/44'/501'/0'/0'"
    ));
}

#[test]
fn removing_a_middle_wallet_keeps_indices_unique() {
    let mut session = sample_session();
    session.remove(0).expect("solana 0 present");
    let added = session.add_wallet("", NetworkKind::Solana).expect("solana 2");
    assert_eq!(added.path().as_str(), "m/44'/501'/0'/2'");

    let mut paths: Vec<_> = session.records().iter().map(|w| w.path().to_string()).collect();
    paths.sort();
    paths.dedup();
    assert_eq!(paths.len(), session.records().len());

    // Snapshot sau khi xóa vẫn load lại được
    let loaded = WalletSession::from_json(&session.to_json().expect("serialize")).expect("load");
    assert_eq!(loaded.records(), session.records());
}

#[test]
fn snapshot_with_bad_path_fails_to_parse() {
    let json = sample_session().to_json().expect("serialize");
    let tampered = json.replace("m/44'/60'/0'/0'", "m/44'/0'/0'/0'");

    let result = WalletSession::from_json(&tampered);
    assert!(matches!(result, Err(SessionError::Json(_))));
}

#[test]
fn empty_snapshot_loads() {
    let json = WalletSession::new().to_json().expect("serialize");
    let loaded = WalletSession::from_json(&json).expect("load");
    assert!(loaded.is_empty());
    assert!(loaded.mnemonic().is_none());
}
