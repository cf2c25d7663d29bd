// wallet-core/src/session.rs
//
// Wallet Session - danh sách ví phía caller (UI / CLI)
//
// Core không giữ state; session này là collaborator bên ngoài: giữ mnemonic
// của phiên, đếm account index theo network và gọi `assemble` đúng 1 lần mỗi
// thao tác của người dùng.

use crate::crypto::WalletMnemonic;
use crate::error::DerivationError;
use crate::network::NetworkKind;
use crate::wallet::{self, WalletRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Derivation(#[from] DerivationError),

    #[error("Snapshot parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot record {0} was derived from a different mnemonic")]
    MixedMnemonics(usize),

    #[error("Snapshot record {0} does not reproduce from its mnemonic and path")]
    NotReproducible(usize),

    #[error("No wallet at position {0}")]
    NoSuchWallet(usize),

    #[error("Snapshot record {position} repeats path {path}")]
    DuplicatePath { position: usize, path: String },
}

pub type SessionResult<T> = std::result::Result<T, SessionError>;

/// Wallets derived from one mnemonic during a session.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct WalletSession {
    mnemonic: Option<WalletMnemonic>,
    wallets: Vec<WalletRecord>,
}

impl WalletSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mnemonic(mnemonic: WalletMnemonic) -> Self {
        Self {
            mnemonic: Some(mnemonic),
            wallets: Vec::new(),
        }
    }

    #[inline]
    pub fn mnemonic(&self) -> Option<&WalletMnemonic> {
        self.mnemonic.as_ref()
    }

    #[inline]
    pub fn records(&self) -> &[WalletRecord] {
        &self.wallets
    }

    pub fn records_for(&self, network: NetworkKind) -> impl Iterator<Item = &WalletRecord> {
        self.wallets.iter().filter(move |w| w.network() == network)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }

    /// Account index the next wallet on `network` will use: one past the
    /// highest index held, so removing a wallet never frees its index for
    /// reuse while a later one is still present.
    pub fn next_account_index(&self, network: NetworkKind) -> u32 {
        // account_index <= 2^31 - 1 nên +1 không tràn u32
        self.records_for(network)
            .map(|w| w.account_index() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Add one wallet for `network`.
    ///
    /// The first call uses `input` (or generates a phrase when it is empty);
    /// later calls reuse the session mnemonic and ignore `input`.
    pub fn add_wallet(&mut self, input: &str, network: NetworkKind) -> SessionResult<&WalletRecord> {
        let account_index = self.next_account_index(network);
        let record = match &self.mnemonic {
            Some(mnemonic) => wallet::assemble_from(mnemonic.clone(), network, account_index, "")?,
            None => wallet::assemble(input, network.as_str(), account_index)?,
        };

        if self.mnemonic.is_none() {
            self.mnemonic = Some(record.mnemonic().clone());
        }
        info!(network = %network, account_index, "wallet added to session");

        let position = self.wallets.len();
        self.wallets.push(record);
        Ok(&self.wallets[position])
    }

    /// Remove the wallet at `position` (insertion order).
    pub fn remove(&mut self, position: usize) -> SessionResult<WalletRecord> {
        if position >= self.wallets.len() {
            return Err(SessionError::NoSuchWallet(position));
        }
        let removed = self.wallets.remove(position);
        info!(network = %removed.network(), position, "wallet removed from session");
        Ok(removed)
    }

    /// Drop every wallet and the session mnemonic.
    pub fn clear(&mut self) {
        self.wallets.clear();
        self.mnemonic = None;
        info!("session cleared");
    }

    pub fn to_json(&self) -> SessionResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Load a snapshot the caller stored earlier.
    ///
    /// Every record must share the session mnemonic, use a path no earlier
    /// record uses, and re-derive to the stored keys.
    pub fn from_json(json: &str) -> SessionResult<Self> {
        let mut session: WalletSession = serde_json::from_str(json)?;
        if session.mnemonic.is_none() {
            session.mnemonic = session.wallets.first().map(|w| w.mnemonic().clone());
        }

        for (position, record) in session.wallets.iter().enumerate() {
            if session.mnemonic.as_ref() != Some(record.mnemonic()) {
                return Err(SessionError::MixedMnemonics(position));
            }
            if session.wallets[..position].iter().any(|w| w.path() == record.path()) {
                return Err(SessionError::DuplicatePath {
                    position,
                    path: record.path().to_string(),
                });
            }
            if !record.verify("")? {
                return Err(SessionError::NotReproducible(position));
            }
        }
        Ok(session)
    }
}
