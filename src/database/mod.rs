use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::error::WalletError;
use crate::models::{Wallet, WalletId};

pub type SharedStore = Arc<WalletStore>;

/// In-memory wallet repository.
///
/// The map lock only guards membership. Each wallet has its own mutex so
/// mutations on one wallet serialize without blocking the others. The map lock
/// is always released before a wallet lock is taken.
#[derive(Default)]
pub struct WalletStore {
    wallets: RwLock<HashMap<WalletId, Arc<Mutex<Wallet>>>>,
}

impl WalletStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new wallet. A duplicate id is a storage failure.
    pub async fn save(&self, wallet: Wallet) -> Result<Wallet, WalletError> {
        let mut wallets = self.wallets.write().await;
        if wallets.contains_key(&wallet.id()) {
            return Err(WalletError::Storage(format!(
                "wallet {} already exists",
                wallet.id()
            )));
        }
        wallets.insert(wallet.id(), Arc::new(Mutex::new(wallet.clone())));
        tracing::debug!(wallet_id = %wallet.id(), total = wallets.len(), "Wallet stored");
        Ok(wallet)
    }

    /// Snapshot of the wallet matching both id and owner.
    pub async fn get(&self, id: WalletId, owner: &str) -> Result<Wallet, WalletError> {
        let entry = self.entry(id).await?;
        let wallet = entry.lock().await;
        if !wallet.is_owned_by(owner) {
            return Err(WalletError::NotFound(id));
        }
        Ok(wallet.clone())
    }

    /// Runs `mutate` while holding the wallet's lock and returns the resulting
    /// snapshot. The wallet is left untouched when `mutate` fails.
    pub async fn update<F>(&self, id: WalletId, owner: &str, mutate: F) -> Result<Wallet, WalletError>
    where
        F: FnOnce(&mut Wallet) -> Result<(), WalletError>,
    {
        let entry = self.entry(id).await?;
        let mut wallet = entry.lock().await;
        if !wallet.is_owned_by(owner) {
            return Err(WalletError::NotFound(id));
        }
        mutate(&mut *wallet)?;
        Ok(wallet.clone())
    }

    pub async fn len(&self) -> usize {
        self.wallets.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.wallets.read().await.is_empty()
    }

    async fn entry(&self, id: WalletId) -> Result<Arc<Mutex<Wallet>>, WalletError> {
        self.wallets
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(WalletError::NotFound(id))
    }
}

pub fn new_store() -> SharedStore {
    Arc::new(WalletStore::new())
}
