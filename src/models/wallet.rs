use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::WalletError;
use crate::models::{Money, OwnerId, WalletId};

/// A single-currency wallet owned by one user.
///
/// Fields are private so the balance can only move through `deposit` and
/// `withdraw`, which keep it non-negative.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    id: WalletId,
    balance: Money,
    name: String,
    /// Secondary generated identifier. Random, not a validated bank account number.
    iban: String,
    #[serde(rename = "userId")]
    owner: OwnerId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Wallet {
    /// Builds an empty wallet. Owner and name are validated by the caller.
    pub fn create(owner: impl Into<OwnerId>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            balance: Money::zero(),
            name: name.into(),
            iban: Uuid::new_v4().to_string(),
            owner: owner.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> WalletId {
        self.id
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn iban(&self) -> &str {
        &self.iban
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn is_owned_by(&self, owner: &str) -> bool {
        self.owner == owner
    }

    pub fn deposit(&mut self, amount: Money) -> Result<&Self, WalletError> {
        require_positive(amount, "deposit")?;
        let balance = self.balance.checked_add(amount).ok_or_else(|| {
            WalletError::Validation("deposit would overflow the wallet balance".to_string())
        })?;
        self.balance = balance;
        self.updated_at = Utc::now();
        Ok(&*self)
    }

    /// Fails with `InsufficientFunds` and leaves the balance untouched when
    /// `amount` exceeds it.
    pub fn withdraw(&mut self, amount: Money) -> Result<&Self, WalletError> {
        require_positive(amount, "withdraw")?;
        if self.balance < amount {
            return Err(WalletError::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            });
        }
        // balance >= amount > 0, cannot underflow
        self.balance = Money::from_minor(self.balance.minor_units() - amount.minor_units());
        self.updated_at = Utc::now();
        Ok(&*self)
    }
}

fn require_positive(amount: Money, operation: &str) -> Result<(), WalletError> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(WalletError::Validation(format!(
            "{} amount must be greater than zero",
            operation
        )))
    }
}
