use serde::Serialize;
use uuid::Uuid;

use super::account::{Account, AccountCore, AccountKind, Receipt};
use crate::errors::Rejection;

/// Account that may go negative down to [`CheckingAccount::OVERDRAFT_LIMIT`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckingAccount {
    #[serde(flatten)]
    core: AccountCore,
}

impl CheckingAccount {
    /// How far below zero any checking balance may go.
    pub const OVERDRAFT_LIMIT: f64 = 500.0;

    pub fn new(holder: impl Into<String>, initial_deposit: f64) -> Self {
        Self {
            core: AccountCore::new(holder, initial_deposit),
        }
    }

    /// Largest withdrawal the account would currently accept.
    pub fn available(&self) -> f64 {
        self.core.balance() + Self::OVERDRAFT_LIMIT
    }
}

impl Account for CheckingAccount {
    fn id(&self) -> Uuid {
        self.core.id()
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Checking
    }

    fn holder(&self) -> &str {
        self.core.holder()
    }

    fn balance(&self) -> f64 {
        self.core.balance()
    }

    fn deposit(&mut self, amount: f64) -> Result<Receipt, Rejection> {
        let result = self.core.credit(amount);
        tracing::debug!(holder = self.holder(), amount, ?result, "checking deposit");
        result
    }

    fn withdraw(&mut self, amount: f64) -> Result<Receipt, Rejection> {
        let available = self.available();
        let result = if amount.is_nan() || amount <= 0.0 {
            Err(Rejection::InvalidAmount { amount })
        } else if amount > available {
            Err(Rejection::OverdraftLimitExceeded {
                requested: amount,
                available,
            })
        } else {
            Ok(self.core.debit(amount))
        };
        tracing::debug!(holder = self.holder(), amount, ?result, "checking withdrawal");
        result
    }

    fn displayed_balance(&self) -> f64 {
        self.core.balance()
    }
}
