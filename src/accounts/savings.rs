use serde::Serialize;
use uuid::Uuid;

use super::account::{Account, AccountCore, AccountKind, Receipt};
use crate::errors::Rejection;

/// Interest-bearing account that cannot be overdrawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsAccount {
    #[serde(flatten)]
    core: AccountCore,
}

impl SavingsAccount {
    /// Rate applied to the displayed balance of every savings account.
    pub const INTEREST_RATE: f64 = 0.03;

    pub fn new(holder: impl Into<String>, initial_deposit: f64) -> Self {
        Self {
            core: AccountCore::new(holder, initial_deposit),
        }
    }
}

impl Account for SavingsAccount {
    fn id(&self) -> Uuid {
        self.core.id()
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Savings
    }

    fn holder(&self) -> &str {
        self.core.holder()
    }

    fn balance(&self) -> f64 {
        self.core.balance()
    }

    fn deposit(&mut self, amount: f64) -> Result<Receipt, Rejection> {
        let result = self.core.credit(amount);
        tracing::debug!(holder = self.holder(), amount, ?result, "savings deposit");
        result
    }

    fn withdraw(&mut self, amount: f64) -> Result<Receipt, Rejection> {
        let available = self.core.balance();
        let result = if amount.is_nan() || amount <= 0.0 {
            Err(Rejection::InvalidAmount { amount })
        } else if amount > available {
            Err(Rejection::InsufficientFunds {
                requested: amount,
                available,
            })
        } else {
            Ok(self.core.debit(amount))
        };
        tracing::debug!(holder = self.holder(), amount, ?result, "savings withdrawal");
        result
    }

    /// Interest is applied on read only; the stored balance never compounds.
    fn displayed_balance(&self) -> f64 {
        let balance = self.core.balance();
        balance + balance * Self::INTEREST_RATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn withdraw_up_to_the_full_balance() {
        let mut account = SavingsAccount::new("Alice", 100.0);
        let receipt = account.withdraw(100.0).expect("exact balance is allowed");
        assert_eq!(receipt.balance, 0.0);
        assert_eq!(account.balance(), 0.0);
    }

    #[test]
    fn withdraw_beyond_balance_is_refused() {
        let mut account = SavingsAccount::new("Alice", 100.0);
        let err = account.withdraw(100.01).expect_err("no overdraft on savings");
        assert_eq!(
            err,
            Rejection::InsufficientFunds {
                requested: 100.01,
                available: 100.0
            }
        );
        assert_eq!(account.balance(), 100.0);
    }

    #[test]
    fn displayed_balance_does_not_compound() {
        let account = SavingsAccount::new("Alice", 1000.0);
        let first = account.displayed_balance();
        let second = account.displayed_balance();
        assert_eq!(first, second);
        assert_eq!(account.balance(), 1000.0);
        assert!((first - 1030.0).abs() < 1e-9);
    }
}
