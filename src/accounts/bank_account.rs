use serde::Serialize;
use uuid::Uuid;

use super::{Account, AccountKind, CheckingAccount, Receipt, SavingsAccount};
use crate::errors::Rejection;

/// Either account variant, chosen when the account is opened.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BankAccount {
    Savings(SavingsAccount),
    Checking(CheckingAccount),
}

impl BankAccount {
    pub fn open(kind: AccountKind, holder: impl Into<String>, initial_deposit: f64) -> Self {
        match kind {
            AccountKind::Savings => Self::Savings(SavingsAccount::new(holder, initial_deposit)),
            AccountKind::Checking => Self::Checking(CheckingAccount::new(holder, initial_deposit)),
        }
    }

    fn inner(&self) -> &dyn Account {
        match self {
            Self::Savings(account) => account,
            Self::Checking(account) => account,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Account {
        match self {
            Self::Savings(account) => account,
            Self::Checking(account) => account,
        }
    }
}

impl From<SavingsAccount> for BankAccount {
    fn from(account: SavingsAccount) -> Self {
        Self::Savings(account)
    }
}

impl From<CheckingAccount> for BankAccount {
    fn from(account: CheckingAccount) -> Self {
        Self::Checking(account)
    }
}

impl Account for BankAccount {
    fn id(&self) -> Uuid {
        self.inner().id()
    }

    fn kind(&self) -> AccountKind {
        self.inner().kind()
    }

    fn holder(&self) -> &str {
        self.inner().holder()
    }

    fn balance(&self) -> f64 {
        self.inner().balance()
    }

    fn deposit(&mut self, amount: f64) -> Result<Receipt, Rejection> {
        self.inner_mut().deposit(amount)
    }

    fn withdraw(&mut self, amount: f64) -> Result<Receipt, Rejection> {
        self.inner_mut().withdraw(amount)
    }

    fn displayed_balance(&self) -> f64 {
        self.inner().displayed_balance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_picks_the_requested_variant() {
        let savings = BankAccount::open(AccountKind::Savings, "Alice", 10.0);
        let checking = BankAccount::open(AccountKind::Checking, "Bob", 10.0);
        assert!(matches!(savings, BankAccount::Savings(_)));
        assert_eq!(checking.kind(), AccountKind::Checking);
    }

    #[test]
    fn dispatch_uses_variant_rules() {
        let mut savings = BankAccount::open(AccountKind::Savings, "Alice", 10.0);
        let mut checking = BankAccount::open(AccountKind::Checking, "Bob", 10.0);

        assert!(savings.withdraw(20.0).is_err());
        assert_eq!(checking.withdraw(20.0).map(|r| r.balance), Ok(-10.0));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let account = BankAccount::open(AccountKind::Checking, "Bob", 5.0);
        let json = serde_json::to_value(&account).expect("serialize");
        assert_eq!(json["kind"], "checking");
        assert_eq!(json["holder"], "Bob");
        assert_eq!(json["balance"], 5.0);
    }
}
