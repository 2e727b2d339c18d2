use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use crate::errors::Rejection;

/// The two concrete account behaviours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Savings,
    Checking,
}

impl AccountKind {
    pub fn label(self) -> &'static str {
        match self {
            AccountKind::Savings => "Savings",
            AccountKind::Checking => "Checking",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Account", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Deposit,
    Withdrawal,
}

/// Confirmation of an accepted mutation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Receipt {
    pub operation: Operation,
    pub amount: f64,
    /// Raw balance after the mutation.
    pub balance: f64,
}

/// Holder name and raw balance, as shown by the account info display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountInfo {
    pub kind: AccountKind,
    pub holder: String,
    pub balance: f64,
}

/// Shared contract implemented by every account variant.
///
/// Operations never panic on bad amounts; a refused mutation comes back as a
/// [`Rejection`] and leaves the balance as it was.
pub trait Account {
    fn id(&self) -> Uuid;

    fn kind(&self) -> AccountKind;

    fn holder(&self) -> &str;

    /// Stored balance, without any variant adjustment.
    fn balance(&self) -> f64;

    fn deposit(&mut self, amount: f64) -> Result<Receipt, Rejection>;

    fn withdraw(&mut self, amount: f64) -> Result<Receipt, Rejection>;

    /// Variant-specific balance shown to the holder. Never mutates.
    fn displayed_balance(&self) -> f64;

    /// Reads the raw balance field, not [`Account::displayed_balance`].
    fn info(&self) -> AccountInfo {
        AccountInfo {
            kind: self.kind(),
            holder: self.holder().to_string(),
            balance: self.balance(),
        }
    }
}

/// State common to every variant. Only the owning variant mutates it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct AccountCore {
    id: Uuid,
    holder: String,
    balance: f64,
}

impl AccountCore {
    /// Opening balance is taken as given, negative values included.
    pub(crate) fn new(holder: impl Into<String>, initial_deposit: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            holder: holder.into(),
            balance: initial_deposit,
        }
    }

    pub(crate) fn id(&self) -> Uuid {
        self.id
    }

    pub(crate) fn holder(&self) -> &str {
        &self.holder
    }

    pub(crate) fn balance(&self) -> f64 {
        self.balance
    }

    /// Deposit rule shared by both variants.
    pub(crate) fn credit(&mut self, amount: f64) -> Result<Receipt, Rejection> {
        if amount.is_nan() || amount <= 0.0 {
            return Err(Rejection::InvalidAmount { amount });
        }
        self.balance += amount;
        Ok(Receipt {
            operation: Operation::Deposit,
            amount,
            balance: self.balance,
        })
    }

    /// Applies a withdrawal the variant has already approved.
    pub(crate) fn debit(&mut self, amount: f64) -> Receipt {
        self.balance -= amount;
        Receipt {
            operation: Operation::Withdrawal,
            amount,
            balance: self.balance,
        }
    }
}
