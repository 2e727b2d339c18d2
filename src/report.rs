//! Human-readable notices for account activity and the collaborators that
//! receive them.

use serde::Serialize;

use crate::accounts::{Account, AccountInfo, AccountKind, Operation, Receipt};
use crate::errors::Rejection;
use crate::utils::format_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Section,
    Info,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn section(title: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Section, title)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, text)
    }

    /// Notice for the result of a deposit or withdrawal on an account of `kind`.
    pub fn outcome(
        kind: AccountKind,
        operation: Operation,
        outcome: &Result<Receipt, Rejection>,
    ) -> Self {
        match outcome {
            Ok(receipt) => Self::new(NoticeLevel::Accepted, accepted_text(kind, receipt)),
            Err(_) => Self::new(NoticeLevel::Rejected, rejected_text(kind, operation)),
        }
    }
}

fn accepted_text(kind: AccountKind, receipt: &Receipt) -> String {
    let (verb, preposition) = match receipt.operation {
        Operation::Deposit => ("Deposited", "into"),
        Operation::Withdrawal => ("Withdrew", "from"),
    };
    format!(
        "{verb} {} {preposition} {kind}. New balance: {}",
        format_amount(receipt.amount),
        format_amount(receipt.balance)
    )
}

// Withdrawal wording is per variant and does not distinguish the rejection reason.
fn rejected_text(kind: AccountKind, operation: Operation) -> &'static str {
    match (operation, kind) {
        (Operation::Deposit, _) => "Invalid deposit amount.",
        (Operation::Withdrawal, AccountKind::Savings) => {
            "Invalid or insufficient funds in Savings Account."
        }
        (Operation::Withdrawal, AccountKind::Checking) => {
            "Withdrawal amount exceeds overdraft limit."
        }
    }
}

/// Receives notices as account activity happens.
pub trait Reporter {
    fn report(&mut self, notice: Notice);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, notice: Notice) {
        (**self).report(notice);
    }
}

/// Discards every notice.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&mut self, _notice: Notice) {}
}

/// Keeps notices in memory, mostly for tests and structured callers.
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    pub notices: Vec<Notice>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<&str> {
        self.notices.iter().map(|n| n.text.as_str()).collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

/// Runs account operations and reports each result through a [`Reporter`].
pub struct Teller<'r> {
    reporter: &'r mut dyn Reporter,
}

impl<'r> Teller<'r> {
    pub fn new(reporter: &'r mut dyn Reporter) -> Self {
        Self { reporter }
    }

    pub fn deposit(
        &mut self,
        account: &mut dyn Account,
        amount: f64,
    ) -> Result<Receipt, Rejection> {
        let outcome = account.deposit(amount);
        self.reporter
            .report(Notice::outcome(account.kind(), Operation::Deposit, &outcome));
        outcome
    }

    pub fn withdraw(
        &mut self,
        account: &mut dyn Account,
        amount: f64,
    ) -> Result<Receipt, Rejection> {
        let outcome = account.withdraw(amount);
        self.reporter
            .report(Notice::outcome(account.kind(), Operation::Withdrawal, &outcome));
        outcome
    }

    /// Reports holder and raw balance.
    pub fn display_info(&mut self, account: &dyn Account) -> AccountInfo {
        let info = account.info();
        self.reporter
            .report(Notice::info(format!("Account Holder: {}", info.holder)));
        self.reporter.report(Notice::info(format!(
            "Current Balance: {}",
            format_amount(info.balance)
        )));
        info
    }

    pub fn section(&mut self, title: impl Into<String>) {
        self.reporter.report(Notice::section(title));
    }

    pub fn note(&mut self, text: impl Into<String>) {
        self.reporter.report(Notice::info(text));
    }
}
