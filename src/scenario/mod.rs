//! Demonstration walk-through: one savings and one checking account taken
//! through a few deposits and withdrawals.

use serde::Serialize;
use uuid::Uuid;

use crate::accounts::{Account, AccountKind, BankAccount, Operation};
use crate::report::{Reporter, Teller};
use crate::utils::format_amount;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Deposit(f64),
    Withdraw(f64),
}

/// Scripted activity for one account.
#[derive(Debug, Clone, Copy)]
pub struct Script {
    pub kind: AccountKind,
    pub holder: &'static str,
    pub opening_balance: f64,
    pub steps: &'static [Step],
    pub balance_label: &'static str,
}

/// Alice's savings and Bob's checking. Bob's withdrawal exceeds his balance
/// but stays inside the overdraft.
pub const DEMO: [Script; 2] = [
    Script {
        kind: AccountKind::Savings,
        holder: "Alice",
        opening_balance: 1000.0,
        steps: &[Step::Deposit(200.0), Step::Withdraw(100.0)],
        balance_label: "Savings Account Balance with Interest",
    },
    Script {
        kind: AccountKind::Checking,
        holder: "Bob",
        opening_balance: 500.0,
        steps: &[Step::Deposit(300.0), Step::Withdraw(1000.0)],
        balance_label: "Checking Account Balance",
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    pub operation: Operation,
    pub amount: f64,
    pub accepted: bool,
    /// Raw balance once the step was applied or refused.
    pub balance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountRun {
    pub id: Uuid,
    pub kind: AccountKind,
    pub holder: String,
    pub opening_balance: f64,
    pub steps: Vec<StepRecord>,
    pub balance: f64,
    pub displayed_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub accounts: Vec<AccountRun>,
}

impl ScenarioReport {
    pub fn account(&self, kind: AccountKind) -> Option<&AccountRun> {
        self.accounts.iter().find(|run| run.kind == kind)
    }
}

/// Runs the demo scripts, narrating through `reporter`.
pub fn run(reporter: &mut dyn Reporter) -> ScenarioReport {
    run_scripts(&DEMO, reporter)
}

/// Opens every account first, then exercises them in order.
pub fn run_scripts(scripts: &[Script], reporter: &mut dyn Reporter) -> ScenarioReport {
    tracing::info!(accounts = scripts.len(), "running account scenario");

    let mut opened: Vec<BankAccount> = scripts
        .iter()
        .map(|script| BankAccount::open(script.kind, script.holder, script.opening_balance))
        .collect();

    let mut teller = Teller::new(reporter);
    let accounts = scripts
        .iter()
        .zip(opened.iter_mut())
        .map(|(script, account)| exercise(&mut teller, script, account))
        .collect();

    tracing::info!("account scenario finished");
    ScenarioReport { accounts }
}

fn exercise(teller: &mut Teller<'_>, script: &Script, account: &mut BankAccount) -> AccountRun {
    teller.section(format!("{}:", account.kind()));
    let opening = teller.display_info(&*account);

    let steps: Vec<StepRecord> = script
        .steps
        .iter()
        .map(|step| {
            let (operation, amount, outcome) = match *step {
                Step::Deposit(amount) => {
                    (Operation::Deposit, amount, teller.deposit(&mut *account, amount))
                }
                Step::Withdraw(amount) => {
                    (Operation::Withdrawal, amount, teller.withdraw(&mut *account, amount))
                }
            };
            StepRecord {
                operation,
                amount,
                accepted: outcome.is_ok(),
                balance: account.balance(),
                rejection: outcome.err().map(|rejection| rejection.to_string()),
            }
        })
        .collect();

    let displayed_balance = account.displayed_balance();
    teller.note(format!(
        "{}: {}",
        script.balance_label,
        format_amount(displayed_balance)
    ));

    AccountRun {
        id: account.id(),
        kind: account.kind(),
        holder: opening.holder,
        opening_balance: opening.balance,
        steps,
        balance: account.balance(),
        displayed_balance,
    }
}
