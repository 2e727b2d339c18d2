use bank_core::accounts::{AccountKind, Operation};
use bank_core::report::{NoticeLevel, RecordingReporter};
use bank_core::scenario;

const NARRATIVE: [&str; 12] = [
    "Savings Account:",
    "Account Holder: Alice",
    "Current Balance: 1000.0",
    "Deposited 200.0 into Savings Account. New balance: 1200.0",
    "Withdrew 100.0 from Savings Account. New balance: 1100.0",
    "Savings Account Balance with Interest: 1133.0",
    "Checking Account:",
    "Account Holder: Bob",
    "Current Balance: 500.0",
    "Deposited 300.0 into Checking Account. New balance: 800.0",
    "Withdrew 1000.0 from Checking Account. New balance: -200.0",
    "Checking Account Balance: -200.0",
];

#[test]
fn narrative_matches_walk_through() {
    let mut reporter = RecordingReporter::new();
    scenario::run(&mut reporter);

    assert_eq!(reporter.lines(), NARRATIVE.to_vec());
    let sections = reporter
        .notices
        .iter()
        .filter(|n| n.level == NoticeLevel::Section)
        .count();
    assert_eq!(sections, 2);
}

#[test]
fn structured_report_carries_every_step() {
    let report = scenario::run(&mut RecordingReporter::new());
    assert_eq!(report.accounts.len(), 2);

    let savings = report.account(AccountKind::Savings).expect("savings");
    assert_eq!(savings.holder, "Alice");
    assert_eq!(savings.opening_balance, 1000.0);
    assert_eq!(
        savings
            .steps
            .iter()
            .map(|s| (s.operation, s.amount))
            .collect::<Vec<_>>(),
        vec![(Operation::Deposit, 200.0), (Operation::Withdrawal, 100.0)]
    );

    let checking = report.account(AccountKind::Checking).expect("checking");
    assert_eq!(checking.opening_balance, 500.0);
    assert_eq!(checking.steps[0].balance, 800.0);
    assert_eq!(checking.steps[1].balance, -200.0);
    assert_eq!(checking.displayed_balance, -200.0);
}

#[test]
fn report_serializes_to_json() {
    let report = scenario::run(&mut RecordingReporter::new());
    let json = serde_json::to_value(&report).expect("serialize report");

    assert_eq!(json["accounts"][0]["kind"], "savings");
    assert_eq!(json["accounts"][1]["balance"], -200.0);
    assert_eq!(json["accounts"][1]["steps"][1]["operation"], "withdrawal");
    assert!(json["accounts"][1]["steps"][1].get("rejection").is_none());
}
