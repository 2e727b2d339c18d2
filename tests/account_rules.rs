use bank_core::accounts::{Account, AccountKind, BankAccount, CheckingAccount, SavingsAccount};
use bank_core::errors::Rejection;

const EPSILON: f64 = 1e-9;

fn both(balance: f64) -> Vec<BankAccount> {
    vec![
        SavingsAccount::new("Alice", balance).into(),
        CheckingAccount::new("Bob", balance).into(),
    ]
}

#[test]
fn non_positive_deposits_are_rejected_for_every_variant() {
    for mut account in both(100.0) {
        for amount in [0.0, -0.01, -100.0] {
            let err = account.deposit(amount).expect_err("deposit must be refused");
            assert_eq!(err, Rejection::InvalidAmount { amount });
            assert_eq!(account.balance(), 100.0, "{:?}", account.kind());
        }
    }
}

#[test]
fn positive_deposits_add_exactly_the_amount() {
    for mut account in both(100.0) {
        let receipt = account.deposit(42.5).expect("deposit accepted");
        assert_eq!(receipt.amount, 42.5);
        assert_eq!(receipt.balance, 142.5);
        assert_eq!(account.balance(), 142.5);
    }
}

#[test]
fn savings_withdrawals_stay_within_balance() {
    let mut account = SavingsAccount::new("Alice", 300.0);

    assert!(account.withdraw(-1.0).is_err());
    assert!(account.withdraw(0.0).is_err());
    assert!(account.withdraw(300.5).is_err());
    assert!(matches!(
        account.withdraw(f64::NAN),
        Err(Rejection::InvalidAmount { amount }) if amount.is_nan()
    ));
    assert_eq!(account.balance(), 300.0);

    account.withdraw(120.0).expect("within balance");
    assert_eq!(account.balance(), 180.0);
}

#[test]
fn savings_displayed_balance_tracks_current_balance() {
    let mut account = SavingsAccount::new("Alice", 1000.0);
    assert!((account.displayed_balance() - 1030.0).abs() < EPSILON);

    account.deposit(500.0).expect("deposit accepted");
    let displayed = account.displayed_balance();
    assert!((displayed - 1500.0 * 1.03).abs() < EPSILON);
    assert_eq!(account.balance(), 1500.0);
    assert_eq!(account.displayed_balance(), displayed);
}

#[test]
fn checking_withdrawals_respect_overdraft_limit() {
    let mut account = CheckingAccount::new("Bob", 200.0);

    let err = account.withdraw(700.01).expect_err("past the limit");
    assert!(matches!(err, Rejection::OverdraftLimitExceeded { .. }));
    assert!(account.withdraw(0.0).is_err());
    assert!(matches!(
        account.withdraw(f64::NAN),
        Err(Rejection::InvalidAmount { amount }) if amount.is_nan()
    ));
    assert_eq!(account.balance(), 200.0);

    account.withdraw(700.0).expect("exactly at the limit");
    assert_eq!(account.balance(), -CheckingAccount::OVERDRAFT_LIMIT);
    assert!(account.withdraw(0.01).is_err());
    assert_eq!(account.displayed_balance(), -500.0);
}

#[test]
fn negative_opening_balance_is_accepted_as_given() {
    let account = BankAccount::open(AccountKind::Savings, "Zed", -10.0);
    assert_eq!(account.balance(), -10.0);
    assert_eq!(account.info().holder, "Zed");
}

#[test]
fn each_account_gets_its_own_id() {
    let first = SavingsAccount::new("Alice", 1.0);
    let second = SavingsAccount::new("Alice", 1.0);
    assert_ne!(first.id(), second.id());
}
