//! Account contract, its savings and checking variants, and the closed sum
//! type used when the variant is picked at runtime.

pub mod account;
pub mod bank_account;
pub mod checking;
pub mod savings;

pub use account::{Account, AccountInfo, AccountKind, Operation, Receipt};
pub use bank_account::BankAccount;
pub use checking::CheckingAccount;
pub use savings::SavingsAccount;
