pub mod checker;

pub use checker::{AccountChecker, AccountInfo, AccountStatus};
