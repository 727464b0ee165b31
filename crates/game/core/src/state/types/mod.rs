pub mod account;
pub mod common;
pub mod hamster;

// Re-export account types
pub use account::{Account, NewAccount, Roles};

// Re-export common types
pub use common::{AccountId, Gold, HamsterId};

// Re-export hamster types
pub use hamster::{Gender, Hamster, NewHamster};
