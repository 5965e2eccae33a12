pub mod account;
pub mod common;
pub mod layout;
pub mod transactions;
