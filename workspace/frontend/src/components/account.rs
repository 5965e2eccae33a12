pub mod balance;
pub mod banner;
