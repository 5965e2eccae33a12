pub mod incoming_finance;
pub mod not_found;
