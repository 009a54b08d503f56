pub mod commission;
pub mod error;
pub mod shop;
