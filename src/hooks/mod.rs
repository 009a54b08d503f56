pub mod use_commissions;
pub mod use_shop;
