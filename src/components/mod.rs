pub mod commission_table;
pub mod commissions_view;
pub mod shop_selector;
pub mod status;

pub use commission_table::CommissionTable;
pub use commissions_view::CommissionsView;
pub use shop_selector::ShopSelector;
pub use status::{Status, StatusKind};
