/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Backend base URL, overridable at build time with `COMMISSIONS_API_URL`
    pub const API_BASE_URL: &'static str = match option_env!("COMMISSIONS_API_URL") {
        Some(url) => url,
        None => "http://localhost:8000",
    };

    /// Currency label prefixed to every displayed amount
    pub const CURRENCY_LABEL: &'static str = "SSP";

    /// Delay before a typed shop id is committed
    pub const SHOP_INPUT_DEBOUNCE_MS: u32 = 400;

    /// localStorage key for the last selected shop
    pub const SHOP_STORAGE_KEY: &'static str = "selected_shop";
}
