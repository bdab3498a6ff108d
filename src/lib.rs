pub mod api;
pub mod display;
pub mod ids;
pub mod stats;
pub mod types;

/// Polymarket data API base URL (public, no auth required)
pub const DATA_API_BASE: &str = "https://data-api.polymarket.com";

/// Example trader used in help text — high-volume account with long history
pub const EXAMPLE_ADDRESS: &str = "0x56687bf447db6ffa42ffe2204a05edaa20f55839";

/// Example condition id used in help text
pub const EXAMPLE_CONDITION_ID: &str =
    "0xdd22472e552920b8438158ea7238bfadfa4f736aa4cee91a6b86c39ead110917";
