pub mod app;
pub mod environment;
pub mod error;
pub mod feed;
pub mod logging;
pub mod normalize;
pub mod sanitize;
pub mod storefront;

pub const TARGET_WEB_REQUEST: &str = "web_request";
pub const TARGET_FEED: &str = "feed";

pub use error::FeedError;
