//! Storefront API access: transport, query documents, cursor pagination,
//! and the record types the API returns.

mod client;
mod fetcher;
mod queries;
mod types;

pub use self::client::StorefrontClient;
pub use self::fetcher::{
    fetch_articles, fetch_metaobjects, fetch_pages, paginate, Connection, METAOBJECT_PAGE_DELAY,
    PAGE_SIZE,
};
pub use self::types::*;
