//! Cursor-paginated fetching.
//!
//! Each fetch drives one connection from no cursor to `hasNextPage: false`,
//! accumulating nodes in the order the API returns them. Metaobject fetches
//! insert a fixed delay between pages to stay under the rate limit;
//! article/page fetches issue pages back-to-back.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::future::Future;
use tokio::time::{sleep, Duration};
use tracing::{debug, error, info};

use super::client::StorefrontClient;
use super::queries::{ARTICLES_QUERY, METAOBJECTS_QUERY, PAGES_QUERY};
use super::types::{Article, Metaobject, Page, PageInfo};
use crate::error::{FeedError, Result};
use crate::TARGET_WEB_REQUEST;

pub const PAGE_SIZE: u32 = 250;
pub const METAOBJECT_PAGE_DELAY: Duration = Duration::from_millis(500);

/// One page of a GraphQL connection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    pub page_info: PageInfo,
    pub nodes: Vec<T>,
}

/// Drive a page source until it reports no next page, accumulating nodes in
/// arrival order. `page_delay` is slept between successive requests, not
/// after the final one.
pub async fn paginate<T, F, Fut>(mut fetch_page: F, page_delay: Option<Duration>) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Connection<T>>>,
{
    let mut nodes = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = fetch_page(cursor.take()).await?;
        debug!(target: TARGET_WEB_REQUEST, "Fetched page with {} nodes", page.nodes.len());
        nodes.extend(page.nodes);

        if !page.page_info.has_next_page {
            break;
        }
        cursor = page.page_info.end_cursor;

        if let Some(delay) = page_delay {
            sleep(delay).await;
        }
    }

    Ok(nodes)
}

/// Fetch every blog article.
pub async fn fetch_articles(client: &StorefrontClient) -> Result<Vec<Article>> {
    let articles = paginate(
        |cursor| async move {
            let data = client
                .execute(ARTICLES_QUERY, json!({ "first": PAGE_SIZE, "after": cursor }))
                .await?;
            take_connection(data, "articles")
        },
        None,
    )
    .await?;

    info!(target: TARGET_WEB_REQUEST, "Fetched {} articles", articles.len());
    Ok(articles)
}

/// Fetch every CMS page.
pub async fn fetch_pages(client: &StorefrontClient) -> Result<Vec<Page>> {
    let pages = paginate(
        |cursor| async move {
            let data = client
                .execute(PAGES_QUERY, json!({ "first": PAGE_SIZE, "after": cursor }))
                .await?;
            take_connection(data, "pages")
        },
        None,
    )
    .await?;

    info!(target: TARGET_WEB_REQUEST, "Fetched {} pages", pages.len());
    Ok(pages)
}

/// Fetch every metaobject of one type, pausing between pages.
pub async fn fetch_metaobjects(
    client: &StorefrontClient,
    object_type: &str,
) -> Result<Vec<Metaobject>> {
    let metaobjects = paginate(
        |cursor| async move {
            let data = client
                .execute(
                    METAOBJECTS_QUERY,
                    json!({ "type": object_type, "first": PAGE_SIZE, "after": cursor }),
                )
                .await?;
            take_connection(data, "metaobjects")
        },
        Some(METAOBJECT_PAGE_DELAY),
    )
    .await?;

    info!(
        target: TARGET_WEB_REQUEST,
        "Fetched {} metaobjects of type {}", metaobjects.len(), object_type
    );
    Ok(metaobjects)
}

/// Pull the named connection out of a `data` object. The raw response is
/// logged when the key is absent so a schema change can be diagnosed.
fn take_connection<T: DeserializeOwned>(mut data: Value, key: &str) -> Result<Connection<T>> {
    if data.get(key).map_or(true, Value::is_null) {
        error!(target: TARGET_WEB_REQUEST, "Response data has no `{}` field: {}", key, data);
        return Err(FeedError::UnexpectedShape(format!(
            "response data has no `{}` field",
            key
        )));
    }

    let connection = data[key].take();
    serde_json::from_value(connection)
        .map_err(|err| FeedError::UnexpectedShape(format!("malformed `{}` connection: {}", key, err)))
}
