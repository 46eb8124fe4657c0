//! One-shot feed export run.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::environment::{Config, SITE_BASE_URL};
use crate::error::Result;
use crate::feed::{article_feed, item_feed, page_feed};
use crate::normalize::normalize_metaobject;
use crate::storefront::{fetch_articles, fetch_metaobjects, fetch_pages, StorefrontClient};
use crate::TARGET_FEED;

pub const BLOGS_FEED_FILE: &str = "doofinder-blogs-feed.xml";
pub const PAGES_FEED_FILE: &str = "doofinder-pages-feed.xml";
pub const EXHIBITORS_FEED_FILE: &str = "doofinder-exhibitors-feed.xml";
pub const SHOWS_FEED_FILE: &str = "doofinder-shows-feed.xml";

/// Fetch everything, normalize the metaobject collections, and write the
/// four feed files. A failure anywhere aborts the run; files already
/// written before the failure are left in place.
pub async fn run(config: &Config, output_dir: &Path) -> Result<()> {
    let client = StorefrontClient::new(config)?;

    // The four fetches share nothing but the client, so they overlap
    // freely. The first failure cancels the rest.
    let (articles, pages, exhibitors, shows) = tokio::try_join!(
        fetch_articles(&client),
        fetch_pages(&client),
        fetch_metaobjects(&client, "exhibitor"),
        fetch_metaobjects(&client, "show"),
    )?;

    let exhibitor_items: Vec<_> = exhibitors
        .iter()
        .map(|m| normalize_metaobject(m, None))
        .collect();
    let show_items: Vec<_> = shows
        .iter()
        .map(|m| normalize_metaobject(m, Some("pages/shows")))
        .collect();

    write_feed(output_dir, BLOGS_FEED_FILE, article_feed(&articles), articles.len())?;
    write_feed(output_dir, PAGES_FEED_FILE, page_feed(&pages), pages.len())?;
    write_feed(
        output_dir,
        EXHIBITORS_FEED_FILE,
        item_feed(
            &exhibitor_items,
            "Latitudes Exhibitors",
            &format!("{}/exhibitors", SITE_BASE_URL),
            "Exhibitor directory from Latitudes",
        ),
        exhibitor_items.len(),
    )?;
    write_feed(
        output_dir,
        SHOWS_FEED_FILE,
        item_feed(
            &show_items,
            "Latitudes Shows",
            &format!("{}/pages/shows", SITE_BASE_URL),
            "Show listings from Latitudes",
        ),
        show_items.len(),
    )?;

    Ok(())
}

fn write_feed(output_dir: &Path, file_name: &str, xml: String, item_count: usize) -> Result<()> {
    let path: PathBuf = output_dir.join(file_name);
    let bytes = xml.len();
    fs::write(&path, xml)?;
    info!(
        target: TARGET_FEED,
        "Wrote {} ({} items, {} bytes)", path.display(), item_count, bytes
    );
    Ok(())
}
