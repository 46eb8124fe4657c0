//! RSS 2.0 feed serialization.
//!
//! Each entry point renders a complete document into one string: XML
//! declaration, an `rss` root carrying the Doofinder extension namespace,
//! one `channel`, and one `item` per record. Optional elements are omitted
//! outright when the source data lacks them; an empty tag would be indexed
//! as an empty value.

use chrono::{DateTime, FixedOffset, Utc};

use crate::environment::SITE_BASE_URL;
use crate::normalize::NormalizedItem;
use crate::sanitize::{clean_content, escape_xml};
use crate::storefront::{Article, Page};

const DOOFINDER_NAMESPACE: &str = "http://www.doofinder.com/xml-schema";

/// Render the blog-article feed.
pub fn article_feed(articles: &[Article]) -> String {
    let mut xml = document_header(
        "Latitudes Blog",
        &format!("{}/blogs", SITE_BASE_URL),
        "Blog articles from Latitudes",
    );

    for article in articles {
        let link = format!(
            "{}/blogs/{}/{}",
            SITE_BASE_URL, article.blog.handle, article.handle
        );
        let description = article
            .content
            .as_deref()
            .or(article.excerpt.as_deref());

        xml.push_str("    <item>\n");
        push_element(&mut xml, "doofinder:id", &escape_xml(Some(article.id.as_str())));
        push_element(&mut xml, "title", &escape_xml(Some(article.title.as_str())));
        push_element(&mut xml, "link", &escape_xml(Some(link.as_str())));
        push_element(
            &mut xml,
            "description",
            &escape_xml(Some(clean_content(description).as_str())),
        );
        if let Some(image) = &article.image {
            push_element(&mut xml, "doofinder:image_link", &escape_xml(Some(image.url.as_str())));
        }
        if let Some(date) = rfc1123(&article.published_at) {
            push_element(&mut xml, "pubDate", &date);
        }
        if let Some(author) = &article.author_v2 {
            push_element(&mut xml, "author", &escape_xml(Some(author.name.as_str())));
        }
        for tag in &article.tags {
            push_element(&mut xml, "category", &escape_xml(Some(tag.as_str())));
        }
        push_element(&mut xml, "doofinder:type", "article");
        xml.push_str("    </item>\n");
    }

    document_footer(xml)
}

/// Render the CMS-page feed.
pub fn page_feed(pages: &[Page]) -> String {
    let mut xml = document_header(
        "Latitudes Pages",
        SITE_BASE_URL,
        "Content pages from Latitudes",
    );

    for page in pages {
        let link = format!("{}/pages/{}", SITE_BASE_URL, page.handle);
        let description = page.body.as_deref().or(page.body_summary.as_deref());

        xml.push_str("    <item>\n");
        push_element(&mut xml, "doofinder:id", &escape_xml(Some(page.id.as_str())));
        push_element(&mut xml, "title", &escape_xml(Some(page.title.as_str())));
        push_element(&mut xml, "link", &escape_xml(Some(link.as_str())));
        push_element(
            &mut xml,
            "description",
            &escape_xml(Some(clean_content(description).as_str())),
        );
        if let Some(date) = rfc1123(&page.updated_at) {
            push_element(&mut xml, "pubDate", &date);
        }
        push_element(&mut xml, "doofinder:type", "page");
        xml.push_str("    </item>\n");
    }

    document_footer(xml)
}

/// Render a feed of normalized metaobject items under the given channel
/// title/link/description.
pub fn item_feed(
    items: &[NormalizedItem],
    channel_title: &str,
    channel_link: &str,
    channel_description: &str,
) -> String {
    let mut xml = document_header(channel_title, channel_link, channel_description);

    for item in items {
        xml.push_str("    <item>\n");
        push_element(&mut xml, "doofinder:id", &escape_xml(Some(item.id.as_str())));
        push_element(&mut xml, "title", &escape_xml(Some(item.title.as_str())));
        push_element(&mut xml, "link", &escape_xml(Some(item.link.as_str())));
        push_element(
            &mut xml,
            "description",
            &escape_xml(Some(clean_content(Some(item.description.as_str())).as_str())),
        );
        if let Some(image_url) = &item.image_url {
            push_element(&mut xml, "doofinder:image_link", &escape_xml(Some(image_url.as_str())));
        }
        if let Some(updated_at) = &item.updated_at {
            push_element(&mut xml, "pubDate", &http_date(updated_at));
        }
        push_element(&mut xml, "doofinder:type", &escape_xml(Some(item.item_type.as_str())));
        xml.push_str("    </item>\n");
    }

    document_footer(xml)
}

fn document_header(title: &str, link: &str, description: &str) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!(
        "<rss version=\"2.0\" xmlns:doofinder=\"{}\">\n",
        DOOFINDER_NAMESPACE
    ));
    xml.push_str("  <channel>\n");
    push_channel_element(&mut xml, "title", &escape_xml(Some(title)));
    push_channel_element(&mut xml, "link", &escape_xml(Some(link)));
    push_channel_element(&mut xml, "description", &escape_xml(Some(description)));
    xml
}

fn document_footer(mut xml: String) -> String {
    xml.push_str("  </channel>\n");
    xml.push_str("</rss>\n");
    xml
}

fn push_channel_element(xml: &mut String, name: &str, value: &str) {
    xml.push_str(&format!("    <{}>{}</{}>\n", name, value, name));
}

fn push_element(xml: &mut String, name: &str, value: &str) {
    xml.push_str(&format!("      <{}>{}</{}>\n", name, value, name));
}

/// HTTP-date rendering for an already-parsed timestamp.
fn http_date(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp
        .with_timezone(&Utc)
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}

/// Parse an RFC 3339 source timestamp and render it as an HTTP-date.
/// Unparseable input yields None and the caller omits the element.
fn rfc1123(timestamp: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|dt| http_date(&dt))
}
