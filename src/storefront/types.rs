//! Type definitions for records returned by the Storefront API.

use serde::Deserialize;

/// Cursor state reported by a connection's `pageInfo` object.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub url: String,
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogRef {
    pub handle: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
}

/// A blog article. Immutable within a run.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    pub published_at: String,
    #[serde(default)]
    pub image: Option<Image>,
    pub blog: BlogRef,
    #[serde(default)]
    pub author_v2: Option<Author>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A CMS page. Immutable within a run.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub body_summary: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// A schema-flexible typed record: a handle, a type tag, and an arbitrary
/// list of key/value fields, some of which reference media.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metaobject {
    pub id: String,
    pub handle: String,
    #[serde(rename = "type")]
    pub object_type: String,
    pub updated_at: Option<String>,
    #[serde(default)]
    pub fields: Vec<MetaobjectField>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaobjectField {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub reference: Option<FieldReference>,
}

/// Tagged reference attached to a metaobject field. Types we do not handle
/// (videos, products) fall into `Other` and are ignored during
/// normalization.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "__typename")]
pub enum FieldReference {
    MediaImage {
        image: Option<Image>,
    },
    GenericFile {
        url: Option<String>,
        #[serde(rename = "mimeType")]
        mime_type: Option<String>,
    },
    Metaobject {
        id: String,
        handle: String,
    },
    #[serde(other)]
    Other,
}

impl FieldReference {
    /// URL of an image carried by this reference, if any. A direct media
    /// image wins over a generic file; generic files only count when their
    /// mime type is image/*.
    pub fn image_url(&self) -> Option<&str> {
        match self {
            FieldReference::MediaImage { image } => image.as_ref().map(|i| i.url.as_str()),
            FieldReference::GenericFile { url, mime_type } => {
                match mime_type.as_deref() {
                    Some(mime) if mime.starts_with("image/") => url.as_deref(),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_deserializes_by_typename() {
        let json = r#"{"__typename": "MediaImage", "image": {"url": "https://x/img.png", "altText": null}}"#;
        let reference: FieldReference = serde_json::from_str(json).unwrap();
        assert_eq!(reference.image_url(), Some("https://x/img.png"));
    }

    #[test]
    fn test_unknown_reference_type_is_tolerated() {
        let json = r#"{"__typename": "Video"}"#;
        let reference: FieldReference = serde_json::from_str(json).unwrap();
        assert!(reference.image_url().is_none());
    }

    #[test]
    fn test_generic_file_requires_image_mime_type() {
        let pdf = FieldReference::GenericFile {
            url: Some("https://x/file.pdf".to_string()),
            mime_type: Some("application/pdf".to_string()),
        };
        assert!(pdf.image_url().is_none());

        let png = FieldReference::GenericFile {
            url: Some("https://x/file.png".to_string()),
            mime_type: Some("image/png".to_string()),
        };
        assert_eq!(png.image_url(), Some("https://x/file.png"));
    }
}
