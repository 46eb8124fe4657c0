//! Metaobject normalization.
//!
//! Maps a schema-flexible metaobject into the fixed item shape the feeds
//! carry. Each semantic slot (title, description, link, image) resolves
//! through an ordered chain: type-specific hint keys, then generic fallback
//! keys, then a structural default. Pure functions throughout; the same
//! metaobject always normalizes to the same item.

mod hints;

use chrono::{DateTime, FixedOffset};
use std::collections::HashMap;

use crate::environment::SITE_BASE_URL;
use crate::storefront::{Metaobject, MetaobjectField};

pub use self::hints::{hints_for, TypeHints, METAOBJECT_FIELD_DEFAULTS, METAOBJECT_TYPE_HINTS};

/// Uniform display item derived from one metaobject. Built once per run,
/// never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub link: String,
    pub image_url: Option<String>,
    pub updated_at: Option<DateTime<FixedOffset>>,
    pub item_type: String,
}

/// Normalize one metaobject. `path_segment` overrides the URL path used
/// when no field supplies a link (defaults to the pluralized type tag).
pub fn normalize_metaobject(
    metaobject: &Metaobject,
    path_segment: Option<&str>,
) -> NormalizedItem {
    let object_type = metaobject.object_type.as_str();
    let field_map = build_field_map(&metaobject.fields);
    let type_hints = hints_for(object_type);

    let title = resolve_value(
        &field_map,
        type_hints.map(|h| h.title),
        METAOBJECT_FIELD_DEFAULTS.title,
    )
    .unwrap_or_else(|| metaobject.handle.clone());

    let description = resolve_value(
        &field_map,
        type_hints.map(|h| h.description),
        METAOBJECT_FIELD_DEFAULTS.description,
    )
    .unwrap_or_else(|| concatenated_field_values(&metaobject.fields));

    let link = resolve_value(
        &field_map,
        type_hints.map(|h| h.link),
        METAOBJECT_FIELD_DEFAULTS.link,
    )
    .unwrap_or_else(|| default_link(object_type, &metaobject.handle, path_segment));

    let image_url = resolve_image(
        &field_map,
        type_hints.map(|h| h.image),
        METAOBJECT_FIELD_DEFAULTS.image,
    );

    let updated_at = metaobject
        .updated_at
        .as_deref()
        .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok());

    NormalizedItem {
        id: format!("{}-{}", object_type, metaobject.handle),
        title,
        description,
        link,
        image_url,
        updated_at,
        item_type: object_type.to_string(),
    }
}

/// Key -> field lookup; a duplicated key keeps its last occurrence.
fn build_field_map(fields: &[MetaobjectField]) -> HashMap<&str, &MetaobjectField> {
    let mut map = HashMap::new();
    for field in fields {
        map.insert(field.key.as_str(), field);
    }
    map
}

/// Try each candidate key in order across the hint list then the fallback
/// list. A key counts as found once its scalar value is non-null; the empty
/// string is a valid found value.
fn resolve_value(
    field_map: &HashMap<&str, &MetaobjectField>,
    type_keys: Option<&[&str]>,
    fallback_keys: &[&str],
) -> Option<String> {
    type_keys
        .unwrap_or(&[])
        .iter()
        .chain(fallback_keys.iter())
        .find_map(|key| {
            field_map
                .get(key)
                .and_then(|field| field.value.clone())
        })
}

/// Like `resolve_value`, but resolves through the field's reference: the
/// first candidate key whose reference yields an image URL wins.
fn resolve_image(
    field_map: &HashMap<&str, &MetaobjectField>,
    type_keys: Option<&[&str]>,
    fallback_keys: &[&str],
) -> Option<String> {
    type_keys
        .unwrap_or(&[])
        .iter()
        .chain(fallback_keys.iter())
        .find_map(|key| {
            field_map
                .get(key)
                .and_then(|field| field.reference.as_ref())
                .and_then(|reference| reference.image_url())
                .map(str::to_string)
        })
}

fn concatenated_field_values(fields: &[MetaobjectField]) -> String {
    fields
        .iter()
        .filter_map(|field| field.value.as_deref())
        .collect::<Vec<_>>()
        .join(" ")
}

fn default_link(object_type: &str, handle: &str, path_segment: Option<&str>) -> String {
    let segment = match path_segment {
        Some(segment) => segment.to_string(),
        None if object_type.ends_with('s') => object_type.to_string(),
        None => format!("{}s", object_type),
    };
    format!("{}/{}/{}", SITE_BASE_URL, segment, handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storefront::{FieldReference, Image};

    fn field(key: &str, value: Option<&str>) -> MetaobjectField {
        MetaobjectField {
            key: key.to_string(),
            value: value.map(str::to_string),
            reference: None,
        }
    }

    fn image_field(key: &str, url: &str) -> MetaobjectField {
        MetaobjectField {
            key: key.to_string(),
            value: None,
            reference: Some(FieldReference::MediaImage {
                image: Some(Image {
                    url: url.to_string(),
                    alt_text: None,
                }),
            }),
        }
    }

    fn metaobject(object_type: &str, handle: &str, fields: Vec<MetaobjectField>) -> Metaobject {
        Metaobject {
            id: format!("gid://shopify/Metaobject/{}", handle),
            handle: handle.to_string(),
            object_type: object_type.to_string(),
            updated_at: Some("2024-03-01T12:00:00Z".to_string()),
            fields,
        }
    }

    #[test]
    fn test_type_hint_beats_generic_fallback_and_handle() {
        let object = metaobject(
            "exhibitor",
            "acme",
            vec![field("title", Some("ignored")), field("store_name", Some("Acme Co"))],
        );
        let item = normalize_metaobject(&object, None);
        assert_eq!(item.title, "Acme Co");
    }

    #[test]
    fn test_title_falls_back_to_handle() {
        let object = metaobject("exhibitor", "acme-handle", vec![field("misc", Some("x"))]);
        let item = normalize_metaobject(&object, None);
        assert_eq!(item.title, "acme-handle");
    }

    #[test]
    fn test_empty_string_counts_as_found() {
        let object = metaobject(
            "exhibitor",
            "acme",
            vec![field("store_name", Some("")), field("title", Some("later"))],
        );
        let item = normalize_metaobject(&object, None);
        assert_eq!(item.title, "");
    }

    #[test]
    fn test_null_value_is_skipped() {
        let object = metaobject(
            "exhibitor",
            "acme",
            vec![field("store_name", None), field("name", Some("Acme"))],
        );
        let item = normalize_metaobject(&object, None);
        assert_eq!(item.title, "Acme");
    }

    #[test]
    fn test_duplicate_key_keeps_last_occurrence() {
        let object = metaobject(
            "exhibitor",
            "acme",
            vec![
                field("store_name", Some("first")),
                field("store_name", Some("second")),
            ],
        );
        let item = normalize_metaobject(&object, None);
        assert_eq!(item.title, "second");
    }

    #[test]
    fn test_image_resolves_from_media_reference() {
        let object = metaobject(
            "exhibitor",
            "acme",
            vec![image_field("store_logo_thumbnail", "https://x/img.png")],
        );
        let item = normalize_metaobject(&object, None);
        assert_eq!(item.image_url.as_deref(), Some("https://x/img.png"));
    }

    #[test]
    fn test_non_image_file_reference_yields_no_image() {
        let object = metaobject(
            "exhibitor",
            "acme",
            vec![MetaobjectField {
                key: "store_logo_thumbnail".to_string(),
                value: None,
                reference: Some(FieldReference::GenericFile {
                    url: Some("https://x/catalog.pdf".to_string()),
                    mime_type: Some("application/pdf".to_string()),
                }),
            }],
        );
        let item = normalize_metaobject(&object, None);
        assert_eq!(item.image_url, None);
    }

    #[test]
    fn test_link_default_with_path_segment_override() {
        let object = metaobject("show", "opera-night", vec![]);
        let item = normalize_metaobject(&object, Some("pages/shows"));
        assert_eq!(item.link, "https://latitudes.online/pages/shows/opera-night");
    }

    #[test]
    fn test_link_default_pluralizes_the_type() {
        let object = metaobject("exhibitor", "acme", vec![]);
        let item = normalize_metaobject(&object, None);
        assert_eq!(item.link, "https://latitudes.online/exhibitors/acme");
    }

    #[test]
    fn test_link_default_keeps_trailing_s() {
        let object = metaobject("news", "update-1", vec![]);
        let item = normalize_metaobject(&object, None);
        assert_eq!(item.link, "https://latitudes.online/news/update-1");
    }

    #[test]
    fn test_description_default_concatenates_field_values() {
        let object = metaobject(
            "booth",
            "b1",
            vec![
                field("hall", Some("A")),
                field("number", Some("42")),
                field("empty", None),
            ],
        );
        let item = normalize_metaobject(&object, None);
        assert_eq!(item.description, "A 42");
    }

    #[test]
    fn test_normalization_is_deterministic() {
        let object = metaobject(
            "exhibitor",
            "acme",
            vec![
                field("store_name", Some("Acme Co")),
                field("store_description", Some("Fine anvils")),
                image_field("store_logo_thumbnail", "https://x/logo.png"),
            ],
        );
        let first = normalize_metaobject(&object, None);
        let second = normalize_metaobject(&object, None);
        assert_eq!(first, second);
        assert_eq!(first.id, "exhibitor-acme");
        assert!(first.updated_at.is_some());
    }
}
