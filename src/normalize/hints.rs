//! Candidate field keys for each semantic slot, per metaobject type.
//!
//! Resolution tries the type-specific keys first, then the generic
//! fallbacks, then a structural default. Supporting a new metaobject type
//! means adding an entry here, not adding branches to the normalizer.

/// Candidate keys for one metaobject type, in resolution order per slot.
pub struct TypeHints {
    pub object_type: &'static str,
    pub title: &'static [&'static str],
    pub description: &'static [&'static str],
    pub link: &'static [&'static str],
    pub image: &'static [&'static str],
}

pub static METAOBJECT_TYPE_HINTS: &[TypeHints] = &[
    TypeHints {
        object_type: "exhibitor",
        title: &["store_name", "name", "title"],
        description: &["store_description", "description", "bio"],
        link: &["store_url", "website", "url"],
        image: &["store_logo_thumbnail", "store_logo", "logo", "image"],
    },
    TypeHints {
        object_type: "show",
        title: &["show_title", "title", "name"],
        description: &["show_description", "description", "summary"],
        link: &["show_url", "url"],
        image: &["show_image", "poster", "image"],
    },
];

/// Fallback keys shared by every type, tried after the type-specific ones.
pub struct SlotDefaults {
    pub title: &'static [&'static str],
    pub description: &'static [&'static str],
    pub link: &'static [&'static str],
    pub image: &'static [&'static str],
}

pub static METAOBJECT_FIELD_DEFAULTS: SlotDefaults = SlotDefaults {
    title: &["title", "name", "label", "heading"],
    description: &["description", "summary", "body", "content", "text"],
    link: &["url", "link", "website"],
    image: &["image", "thumbnail", "logo", "photo", "banner"],
};

pub fn hints_for(object_type: &str) -> Option<&'static TypeHints> {
    METAOBJECT_TYPE_HINTS
        .iter()
        .find(|hints| hints.object_type == object_type)
}
