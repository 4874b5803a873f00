//! Site-wide module configuration consumed read-only by the formatters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Module settings (the `media_extra.settings` configuration object).
///
/// The allow-lists use checkbox-map semantics: a style id maps to whether
/// it may be offered in formatter settings forms. Absent ids count as
/// disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleSettings {
    pub allowed_image_styles_for_static_image: BTreeMap<String, bool>,
    pub allowed_image_styles_for_responsive_image: BTreeMap<String, bool>,
    /// Link-picker profile id, when a picker is installed and configured.
    pub linkit_profile: Option<String>,
}

/// Per-media-type settings (one config entity per media type bundle).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaTypeSettings {
    /// Media type bundle name.
    pub id: String,
    /// Whether the name field is optional for this media type.
    pub name_optional: bool,
    /// Custom description for the name field, empty for the stock one.
    pub name_description: String,
}

impl MediaTypeSettings {
    /// Look up the settings for a media type, falling back to defaults for
    /// types that were never configured.
    pub fn load(settings: &BTreeMap<String, MediaTypeSettings>, id: &str) -> MediaTypeSettings {
        settings.get(id).cloned().unwrap_or_else(|| MediaTypeSettings {
            id: id.to_string(),
            ..Default::default()
        })
    }
}
