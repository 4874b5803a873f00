//! Static and responsive image formatters.
//!
//! These formatters render a media item's host-derived thumbnail through an
//! image style. The interesting logic lives in the settings surface: which
//! styles are selectable is gated by the site-wide allow-lists, responsive
//! styles additionally require style mappings, and the responsive formatter
//! can override the thumbnail link with a URL picked through an optional
//! link-picker collaborator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::media::{FileRef, MediaItem};

/// An image style known to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageStyle {
    pub id: String,
    pub label: String,
}

/// A responsive image style known to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsiveImageStyle {
    pub id: String,
    pub label: String,
    /// Styles without image-style mappings render nothing useful and are
    /// never offered for selection.
    pub has_mappings: bool,
}

/// Optional link-picker collaborator.
///
/// Presence of this value is the capability check: when the host has no
/// link picker installed, formatters receive `None` and the link setting
/// is inert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPicker {
    /// Picker profile configured in the module settings.
    pub profile: String,
}

/// What the rendered image links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageLinkSetting {
    /// No link around the image.
    #[default]
    Nothing,
    /// Link to the content entity the field belongs to.
    Content,
    /// Link to the media entity's own page.
    Media,
}

/// Settings for the static image formatter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticImageOptions {
    /// Selected image style id, `None` for the original image.
    pub image_style: Option<String>,
    /// Link target for the rendered image.
    pub image_link: ImageLinkSetting,
}

/// Settings for the responsive image formatter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsiveImageOptions {
    /// Selected responsive image style id.
    pub responsive_image_style: Option<String>,
    /// Link target picked through the link picker; inert without one.
    pub link: Option<String>,
}

/// How the thumbnail should be styled by the theming layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderStyle {
    /// Plain image style.
    Static(String),
    /// Responsive image style (picks sources per breakpoint).
    Responsive(String),
}

/// Render description for one formatted image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRender {
    pub style: Option<RenderStyle>,
    pub thumbnail: FileRef,
    /// Alt text, taken from the media name.
    pub alt: String,
    /// Navigation target wrapped around the image, when configured.
    pub url: Option<String>,
}

/// Filter the selectable image styles down to the allow-listed ones.
///
/// `allowed` has checkbox-map semantics: only entries that are present and
/// enabled count; everything else is filtered out.
pub fn static_style_options(
    available: &[ImageStyle],
    allowed: &BTreeMap<String, bool>,
) -> Vec<ImageStyle> {
    available
        .iter()
        .filter(|style| allowed.get(&style.id).copied().unwrap_or(false))
        .cloned()
        .collect()
}

/// Filter the selectable responsive image styles.
///
/// Same allow-list semantics as [`static_style_options`], plus styles
/// without mappings are dropped outright.
pub fn responsive_style_options(
    available: &[ResponsiveImageStyle],
    allowed: &BTreeMap<String, bool>,
) -> Vec<ResponsiveImageStyle> {
    available
        .iter()
        .filter(|style| style.has_mappings)
        .filter(|style| allowed.get(&style.id).copied().unwrap_or(false))
        .cloned()
        .collect()
}

/// Renders media thumbnails through a plain image style.
#[derive(Debug, Clone, Default)]
pub struct StaticImageFormatter {
    pub options: StaticImageOptions,
}

impl StaticImageFormatter {
    pub fn new(options: StaticImageOptions) -> Self {
        Self { options }
    }

    /// Build render descriptions, one per item with a thumbnail, in order.
    ///
    /// `content_url` is the host-generated URL of the entity carrying the
    /// field, consumed when the formatter links images to the content.
    pub fn view(&self, items: &[MediaItem], content_url: Option<&str>) -> Vec<ImageRender> {
        items
            .iter()
            .filter_map(|media| {
                let thumbnail = media.thumbnail.clone()?;
                let url = match self.options.image_link {
                    ImageLinkSetting::Nothing => None,
                    ImageLinkSetting::Content => content_url.map(String::from),
                    ImageLinkSetting::Media => media.page_url.clone(),
                };
                Some(ImageRender {
                    style: self
                        .options
                        .image_style
                        .clone()
                        .map(RenderStyle::Static),
                    thumbnail,
                    alt: media.name.clone(),
                    url,
                })
            })
            .collect()
    }
}

/// Renders media thumbnails through a responsive image style, optionally
/// linked to a picked URL.
#[derive(Debug, Clone, Default)]
pub struct ResponsiveImageFormatter {
    pub options: ResponsiveImageOptions,
}

impl ResponsiveImageFormatter {
    pub fn new(options: ResponsiveImageOptions) -> Self {
        Self { options }
    }

    /// URL to wrap the thumbnail in. Requires both a link picker and a
    /// non-empty link setting.
    pub fn thumbnail_url(&self, picker: Option<&LinkPicker>) -> Option<String> {
        picker?;
        self.options
            .link
            .as_ref()
            .filter(|link| !link.is_empty())
            .cloned()
    }

    /// Build render descriptions, one per item with a thumbnail, in order.
    pub fn view(&self, items: &[MediaItem], picker: Option<&LinkPicker>) -> Vec<ImageRender> {
        let url = self.thumbnail_url(picker);
        items
            .iter()
            .filter_map(|media| {
                let thumbnail = media.thumbnail.clone()?;
                Some(ImageRender {
                    style: self
                        .options
                        .responsive_image_style
                        .clone()
                        .map(RenderStyle::Responsive),
                    thumbnail,
                    alt: media.name.clone(),
                    url: url.clone(),
                })
            })
            .collect()
    }
}
