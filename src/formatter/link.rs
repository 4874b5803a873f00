//! Link-text resolution for the generic media link formatter.
//!
//! Given a media reference and the field-display options, decide what link
//! text to show, where the link points, and which CSS hook (if any) to
//! attach. The policy branches on the media source kind; each branch has a
//! strict text priority order, and every defined option resolves to one of
//! them (there is no silently-ignored configuration).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::media::{FileRef, MediaItem, MediaSource};

/// What to use as the link text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkTextType {
    /// The media entity's display name.
    #[default]
    MediaLabel,
    /// The backing file's filename.
    FileName,
    /// The resolved URL itself.
    Url,
    /// A fixed string from `custom_link_text`; an empty string falls
    /// through to the next-priority branch.
    Custom,
}

impl LinkTextType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkTextType::MediaLabel => "media_label",
            LinkTextType::FileName => "file_name",
            LinkTextType::Url => "url",
            LinkTextType::Custom => "custom",
        }
    }
}

impl FromStr for LinkTextType {
    type Err = Error;

    /// Parse the stored string form. A value outside the defined set is a
    /// configuration error, never a silent fallback.
    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "media_label" => Ok(LinkTextType::MediaLabel),
            "file_name" => Ok(LinkTextType::FileName),
            "url" => Ok(LinkTextType::Url),
            "custom" => Ok(LinkTextType::Custom),
            other => Err(Error::UnknownLinkTextType(other.to_string())),
        }
    }
}

/// Where the file-type icon goes relative to the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconPosition {
    #[default]
    Before,
    After,
}

/// Presentation flags passed through to the theming layer unchanged.
/// They never influence text resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilePresentation {
    #[serde(default)]
    pub show_file_type: bool,
    #[serde(default)]
    pub show_icon: bool,
    #[serde(default)]
    pub show_file_size: bool,
    #[serde(default)]
    pub icon_position: IconPosition,
}

/// Per-field-display configuration for the media link formatter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkDisplayOptions {
    #[serde(default)]
    pub link_text_type: LinkTextType,
    /// Used only when `link_text_type` is [`LinkTextType::Custom`].
    #[serde(default)]
    pub custom_link_text: String,
    #[serde(flatten)]
    pub presentation: FilePresentation,
}

impl LinkDisplayOptions {
    /// Human-readable settings summary shown on the display configuration UI.
    pub fn settings_summary(&self) -> Vec<String> {
        let linked = match self.link_text_type {
            LinkTextType::MediaLabel => "Linked with media name".to_string(),
            LinkTextType::FileName => "Linked with file name".to_string(),
            LinkTextType::Url => "Linked with file URL".to_string(),
            LinkTextType::Custom if !self.custom_link_text.is_empty() => {
                format!("Linked with custom text \"{}\"", self.custom_link_text)
            }
            LinkTextType::Custom => "Linked with custom text (empty, uses file name)".to_string(),
        };

        let mut summary = vec![linked];
        if self.presentation.show_icon {
            let position = match self.presentation.icon_position {
                IconPosition::Before => "before",
                IconPosition::After => "after",
            };
            summary.push(format!("File icon shown {position} the link"));
        }
        if self.presentation.show_file_size {
            summary.push("File size shown".to_string());
        }
        if self.presentation.show_file_type {
            summary.push("File type shown".to_string());
        }
        summary
    }

    fn custom_text(&self) -> Option<&str> {
        if self.custom_link_text.is_empty() {
            None
        } else {
            Some(&self.custom_link_text)
        }
    }
}

/// Resolved render description for one media item.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkRender {
    /// Link or caption text.
    pub text: String,
    /// Explicit navigation target. `None` for file-backed items unless the
    /// URL itself was requested; the theming layer links the file directly.
    pub target: Option<String>,
    /// Styling hook (the provider name for remote embeds).
    pub css_class: Option<String>,
    /// Backing file for themed file links, when the item has one.
    pub file: Option<FileRef>,
    pub presentation: FilePresentation,
}

/// Resolve link text and target for one media item.
///
/// Returns `None` for a file-backed item whose file is missing or deleted;
/// the caller skips rendering it. Remote embeds always resolve.
pub fn resolve_link(media: &MediaItem, options: &LinkDisplayOptions) -> Option<LinkRender> {
    match &media.source {
        MediaSource::RemoteEmbed(embed) => {
            let target = embed
                .canonical_url
                .clone()
                .unwrap_or_else(|| embed.source_value.clone());
            let text = match options.link_text_type {
                LinkTextType::Url => target.clone(),
                LinkTextType::Custom => options
                    .custom_text()
                    .unwrap_or(&embed.default_name)
                    .to_string(),
                // Label and filename are not meaningful for remote embeds.
                LinkTextType::MediaLabel | LinkTextType::FileName => embed.default_name.clone(),
            };
            Some(LinkRender {
                text,
                target: Some(target),
                css_class: embed.provider.clone(),
                file: None,
                presentation: options.presentation,
            })
        }
        MediaSource::FileBacked { file } => {
            let file = file.as_ref()?;
            let text = match options.link_text_type {
                LinkTextType::MediaLabel => media.name.clone(),
                LinkTextType::Url => file.url.clone(),
                LinkTextType::Custom if options.custom_text().is_some() => {
                    options.custom_link_text.clone()
                }
                // FileName, and Custom with empty text.
                _ => file.filename.clone(),
            };
            let target = (options.link_text_type == LinkTextType::Url).then(|| file.url.clone());
            Some(LinkRender {
                text,
                target,
                css_class: None,
                file: Some(file.clone()),
                presentation: options.presentation,
            })
        }
    }
}

/// Resolve a whole field's worth of items, one per delta, in order.
///
/// Each item is resolved independently; items that produce no output are
/// omitted from the result rather than rendered as empty slots.
pub fn resolve_links(items: &[MediaItem], options: &LinkDisplayOptions) -> Vec<LinkRender> {
    items
        .iter()
        .filter_map(|media| resolve_link(media, options))
        .collect()
}
