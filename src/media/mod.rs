//! Media reference model.
//!
//! A [`MediaItem`] is the crate's view of a referenced media entity: the
//! host loads the entity and hands over only what the formatters read.
//! The source kind is a tagged variant rather than a runtime type probe:
//! either a backing file (which may have gone missing) or remote-embed
//! metadata reported by the provider.

/// A referenced media item, read-only to every component in this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    /// The media entity's display name.
    pub name: String,
    /// Where the media content comes from.
    pub source: MediaSource,
    /// Host-derived thumbnail, used by the image formatters.
    /// Items without one are skipped there.
    pub thumbnail: Option<FileRef>,
    /// Host-generated URL of the media entity's own page, used when an
    /// image formatter is configured to link to the media item.
    pub page_url: Option<String>,
}

/// Source kind of a media item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    /// Media backed by a managed file. `None` means the file is missing or
    /// deleted; formatters skip such items rather than failing.
    FileBacked { file: Option<FileRef> },
    /// Media embedded from a remote provider (video platforms and the like).
    RemoteEmbed(RemoteEmbed),
}

/// A managed file attached to a media item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    pub filename: String,
    /// Public URL of the file.
    pub url: String,
    pub size: Option<u64>,
    pub mime_type: Option<String>,
}

/// Provider-reported metadata for a remote embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEmbed {
    /// Canonical URL reported by the provider, when it supplied one.
    pub canonical_url: Option<String>,
    /// Raw value of the media source field (treated as the URL when the
    /// provider reported no canonical one).
    pub source_value: String,
    /// Provider name, used as a CSS styling hook.
    pub provider: Option<String>,
    /// Provider-supplied default display name.
    pub default_name: String,
}

impl MediaItem {
    /// Create a file-backed media item.
    pub fn file_backed(name: impl Into<String>, file: Option<FileRef>) -> Self {
        Self {
            name: name.into(),
            source: MediaSource::FileBacked { file },
            thumbnail: None,
            page_url: None,
        }
    }

    /// Create a remote-embed media item.
    pub fn remote_embed(name: impl Into<String>, embed: RemoteEmbed) -> Self {
        Self {
            name: name.into(),
            source: MediaSource::RemoteEmbed(embed),
            thumbnail: None,
            page_url: None,
        }
    }

    /// Attach a host-derived thumbnail.
    pub fn with_thumbnail(mut self, thumbnail: FileRef) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    /// Attach the host-generated URL of the media entity's own page.
    pub fn with_page_url(mut self, url: impl Into<String>) -> Self {
        self.page_url = Some(url.into());
        self
    }
}

impl FileRef {
    pub fn new(filename: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            url: url.into(),
            size: None,
            mime_type: None,
        }
    }
}
