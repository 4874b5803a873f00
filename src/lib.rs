//! # media-extra
//!
//! Portable logic of a CMS media-extension module: display formatters for
//! media reference fields and an inline markup filter, decoupled from the
//! host framework's entity storage, render pipeline, and form UI.
//!
//! ## Components
//!
//! - **Rotation filter** ([`rotate_classes`]) — consumes `data-rotate`
//!   directive attributes in rendered fragments and rewrites class lists
//! - **Media link formatter** ([`resolve_link`]) — resolves link text,
//!   target, and styling hook for a referenced media item
//! - **Image formatters** ([`formatter::image`]) — style allow-lists and
//!   render descriptions for static and responsive thumbnails
//! - **Module settings** ([`settings`]) — configuration records the
//!   formatters consume read-only
//!
//! ## Quick Start
//!
//! ```
//! use media_extra::{rotate_classes, resolve_link};
//! use media_extra::{FileRef, LinkDisplayOptions, MediaItem};
//!
//! // Rewrite rotation directives in a rendered fragment.
//! let out = rotate_classes(r#"<img src="cat.jpg" data-rotate="left"/>"#).unwrap();
//! assert!(out.contains("rotate-left"));
//!
//! // Resolve link text for a media reference.
//! let media = MediaItem::file_backed(
//!     "Annual report",
//!     Some(FileRef::new("report.pdf", "/files/report.pdf")),
//! );
//! let render = resolve_link(&media, &LinkDisplayOptions::default()).unwrap();
//! assert_eq!(render.text, "Annual report");
//! ```

pub mod error;
pub mod filter;
pub mod formatter;
pub mod media;
pub mod settings;

pub use error::{Error, Result};
pub use filter::{rotate_classes, rotation_tips};
pub use formatter::image::{
    ImageLinkSetting, ImageRender, ImageStyle, LinkPicker, ResponsiveImageFormatter,
    ResponsiveImageStyle, StaticImageFormatter,
};
pub use formatter::link::{
    FilePresentation, IconPosition, LinkDisplayOptions, LinkRender, LinkTextType, resolve_link,
    resolve_links,
};
pub use media::{FileRef, MediaItem, MediaSource, RemoteEmbed};
pub use settings::{MediaTypeSettings, ModuleSettings};
