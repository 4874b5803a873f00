//! Error types for media-extra operations.

use thiserror::Error;

/// Errors that can occur while filtering markup or resolving formatter settings.
#[derive(Error, Debug)]
pub enum Error {
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed attribute: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    #[error("Unknown link text type: {0}")]
    UnknownLinkTextType(String),
}

pub type Result<T> = std::result::Result<T, Error>;
