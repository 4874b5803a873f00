//! Field formatters: turn media references plus display configuration into
//! render descriptions for the host's theming layer.

pub mod image;
pub mod link;

pub use image::{
    ImageLinkSetting, ImageRender, ImageStyle, LinkPicker, RenderStyle,
    ResponsiveImageFormatter, ResponsiveImageOptions, ResponsiveImageStyle,
    StaticImageFormatter, StaticImageOptions, responsive_style_options, static_style_options,
};
pub use link::{
    FilePresentation, IconPosition, LinkDisplayOptions, LinkRender, LinkTextType, resolve_link,
    resolve_links,
};
