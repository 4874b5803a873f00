//! Inline markup filters applied to rendered document fragments.

pub mod rotate;

pub use rotate::{rotate_classes, rotation_tips};
