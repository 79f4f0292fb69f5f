//! Email layout configuration model
//!
//! Value types describing one layout, the explicit merge used to backfill
//! imported data, copy-on-write edit helpers, and the built-in defaults,
//! presets and gallery.

pub mod defaults;
pub mod edit;
pub mod merge;
pub mod types;

pub use defaults::{find_preset, gallery, presets};
pub use edit::MetaField;
pub use merge::merge;
pub use types::{
    CallToAction, Density, Field, GalleryTemplate, Palette, PartialTemplateConfig, Preset,
    SocialLink, SocialPlatform, TemplateConfig,
};
