//! Fixed styling values that do not come from the configuration

use crate::template::{Density, SocialPlatform};

/// Footer text color, independent of the palette
pub const FOOTER_COLOR: &str = "#6b7280";

/// Copyright line color, independent of the palette
pub const COPYRIGHT_COLOR: &str = "#9ca3af";

pub const CONTENT_MAX_WIDTH: &str = "600px";

/// Table cell padding for a density preset
pub fn row_padding(density: Density) -> &'static str {
    match density {
        Density::Compact => "8px 4px",
        Density::Spacious => "20px 12px",
        Density::Normal => "12px 8px",
    }
}

/// Glyph shown inside a social icon link
///
/// Adding a platform means adding one arm here.
pub fn platform_glyph(platform: &SocialPlatform) -> &'static str {
    match platform {
        SocialPlatform::Website => "\u{1F310}",
        SocialPlatform::Facebook => "f",
        SocialPlatform::Twitter => "\u{1D54F}",
        SocialPlatform::Instagram => "\u{1F4F7}",
        SocialPlatform::Linkedin => "in",
        SocialPlatform::Youtube => "\u{25B6}",
        SocialPlatform::Other(_) => platform_glyph(&SocialPlatform::Website),
    }
}
