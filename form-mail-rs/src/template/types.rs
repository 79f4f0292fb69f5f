//! Template types and data structures

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One row of the data table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Editor identity, never rendered
    pub id: String,
    /// Left cell text
    pub label: String,
    /// Right cell text, passed through to the mailer untouched
    pub shortcode: String,
}

impl Field {
    pub fn new(id: &str, label: &str, shortcode: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            shortcode: shortcode.to_string(),
        }
    }
}

/// Social network a link points to
///
/// Unrecognized names are kept as `Other` so imported data round-trips; they
/// render with the website glyph.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SocialPlatform {
    #[default]
    Website,
    Facebook,
    Twitter,
    Instagram,
    Linkedin,
    Youtube,
    Other(String),
}

impl SocialPlatform {
    pub fn as_str(&self) -> &str {
        match self {
            SocialPlatform::Website => "website",
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Linkedin => "linkedin",
            SocialPlatform::Youtube => "youtube",
            SocialPlatform::Other(name) => name,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "website" => SocialPlatform::Website,
            "facebook" => SocialPlatform::Facebook,
            "twitter" => SocialPlatform::Twitter,
            "instagram" => SocialPlatform::Instagram,
            "linkedin" => SocialPlatform::Linkedin,
            "youtube" => SocialPlatform::Youtube,
            other => SocialPlatform::Other(other.to_string()),
        }
    }

    /// Human readable name, used for link titles
    pub fn display_name(&self) -> &str {
        match self {
            SocialPlatform::Website => "Website",
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::Linkedin => "LinkedIn",
            SocialPlatform::Youtube => "YouTube",
            SocialPlatform::Other(_) => "Website",
        }
    }
}

impl Serialize for SocialPlatform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SocialPlatform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(SocialPlatform::from_name(&name))
    }
}

/// Link rendered as an icon in the social row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: String,
    pub platform: SocialPlatform,
    pub url: String,
}

/// Optional button below the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToAction {
    pub enabled: bool,
    pub text: String,
    pub url: String,
    pub bg_color: String,
    pub text_color: String,
}

/// Row padding preset of the data table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Compact,
    #[default]
    Normal,
    Spacious,
}

impl Density {
    /// Parse a density name; anything unrecognized is `Normal`
    pub fn from_name(name: &str) -> Self {
        match name {
            "compact" => Density::Compact,
            "spacious" => Density::Spacious,
            _ => Density::Normal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Density::Compact => "compact",
            Density::Normal => "normal",
            Density::Spacious => "spacious",
        }
    }
}

impl<'de> Deserialize<'de> for Density {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Density::from_name).unwrap_or_default())
    }
}

/// Complete description of one email layout
///
/// Values are never edited in place: every edit produces a new
/// `TemplateConfig` (see the `with_*` helpers in [`crate::template::edit`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    pub logo_url: String,
    /// Pixel count, kept as a string the way the editor supplies it
    pub logo_width: String,
    pub title: String,
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub density: Density,

    pub cta: CallToAction,

    pub body_bg_color: String,
    pub card_bg_color: String,
    pub text_color: String,
    pub header_color: String,
    pub border_color: String,
    /// Background of alternating table rows
    pub accent_color: String,

    pub font_family: String,

    pub footer_text: String,

    pub fields: Vec<Field>,

    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

/// Sparse override of a [`TemplateConfig`]
///
/// Every key is independently present or absent. `cta` is replaced as a
/// whole object when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialTemplateConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<Density>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<CallToAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_bg_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_bg_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<Field>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<Vec<SocialLink>>,
}

/// The six configurable colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub body_bg_color: String,
    pub card_bg_color: String,
    pub text_color: String,
    pub header_color: String,
    pub border_color: String,
    pub accent_color: String,
}

/// Named palette plus font, applied in one step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub name: String,
    pub colors: Palette,
    pub font_family: String,
}

/// Starting point offered by the template gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryTemplate {
    pub name: String,
    pub thumbnail: String,
    pub config: PartialTemplateConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_parsing_falls_back_to_normal() {
        let parse = |json: &str| serde_json::from_str::<Density>(json).unwrap();

        assert_eq!(parse("\"compact\""), Density::Compact);
        assert_eq!(parse("\"spacious\""), Density::Spacious);
        assert_eq!(parse("\"normal\""), Density::Normal);
        assert_eq!(parse("\"bogus-value\""), Density::Normal);
        assert_eq!(parse("null"), Density::Normal);
    }

    #[test]
    fn test_density_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Density::Spacious).unwrap(), "\"spacious\"");
    }

    #[test]
    fn test_unknown_platform_round_trips() {
        let link: SocialLink =
            serde_json::from_str(r#"{"id":"s1","platform":"mastodon","url":"https://m.example"}"#)
                .unwrap();
        assert_eq!(link.platform, SocialPlatform::Other("mastodon".to_string()));

        let json = serde_json::to_string(&link).unwrap();
        assert!(json.contains("\"platform\":\"mastodon\""));
    }

    #[test]
    fn test_cta_uses_camel_case_keys() {
        let cta = CallToAction {
            enabled: true,
            text: "Go".to_string(),
            url: "https://example.com".to_string(),
            bg_color: "#000".to_string(),
            text_color: "#fff".to_string(),
        };
        let json = serde_json::to_value(&cta).unwrap();
        assert_eq!(json["bgColor"], "#000");
        assert_eq!(json["textColor"], "#fff");
    }
}
