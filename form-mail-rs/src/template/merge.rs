//! Explicit override of a full configuration by a sparse one

use crate::error::Result;
use crate::template::types::{PartialTemplateConfig, TemplateConfig};
use serde::de::Error as _;
use serde_json::Value;

/// Override `base` with every key present in `partial`
///
/// Shallow: `cta` replaces the whole call-to-action block when present.
/// Callers wanting to change one CTA attribute merge it into the existing
/// block first (see [`TemplateConfig::with_cta`]).
pub fn merge(base: &TemplateConfig, partial: PartialTemplateConfig) -> TemplateConfig {
    let base = base.clone();
    TemplateConfig {
        logo_url: partial.logo_url.unwrap_or(base.logo_url),
        logo_width: partial.logo_width.unwrap_or(base.logo_width),
        title: partial.title.unwrap_or(base.title),
        description: partial.description.unwrap_or(base.description),
        density: partial.density.unwrap_or(base.density),
        cta: partial.cta.unwrap_or(base.cta),
        body_bg_color: partial.body_bg_color.unwrap_or(base.body_bg_color),
        card_bg_color: partial.card_bg_color.unwrap_or(base.card_bg_color),
        text_color: partial.text_color.unwrap_or(base.text_color),
        header_color: partial.header_color.unwrap_or(base.header_color),
        border_color: partial.border_color.unwrap_or(base.border_color),
        accent_color: partial.accent_color.unwrap_or(base.accent_color),
        font_family: partial.font_family.unwrap_or(base.font_family),
        footer_text: partial.footer_text.unwrap_or(base.footer_text),
        fields: partial.fields.unwrap_or(base.fields),
        social_links: partial.social_links.unwrap_or(base.social_links),
    }
}

impl TemplateConfig {
    pub fn merged(&self, partial: PartialTemplateConfig) -> TemplateConfig {
        merge(self, partial)
    }

    /// Parse an imported document and backfill missing keys from `base`
    ///
    /// Unknown keys are ignored so documents written by older or newer
    /// editors still load.
    pub fn from_json(json: &str, base: &TemplateConfig) -> Result<TemplateConfig> {
        let partial = partial_from_value(serde_json::from_str(json)?)?;
        Ok(merge(base, partial))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Decode a sparse configuration from a parsed document
///
/// Only JSON objects are accepted. Serde would otherwise map an array onto
/// the struct fields by position.
pub(crate) fn partial_from_value(value: Value) -> Result<PartialTemplateConfig> {
    if !value.is_object() {
        return Err(serde_json::Error::custom(format!(
            "expected a JSON object, found {}",
            json_kind(&value)
        ))
        .into());
    }
    Ok(serde_json::from_value(value)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl From<TemplateConfig> for PartialTemplateConfig {
    fn from(config: TemplateConfig) -> Self {
        Self {
            logo_url: Some(config.logo_url),
            logo_width: Some(config.logo_width),
            title: Some(config.title),
            description: Some(config.description),
            density: Some(config.density),
            cta: Some(config.cta),
            body_bg_color: Some(config.body_bg_color),
            card_bg_color: Some(config.card_bg_color),
            text_color: Some(config.text_color),
            header_color: Some(config.header_color),
            border_color: Some(config.border_color),
            accent_color: Some(config.accent_color),
            font_family: Some(config.font_family),
            footer_text: Some(config.footer_text),
            fields: Some(config.fields),
            social_links: Some(config.social_links),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormMailError;
    use crate::template::types::Density;

    #[test]
    fn test_merge_replaces_only_present_keys() {
        let base = TemplateConfig::service_request();
        let merged = merge(
            &base,
            PartialTemplateConfig {
                title: Some("X".to_string()),
                ..Default::default()
            },
        );

        let mut expected = base.clone();
        expected.title = "X".to_string();
        assert_eq!(merged, expected);
        assert_eq!(merged.cta, base.cta);
    }

    #[test]
    fn test_merge_empty_partial_is_identity() {
        let base = TemplateConfig::thank_you();
        assert_eq!(base.merged(PartialTemplateConfig::default()), base);
    }

    #[test]
    fn test_full_partial_replaces_everything() {
        let base = TemplateConfig::service_request();
        let other = TemplateConfig::thank_you();
        assert_eq!(merge(&base, other.clone().into()), other);
    }

    #[test]
    fn test_legacy_document_is_backfilled() {
        // Written before description and socialLinks existed
        let legacy = r##"{
            "title": "Old Title",
            "density": "spacious",
            "fields": [{"id": "a", "label": "Name", "shortcode": "[name]"}],
            "someRemovedKey": true
        }"##;
        let base = TemplateConfig::thank_you();
        let config = TemplateConfig::from_json(legacy, &base).unwrap();

        assert_eq!(config.title, "Old Title");
        assert_eq!(config.density, Density::Spacious);
        assert_eq!(config.fields.len(), 1);
        assert_eq!(config.description, base.description);
        assert_eq!(config.social_links, base.social_links);
    }

    #[test]
    fn test_bogus_density_imports_as_normal() {
        let base = TemplateConfig::service_request();
        let config = TemplateConfig::from_json(r#"{"density":"bogus-value"}"#, &base).unwrap();
        assert_eq!(config.density, Density::Normal);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let base = TemplateConfig::service_request();
        assert!(matches!(
            TemplateConfig::from_json("{not json", &base),
            Err(FormMailError::Json(_))
        ));
        assert!(TemplateConfig::from_json("[1, 2]", &base).is_err());
    }

    #[test]
    fn test_positional_array_is_rejected() {
        let base = TemplateConfig::service_request();
        let mut values = vec![Value::Null; 16];
        values[0] = Value::String("https://evil/logo.png".to_string());
        values[2] = Value::String("T".to_string());
        let array = Value::Array(values).to_string();

        let result = TemplateConfig::from_json(&array, &base);
        assert!(matches!(result, Err(FormMailError::Json(ref e)) if e.to_string().contains("an array")));

        for scalar in ["null", "42", "\"title\"", "true"] {
            assert!(
                matches!(TemplateConfig::from_json(scalar, &base), Err(FormMailError::Json(_))),
                "{} should be rejected",
                scalar
            );
        }
    }

    #[test]
    fn test_export_then_import_preserves_config() {
        let config = TemplateConfig::thank_you();
        let json = config.to_json_pretty().unwrap();
        assert!(json.contains("\"socialLinks\""));
        let restored =
            TemplateConfig::from_json(&json, &TemplateConfig::service_request()).unwrap();
        assert_eq!(restored, config);
    }
}
