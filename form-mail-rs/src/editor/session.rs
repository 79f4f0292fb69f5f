//! Editor session holding both email variants

use crate::error::{FormMailError, Result};
use crate::template::{find_preset, gallery, MetaField, TemplateConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// Which of the two side-by-side layouts an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Notification to the site owner; owns the canonical field list
    ServiceRequest,
    /// Acknowledgment to the submitter; receives the canonical field list
    ThankYou,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::ServiceRequest, Variant::ThankYou];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::ServiceRequest => "service-request",
            Variant::ThankYou => "thank-you",
        }
    }

    pub fn default_config(&self) -> TemplateConfig {
        match self {
            Variant::ServiceRequest => TemplateConfig::service_request(),
            Variant::ThankYou => TemplateConfig::thank_you(),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = FormMailError;

    fn from_str(s: &str) -> Result<Self> {
        Variant::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| FormMailError::UnknownVariant(s.to_string()))
    }
}

/// Both variants of one editing session
///
/// Variants never share state. The only coupling is the field-sync rule:
/// whenever the service-request field list changes, the thank-you variant
/// receives the same list. Edits to the thank-you fields stay local.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSession {
    service_request: TemplateConfig,
    thank_you: TemplateConfig,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self {
            service_request: TemplateConfig::service_request(),
            thank_you: TemplateConfig::thank_you(),
        }
    }
}

impl EditorSession {
    /// Session from explicit values; no sync is applied
    pub fn new(service_request: TemplateConfig, thank_you: TemplateConfig) -> Self {
        Self {
            service_request,
            thank_you,
        }
    }

    pub fn get(&self, variant: Variant) -> &TemplateConfig {
        match variant {
            Variant::ServiceRequest => &self.service_request,
            Variant::ThankYou => &self.thank_you,
        }
    }

    /// Replace a variant with the value produced by `edit`
    pub fn update(
        &mut self,
        variant: Variant,
        edit: impl FnOnce(&TemplateConfig) -> TemplateConfig,
    ) -> &TemplateConfig {
        let next = edit(self.get(variant));

        match variant {
            Variant::ServiceRequest => {
                let fields_changed = next.fields != self.service_request.fields;
                self.service_request = next;
                if fields_changed {
                    self.sync_fields();
                }
            }
            Variant::ThankYou => self.thank_you = next,
        }

        self.get(variant)
    }

    pub fn replace(&mut self, variant: Variant, config: TemplateConfig) -> &TemplateConfig {
        self.update(variant, |_| config)
    }

    fn sync_fields(&mut self) {
        debug!(
            count = self.service_request.fields.len(),
            "Syncing fields to thank-you variant"
        );
        self.thank_you = self
            .thank_you
            .with_fields(self.service_request.fields.clone());
    }

    pub fn add_field(&mut self, variant: Variant, label: &str, shortcode: &str) -> &TemplateConfig {
        self.update(variant, |c| c.with_field_added(label, shortcode))
    }

    /// Append a submission-metadata row by its name (`date`, `page_url`, ...)
    pub fn add_meta_field(&mut self, variant: Variant, name: &str) -> Result<&TemplateConfig> {
        let meta = MetaField::from_name(name)
            .ok_or_else(|| FormMailError::UnknownMetaField(name.to_string()))?;
        Ok(self.update(variant, |c| c.with_meta_field(meta)))
    }

    pub fn remove_field(&mut self, variant: Variant, id: &str) -> Result<&TemplateConfig> {
        self.require_field(variant, id)?;
        Ok(self.update(variant, |c| c.with_field_removed(id)))
    }

    /// Move field `from` to the position of field `to`
    pub fn move_field(&mut self, variant: Variant, from: &str, to: &str) -> Result<&TemplateConfig> {
        self.require_field(variant, from)?;
        self.require_field(variant, to)?;
        Ok(self.update(variant, |c| c.with_field_moved(from, to)))
    }

    fn require_field(&self, variant: Variant, id: &str) -> Result<()> {
        if self.get(variant).fields.iter().any(|f| f.id == id) {
            Ok(())
        } else {
            Err(FormMailError::FieldNotFound(id.to_string()))
        }
    }

    pub fn apply_preset(&mut self, variant: Variant, name: &str) -> Result<&TemplateConfig> {
        let preset =
            find_preset(name).ok_or_else(|| FormMailError::UnknownPreset(name.to_string()))?;
        info!("Applying preset {} to {}", preset.name, variant);
        Ok(self.update(variant, |c| c.with_preset(&preset)))
    }

    /// Replace a variant with a gallery entry applied to its default
    pub fn apply_template(&mut self, variant: Variant, index: usize) -> Result<&TemplateConfig> {
        let template = gallery()
            .into_iter()
            .nth(index)
            .ok_or_else(|| FormMailError::UnknownTemplate(index.to_string()))?;
        info!("Applying template '{}' to {}", template.name, variant);
        let config = variant.default_config().merged(template.config);
        Ok(self.replace(variant, config))
    }

    /// Import a (possibly partial) JSON document over the variant default
    pub fn import_json(&mut self, variant: Variant, json: &str) -> Result<&TemplateConfig> {
        let config = TemplateConfig::from_json(json, &variant.default_config())?;
        info!("Imported configuration into {}", variant);
        Ok(self.replace(variant, config))
    }

    pub fn export_json(&self, variant: Variant) -> Result<String> {
        self.get(variant).to_json_pretty()
    }

    pub fn reset(&mut self, variant: Variant) -> &TemplateConfig {
        info!("Resetting {} to defaults", variant);
        self.replace(variant, variant.default_config())
    }

    pub fn reset_all(&mut self) {
        info!("Resetting all variants to defaults");
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parsing() {
        assert_eq!("thank-you".parse::<Variant>().unwrap(), Variant::ThankYou);
        assert!(matches!(
            "welcome".parse::<Variant>(),
            Err(FormMailError::UnknownVariant(_))
        ));
        assert_eq!(Variant::ServiceRequest.to_string(), "service-request");
    }

    #[test]
    fn test_canonical_field_edit_syncs_sibling() {
        let mut session = EditorSession::default();
        let thank_you_title = session.get(Variant::ThankYou).title.clone();

        session.add_field(Variant::ServiceRequest, "Budget", "[field id=\"budget\"]");

        assert_eq!(
            session.get(Variant::ThankYou).fields,
            session.get(Variant::ServiceRequest).fields
        );
        assert_eq!(session.get(Variant::ThankYou).title, thank_you_title);
    }

    #[test]
    fn test_sibling_field_edit_stays_local() {
        let mut session = EditorSession::default();
        session.remove_field(Variant::ThankYou, "1").unwrap();

        assert_eq!(session.get(Variant::ThankYou).fields.len(), 4);
        assert_eq!(session.get(Variant::ServiceRequest).fields.len(), 5);
    }

    #[test]
    fn test_non_field_edit_does_not_sync() {
        let mut session = EditorSession::default();
        session.remove_field(Variant::ThankYou, "1").unwrap();
        session.update(Variant::ServiceRequest, |c| TemplateConfig {
            title: "Changed".to_string(),
            ..c.clone()
        });

        assert_eq!(session.get(Variant::ThankYou).fields.len(), 4);
    }

    #[test]
    fn test_missing_field_is_reported() {
        let mut session = EditorSession::default();
        assert!(matches!(
            session.move_field(Variant::ServiceRequest, "1", "42"),
            Err(FormMailError::FieldNotFound(id)) if id == "42"
        ));
    }

    #[test]
    fn test_apply_template_merges_onto_default() {
        let mut session = EditorSession::default();
        session.update(Variant::ThankYou, |c| TemplateConfig {
            logo_width: "300".to_string(),
            ..c.clone()
        });

        let config = session.apply_template(Variant::ThankYou, 3).unwrap().clone();
        assert_eq!(config.title, "Invoice #1023");
        assert_eq!(config.logo_width, "150");
        assert!(session.apply_template(Variant::ThankYou, 99).is_err());
    }

    #[test]
    fn test_unknown_preset() {
        let mut session = EditorSession::default();
        assert!(matches!(
            session.apply_preset(Variant::ServiceRequest, "Neon"),
            Err(FormMailError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_reset_restores_default() {
        let mut session = EditorSession::default();
        session.apply_preset(Variant::ThankYou, "Minimal").unwrap();
        session.reset(Variant::ThankYou);
        assert_eq!(session.get(Variant::ThankYou), &TemplateConfig::thank_you());
    }

    #[test]
    fn test_variant_names() {
        for variant in Variant::ALL {
            assert_eq!(variant.as_str().parse::<Variant>().unwrap(), variant);
        }
    }

    #[test]
    fn test_meta_field_quick_add_syncs() {
        let mut session = EditorSession::default();
        session.add_meta_field(Variant::ServiceRequest, "page_url").unwrap();

        let last = session.get(Variant::ThankYou).fields.last().unwrap();
        assert_eq!(last.shortcode, "[page_url]");
        assert!(matches!(
            session.add_meta_field(Variant::ServiceRequest, "referrer"),
            Err(FormMailError::UnknownMetaField(name)) if name == "referrer"
        ));
    }

    #[test]
    fn test_export_then_import_round_trip() {
        let mut session = EditorSession::default();
        session.apply_preset(Variant::ThankYou, "Corporate").unwrap();
        session.add_field(Variant::ThankYou, "Order", "[order]");
        let exported = session.export_json(Variant::ThankYou).unwrap();

        let mut restored = EditorSession::default();
        restored.import_json(Variant::ThankYou, &exported).unwrap();
        assert_eq!(restored.get(Variant::ThankYou), session.get(Variant::ThankYou));
    }

    #[test]
    fn test_reset_all_restores_both_variants() {
        let mut session = EditorSession::default();
        session.remove_field(Variant::ThankYou, "2").unwrap();
        session.update(Variant::ServiceRequest, |c| TemplateConfig {
            title: "Changed".to_string(),
            ..c.clone()
        });

        session.reset_all();
        assert_eq!(session, EditorSession::default());
        assert_eq!(session.get(Variant::ThankYou).fields.len(), 5);
    }
}
