//! Copy-on-write edits
//!
//! Every helper borrows the current value and returns a new one; the input
//! is never modified.

use crate::template::types::{
    CallToAction, Field, Preset, SocialLink, SocialPlatform, TemplateConfig,
};
use uuid::Uuid;

/// Quick-add rows for submission metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaField {
    SubmissionDate,
    Time,
    PageUrl,
    RemoteIp,
}

impl MetaField {
    pub const ALL: [MetaField; 4] = [
        MetaField::SubmissionDate,
        MetaField::Time,
        MetaField::PageUrl,
        MetaField::RemoteIp,
    ];

    /// Name used by the API and CLI to pick a quick-add row
    pub fn name(&self) -> &'static str {
        match self {
            MetaField::SubmissionDate => "date",
            MetaField::Time => "time",
            MetaField::PageUrl => "page_url",
            MetaField::RemoteIp => "remote_ip",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|meta| meta.name() == name)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MetaField::SubmissionDate => "Date",
            MetaField::Time => "Time",
            MetaField::PageUrl => "Page URL",
            MetaField::RemoteIp => "User IP",
        }
    }

    pub fn shortcode(&self) -> &'static str {
        match self {
            MetaField::SubmissionDate => "[date]",
            MetaField::Time => "[time]",
            MetaField::PageUrl => "[page_url]",
            MetaField::RemoteIp => "[remote_ip]",
        }
    }
}

/// Short random id for new rows
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()[..9].to_string()
}

impl TemplateConfig {
    pub fn with_fields(&self, fields: Vec<Field>) -> Self {
        Self {
            fields,
            ..self.clone()
        }
    }

    pub fn with_field_added(&self, label: &str, shortcode: &str) -> Self {
        let mut fields = self.fields.clone();
        fields.push(Field::new(&new_id(), label, shortcode));
        self.with_fields(fields)
    }

    pub fn with_meta_field(&self, meta: MetaField) -> Self {
        self.with_field_added(meta.label(), meta.shortcode())
    }

    pub fn with_field_removed(&self, id: &str) -> Self {
        self.with_fields(self.fields.iter().filter(|f| f.id != id).cloned().collect())
    }

    /// Replace label and/or shortcode of the field with `id`
    pub fn with_field_updated(
        &self,
        id: &str,
        label: Option<&str>,
        shortcode: Option<&str>,
    ) -> Self {
        let fields = self
            .fields
            .iter()
            .map(|f| {
                if f.id != id {
                    return f.clone();
                }
                Field {
                    id: f.id.clone(),
                    label: label.map(str::to_string).unwrap_or_else(|| f.label.clone()),
                    shortcode: shortcode
                        .map(str::to_string)
                        .unwrap_or_else(|| f.shortcode.clone()),
                }
            })
            .collect();
        self.with_fields(fields)
    }

    /// Move the field `from` to the position currently held by `to`
    ///
    /// Unknown ids leave the order unchanged.
    pub fn with_field_moved(&self, from: &str, to: &str) -> Self {
        let old_index = self.fields.iter().position(|f| f.id == from);
        let new_index = self.fields.iter().position(|f| f.id == to);

        match (old_index, new_index) {
            (Some(old_index), Some(new_index)) if old_index != new_index => {
                let mut fields = self.fields.clone();
                let field = fields.remove(old_index);
                fields.insert(new_index, field);
                self.with_fields(fields)
            }
            _ => self.clone(),
        }
    }

    pub fn with_social_link_added(&self, platform: SocialPlatform, url: &str) -> Self {
        let mut social_links = self.social_links.clone();
        social_links.push(SocialLink {
            id: new_id(),
            platform,
            url: url.to_string(),
        });
        Self {
            social_links,
            ..self.clone()
        }
    }

    pub fn with_social_link_removed(&self, id: &str) -> Self {
        Self {
            social_links: self
                .social_links
                .iter()
                .filter(|l| l.id != id)
                .cloned()
                .collect(),
            ..self.clone()
        }
    }

    pub fn with_social_link_updated(
        &self,
        id: &str,
        platform: Option<SocialPlatform>,
        url: Option<&str>,
    ) -> Self {
        let social_links = self
            .social_links
            .iter()
            .map(|l| {
                if l.id != id {
                    return l.clone();
                }
                SocialLink {
                    id: l.id.clone(),
                    platform: platform.clone().unwrap_or_else(|| l.platform.clone()),
                    url: url.map(str::to_string).unwrap_or_else(|| l.url.clone()),
                }
            })
            .collect();
        Self {
            social_links,
            ..self.clone()
        }
    }

    /// Change some CTA attributes, keeping the rest of the block
    pub fn with_cta(&self, update: impl FnOnce(&mut CallToAction)) -> Self {
        let mut cta = self.cta.clone();
        update(&mut cta);
        Self {
            cta,
            ..self.clone()
        }
    }

    /// Apply a preset's six colors and font; nothing else changes
    pub fn with_preset(&self, preset: &Preset) -> Self {
        let colors = preset.colors.clone();
        Self {
            body_bg_color: colors.body_bg_color,
            card_bg_color: colors.card_bg_color,
            text_color: colors.text_color,
            header_color: colors.header_color,
            border_color: colors.border_color,
            accent_color: colors.accent_color,
            font_family: preset.font_family.clone(),
            ..self.clone()
        }
    }
}
