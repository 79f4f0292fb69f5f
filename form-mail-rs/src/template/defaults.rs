//! Built-in configurations: variant defaults, color presets and the gallery

use crate::template::types::{
    CallToAction, Density, Field, GalleryTemplate, Palette, PartialTemplateConfig, Preset,
    SocialLink, SocialPlatform, TemplateConfig,
};

const DEFAULT_LOGO_URL: &str = "https://placehold.co/300x60/png?text=Your+Logo";

/// Fields every new session starts with
pub fn initial_fields() -> Vec<Field> {
    vec![
        Field::new("1", "Full Name", r#"[field id="f_name"]"#),
        Field::new("2", "Phone", r#"[field id="phone"]"#),
        Field::new("3", "Email", r#"[field id="email"]"#),
        Field::new("4", "Service Type", r#"[field id="service_type"]"#),
        Field::new("5", "Message", r#"[field id="message"]"#),
    ]
}

impl TemplateConfig {
    /// Notification sent to the site owner when a form is submitted
    pub fn service_request() -> Self {
        Self {
            logo_url: DEFAULT_LOGO_URL.to_string(),
            logo_width: "150".to_string(),
            title: "New Service Request".to_string(),
            description: String::new(),
            density: Density::Normal,
            cta: CallToAction {
                enabled: false,
                text: "View Request".to_string(),
                url: "#".to_string(),
                bg_color: "#111827".to_string(),
                text_color: "#ffffff".to_string(),
            },
            body_bg_color: "#f4f6f8".to_string(),
            card_bg_color: "#ffffff".to_string(),
            text_color: "#374151".to_string(),
            header_color: "#111827".to_string(),
            border_color: "#e5e7eb".to_string(),
            accent_color: "#f9fafb".to_string(),
            font_family: "Arial, Helvetica, sans-serif".to_string(),
            footer_text: "Submitted via your website service form.".to_string(),
            fields: initial_fields(),
            social_links: Vec::new(),
        }
    }

    /// Acknowledgment sent back to the person who submitted the form
    pub fn thank_you() -> Self {
        Self {
            logo_url: DEFAULT_LOGO_URL.to_string(),
            logo_width: "150".to_string(),
            title: "Thank You for Contacting Us!".to_string(),
            description: "We have received your request and will get back to you shortly.\nHere is a copy of what you sent us:".to_string(),
            density: Density::Normal,
            cta: CallToAction {
                enabled: true,
                text: "Visit Website".to_string(),
                url: "https://example.com".to_string(),
                bg_color: "#15803d".to_string(),
                text_color: "#ffffff".to_string(),
            },
            body_bg_color: "#f0fdf4".to_string(),
            card_bg_color: "#ffffff".to_string(),
            text_color: "#374151".to_string(),
            header_color: "#15803d".to_string(),
            border_color: "#e5e7eb".to_string(),
            accent_color: "#f9fafb".to_string(),
            font_family: "Arial, Helvetica, sans-serif".to_string(),
            footer_text: "We usually reply within 24 hours. For urgent matters, please call us.".to_string(),
            fields: initial_fields(),
            social_links: vec![SocialLink {
                id: "1".to_string(),
                platform: SocialPlatform::Website,
                url: "https://example.com".to_string(),
            }],
        }
    }
}

fn preset(name: &str, colors: [&str; 6], font: &str) -> Preset {
    let [body_bg, card_bg, text, header, border, accent] = colors;
    Preset {
        name: name.to_string(),
        colors: Palette {
            body_bg_color: body_bg.to_string(),
            card_bg_color: card_bg.to_string(),
            text_color: text.to_string(),
            header_color: header.to_string(),
            border_color: border.to_string(),
            accent_color: accent.to_string(),
        },
        font_family: font.to_string(),
    }
}

/// Quick color/font presets
pub fn presets() -> Vec<Preset> {
    vec![
        preset(
            "Default",
            ["#f4f6f8", "#ffffff", "#374151", "#111827", "#e5e7eb", "#f9fafb"],
            "Arial, Helvetica, sans-serif",
        ),
        preset(
            "Corporate",
            ["#eff6ff", "#ffffff", "#1e293b", "#1e3a8a", "#cbd5e1", "#f8fafc"],
            "'Open Sans', sans-serif",
        ),
        preset(
            "Dark Mode",
            ["#111827", "#1f2937", "#e5e7eb", "#f3f4f6", "#374151", "#374151"],
            "'Roboto', sans-serif",
        ),
        preset(
            "Minimal",
            ["#ffffff", "#ffffff", "#333333", "#000000", "#e5e5e5", "#ffffff"],
            "Helvetica, sans-serif",
        ),
    ]
}

/// Look up a preset by name, ignoring ASCII case
pub fn find_preset(name: &str) -> Option<Preset> {
    presets()
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
}

fn enabled_cta(text: &str, url: &str, color: &str) -> CallToAction {
    CallToAction {
        enabled: true,
        text: text.to_string(),
        url: url.to_string(),
        bg_color: color.to_string(),
        text_color: "#ffffff".to_string(),
    }
}

fn gallery_template(
    name: &str,
    thumbnail: &str,
    config: PartialTemplateConfig,
) -> GalleryTemplate {
    GalleryTemplate {
        name: name.to_string(),
        thumbnail: thumbnail.to_string(),
        config,
    }
}

/// Template gallery
///
/// Each entry is applied on top of the variant default, so the first entry
/// (an empty override) is a plain reset.
pub fn gallery() -> Vec<GalleryTemplate> {
    vec![
        gallery_template(
            "Service Request (Default)",
            "https://placehold.co/400x300/e2e8f0/64748b?text=Service",
            PartialTemplateConfig::default(),
        ),
        gallery_template(
            "Welcome Email",
            "https://placehold.co/400x300/dbeafe/1e40af?text=Welcome",
            PartialTemplateConfig {
                title: Some("Welcome to Our Community!".to_string()),
                body_bg_color: Some("#f0fdf4".to_string()),
                header_color: Some("#166534".to_string()),
                cta: Some(enabled_cta("Get Started", "https://example.com/start", "#166534")),
                footer_text: Some(
                    "We are glad to have you with us. If you have questions, reply to this email."
                        .to_string(),
                ),
                fields: Some(vec![
                    Field::new("1", "Member Name", r#"[field id="name"]"#),
                    Field::new("2", "Membership ID", r#"[field id="member_id"]"#),
                ]),
                ..Default::default()
            },
        ),
        gallery_template(
            "Monthly Newsletter",
            "https://placehold.co/400x300/f3e8ff/6b21a8?text=News",
            PartialTemplateConfig {
                title: Some("January Updates".to_string()),
                body_bg_color: Some("#faf5ff".to_string()),
                header_color: Some("#6b21a8".to_string()),
                accent_color: Some("#f3e8ff".to_string()),
                cta: Some(enabled_cta("Read More", "https://example.com/news", "#6b21a8")),
                footer_text: Some(
                    "You are receiving this because you subscribed to our newsletter.".to_string(),
                ),
                fields: Some(vec![
                    Field::new("1", "Top Story", "Community Event Summary"),
                    Field::new("2", "New Features", "We added dark mode to the dashboard."),
                ]),
                ..Default::default()
            },
        ),
        gallery_template(
            "Invoice / Receipt",
            "https://placehold.co/400x300/fef2f2/991b1b?text=Invoice",
            PartialTemplateConfig {
                title: Some("Invoice #1023".to_string()),
                body_bg_color: Some("#fef2f2".to_string()),
                header_color: Some("#991b1b".to_string()),
                cta: Some(enabled_cta("Pay Now", "https://example.com/pay", "#991b1b")),
                footer_text: Some(
                    "Thank you for your business. Payment is due within 7 days.".to_string(),
                ),
                fields: Some(vec![
                    Field::new("1", "Service", "Web Design"),
                    Field::new("2", "Amount", "$500.00"),
                    Field::new("3", "Due Date", "Jan 31, 2026"),
                ]),
                ..Default::default()
            },
        ),
        gallery_template(
            "Form Receipt",
            "https://placehold.co/400x300/ecfdf5/047857?text=Received",
            PartialTemplateConfig {
                title: Some("Submission Received".to_string()),
                body_bg_color: Some("#ecfdf5".to_string()),
                header_color: Some("#047857".to_string()),
                cta: Some(enabled_cta("View Status", "https://example.com/status", "#047857")),
                footer_text: Some(
                    "We usually reply within 24 hours. For urgent matters, please call support."
                        .to_string(),
                ),
                fields: Some(vec![
                    Field::new("1", "Name", r#"[field id="name"]"#),
                    Field::new("2", "Email", r#"[field id="email"]"#),
                    Field::new("3", "Inquiry Type", "Support"),
                    Field::new("4", "Message", "I need help with..."),
                ]),
                ..Default::default()
            },
        ),
        gallery_template(
            "Thank You Email",
            "https://placehold.co/400x300/f0fdf4/15803d?text=Thank+You",
            PartialTemplateConfig {
                title: Some("Thank You for Your Order!".to_string()),
                body_bg_color: Some("#f0fdf4".to_string()),
                header_color: Some("#15803d".to_string()),
                cta: Some(enabled_cta("Visit Website", "https://example.com", "#15803d")),
                footer_text: Some(
                    "We appreciate your business. If you have any feedback, please reply to this email."
                        .to_string(),
                ),
                fields: Some(vec![
                    Field::new("1", "Order ID", "#123456"),
                    Field::new("2", "Date", "Feb 19, 2026"),
                    Field::new("3", "Total", "$150.00"),
                ]),
                ..Default::default()
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_request_defaults() {
        let config = TemplateConfig::service_request();
        assert_eq!(config.title, "New Service Request");
        assert_eq!(config.density, Density::Normal);
        assert!(!config.cta.enabled);
        assert!(config.description.is_empty());
        assert!(config.social_links.is_empty());
        assert_eq!(config.fields.len(), 5);
    }

    #[test]
    fn test_variants_share_initial_fields() {
        assert_eq!(
            TemplateConfig::service_request().fields,
            TemplateConfig::thank_you().fields
        );
    }

    #[test]
    fn test_find_preset_ignores_case() {
        let preset = find_preset("dark mode").unwrap();
        assert_eq!(preset.colors.card_bg_color, "#1f2937");
        assert!(find_preset("Neon").is_none());
    }

    #[test]
    fn test_gallery_starts_with_reset_entry() {
        let templates = gallery();
        assert_eq!(templates.len(), 6);
        assert_eq!(templates[0].config, PartialTemplateConfig::default());
        assert!(templates[1..].iter().all(|t| t.config.cta.is_some()));
    }
}
