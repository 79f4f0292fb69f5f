//! Configuration-to-markup rendering
//!
//! Both entry points build the same element tree; the export adds the
//! copyright line and serializes it, the preview disables navigation on
//! links and images. Rendering is total: any `TemplateConfig` renders, with
//! no validation of colors, URLs or sizes.

mod layout;
pub mod node;
pub mod style;

pub use node::{Element, Node};

use crate::template::TemplateConfig;
use chrono::{Datelike, Utc};
use layout::Mode;
use tracing::debug;

/// Renders email layouts for preview and export
pub struct EmailRenderer;

impl EmailRenderer {
    /// Element tree for on-screen preview
    pub fn render_preview(config: &TemplateConfig) -> Element {
        layout::build(config, Mode::Preview)
    }

    /// Element tree of the exported email for a given copyright year
    pub fn render_export_tree(config: &TemplateConfig, year: i32) -> Element {
        layout::build(config, Mode::Export { year })
    }

    /// Inline-styled HTML fragment to paste into the mailer
    ///
    /// Uses the current UTC year for the copyright line.
    pub fn render_export_markup(config: &TemplateConfig) -> String {
        Self::render_export_markup_for_year(config, Utc::now().year())
    }

    /// Same as [`render_export_markup`](Self::render_export_markup) with a fixed year
    pub fn render_export_markup_for_year(config: &TemplateConfig, year: i32) -> String {
        let html = Self::render_export_tree(config, year).to_html();
        debug!(
            rows = config.fields.len(),
            cta = config.cta.enabled,
            social_links = config.social_links.len(),
            bytes = html.len(),
            "Rendered export markup"
        );
        html
    }
}
