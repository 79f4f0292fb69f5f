//! form-mail-rs: Email layout editor for form-submission notifications
//!
//! Composes a parameterized notification layout and renders it to a
//! standalone, inline-styled HTML fragment that can be pasted into a form
//! plugin's "message body" field.
//!
//! # Features
//!
//! - **Rendering**: one element tree drives both the live preview and the
//!   exported markup, so the two never drift apart
//! - **Variants**: service-request and thank-you layouts side by side, with
//!   one-way field sync
//! - **Editing**: copy-on-write edits, presets, template gallery
//! - **Persistence**: JSON session file with backfill of missing keys
//! - **API**: HTTP endpoints for preview and export
//!
//! # Example
//!
//! ```
//! use form_mail_rs::render::EmailRenderer;
//! use form_mail_rs::template::TemplateConfig;
//!
//! let config = TemplateConfig::service_request();
//! let html = EmailRenderer::render_export_markup_for_year(&config, 2026);
//! assert!(html.contains("New Service Request"));
//! ```
//!
//! # Modules
//!
//! - [`template`]: Configuration model, merge, defaults
//! - [`render`]: Preview tree and export markup
//! - [`editor`]: Variant session and field sync
//! - [`store`]: Session persistence
//! - [`api`]: HTTP API
//! - [`config`]: Application configuration
//! - [`error`]: Error types and handling

pub mod api;
pub mod config;
pub mod editor;
pub mod error;
pub mod render;
pub mod store;
pub mod template;

// Re-export commonly used types
pub use config::AppConfig;
pub use editor::{EditorSession, Variant};
pub use error::{FormMailError, Result};
pub use render::EmailRenderer;
pub use template::{merge, PartialTemplateConfig, TemplateConfig};
