//! REST API for the email layout editor
//!
//! Exposes both variants, the live preview tree and the export markup.
//! Every mutation is persisted through the session store.

pub mod handlers;
pub mod server;

pub use server::ApiServer;
