//! JSON persistence of an editor session
//!
//! Documents are merged against the variant defaults on load, so files
//! written before a key existed still produce complete configurations. A
//! document holding a single bare configuration (the first persisted format)
//! is loaded as the service-request variant.

use crate::editor::{EditorSession, Variant};
use crate::error::Result;
use crate::template::merge::partial_from_value;
use crate::template::TemplateConfig;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File-backed session storage
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored session
    ///
    /// A missing file yields defaults. An unreadable or corrupt file is
    /// logged and also yields defaults; it is overwritten on the next save.
    pub fn load(&self) -> EditorSession {
        if !self.path.exists() {
            info!("No session file at {}, using defaults", self.path.display());
            return EditorSession::default();
        }

        match self.try_load() {
            Ok(session) => {
                info!("Loaded session from {}", self.path.display());
                session
            }
            Err(e) => {
                warn!(
                    "Failed to load session from {}: {}",
                    self.path.display(),
                    e
                );
                EditorSession::default()
            }
        }
    }

    fn try_load(&self) -> Result<EditorSession> {
        let content = std::fs::read_to_string(&self.path)?;
        parse_session(&content)
    }

    /// Serialize a session into the stored document format
    pub fn encode(session: &EditorSession) -> Result<String> {
        Ok(serde_json::to_string_pretty(session)?)
    }

    /// Write an encoded document, creating parent directories as needed
    pub async fn write(&self, document: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(&self.path, document).await?;
        Ok(())
    }
}

/// Parse a stored session document, backfilling missing keys
pub fn parse_session(content: &str) -> Result<EditorSession> {
    let value: Value = serde_json::from_str(content)?;

    let mut document = match value {
        Value::Object(map)
            if map.contains_key("serviceRequest") || map.contains_key("thankYou") =>
        {
            map
        }
        legacy => {
            let partial = partial_from_value(legacy)?;
            let service_request = TemplateConfig::service_request().merged(partial);
            let mut session = EditorSession::default();
            session.replace(Variant::ServiceRequest, service_request);
            return Ok(session);
        }
    };

    let mut merge_variant = |variant: Variant, key: &str| -> Result<TemplateConfig> {
        let base = variant.default_config();
        match document.remove(key) {
            None | Some(Value::Null) => Ok(base),
            Some(value) => Ok(base.merged(partial_from_value(value)?)),
        }
    };

    let service_request = merge_variant(Variant::ServiceRequest, "serviceRequest")?;
    let thank_you = merge_variant(Variant::ThankYou, "thankYou")?;
    Ok(EditorSession::new(service_request, thank_you))
}
