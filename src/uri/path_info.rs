//! Process-wide base URI used to render links

use crate::error::{HalError, HalResult};
use std::sync::OnceLock;
use tracing::info;

/// Holds the API base URI (scheme, host, port and base path).
///
/// The URI is set at most once per process. A second `set` is a
/// configuration error; reads before the first `set` fail closed.
#[derive(Debug, Default)]
pub struct ScmPathInfoStore {
    base: OnceLock<String>,
}

impl ScmPathInfoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with the base URI already set.
    pub fn with_base(base: &str) -> HalResult<Self> {
        let store = Self::new();
        store.set(base)?;
        Ok(store)
    }

    /// Set the base URI. Fails if it has already been set.
    pub fn set(&self, base: &str) -> HalResult<()> {
        let normalized = normalize(base)?;
        let mut stored = false;
        let current = self.base.get_or_init(|| {
            stored = true;
            normalized.clone()
        });
        if stored {
            info!(base = %current, "api base uri configured");
            Ok(())
        } else {
            Err(HalError::BaseUriAlreadySet {
                current: current.clone(),
                attempted: normalized,
            })
        }
    }

    /// Set the base URI from the first request; later calls keep the
    /// stored value and return it.
    pub fn get_or_init(&self, base: &str) -> HalResult<&str> {
        if let Some(current) = self.base.get() {
            return Ok(current);
        }
        let normalized = normalize(base)?;
        Ok(self.base.get_or_init(|| normalized))
    }

    /// The configured base URI, always ending in `/`.
    pub fn get(&self) -> HalResult<&str> {
        self.base
            .get()
            .map(String::as_str)
            .ok_or(HalError::BaseUriNotConfigured)
    }

    pub fn is_set(&self) -> bool {
        self.base.get().is_some()
    }
}

fn normalize(base: &str) -> HalResult<String> {
    let trimmed = base.trim();
    let absolute_path = trimmed.starts_with('/');
    let absolute_uri = ["http://", "https://"]
        .iter()
        .any(|scheme| trimmed.len() > scheme.len() && trimmed.starts_with(scheme));
    if !absolute_path && !absolute_uri {
        return Err(HalError::InvalidBaseUri(base.to_string()));
    }
    if trimmed.contains(char::is_whitespace) || trimmed.contains(['?', '#']) {
        return Err(HalError::InvalidBaseUri(base.to_string()));
    }
    let mut normalized = trimmed.to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Ok(normalized)
}
