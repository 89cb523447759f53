use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::core::session::model::SessionState;

/// File backend for the single persisted record.
///
/// Load can never fail: missing or unreadable files and malformed JSON all
/// fall back to the default state. Save is an atomic full overwrite; when
/// the disk refuses a write the store keeps the serialized record in memory
/// and serves it for the rest of the session, so loss of persistence is
/// never fatal.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    // Serialized record retained after a failed write. Once set, the store
    // stays in-memory for the rest of the session.
    fallback: RefCell<Option<String>>,
}

impl SessionStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            fallback: RefCell::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> SessionState {
        if let Some(retained) = self.fallback.borrow().as_deref() {
            return parse(retained);
        }
        match fs::read_to_string(&self.path) {
            Ok(text) => parse(&text),
            Err(_) => SessionState::default(),
        }
    }

    pub fn save(&self, state: &SessionState) {
        let serialized = match serde_json::to_string_pretty(state) {
            Ok(serialized) => serialized,
            Err(err) => {
                eprintln!("Warning: failed to serialize session state: {err}");
                return;
            }
        };
        if self.fallback.borrow().is_some() {
            // Already degraded; keep the session alive in memory only.
            *self.fallback.borrow_mut() = Some(serialized);
            return;
        }
        if let Err(err) = self.write_atomic(&serialized) {
            eprintln!(
                "Warning: failed to persist session to {:?}, continuing in memory: {err:#}",
                self.path
            );
            *self.fallback.borrow_mut() = Some(serialized);
        }
    }

    pub fn reset_to_default(&self) {
        self.save(&SessionState::default());
    }

    /// Write to a sibling temp file, then rename over the target, so a
    /// consumer never observes a partially written record.
    fn write_atomic(&self, serialized: &str) -> anyhow::Result<()> {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, serialized)
            .with_context(|| format!("Failed to write session file {:?}", tmp))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace session file {:?}", self.path))?;
        Ok(())
    }
}

fn parse(text: &str) -> SessionState {
    match serde_json::from_str(text) {
        Ok(value) => SessionState::reconcile(value),
        Err(_) => SessionState::default(),
    }
}
