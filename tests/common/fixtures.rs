use std::fs;
use std::path::PathBuf;

use ccmhub::core::session::{NewCalculation, NewOutlet, SessionDb};
use tempfile::TempDir;

/// Creates a SessionDb backed by a session file inside a fresh temp
/// directory. Returns both; the directory must be kept alive.
pub fn create_test_session() -> (SessionDb, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let session = SessionDb::open(session_path(&dir));
    (session, dir)
}

pub fn session_path(dir: &TempDir) -> PathBuf {
    dir.path().join("ccmhub_state.json")
}

/// Writes raw text to the session file, bypassing the store. Used to
/// simulate legacy, partial, or corrupted persisted records.
pub fn write_raw_session(dir: &TempDir, contents: &str) {
    fs::write(session_path(dir), contents).expect("Failed to write raw session file");
}

pub fn make_new_outlet(name: &str) -> NewOutlet {
    NewOutlet {
        name: name.to_string(),
        address: "Marienplatz 1, Munich".to_string(),
        campaign: "Aperol".to_string(),
    }
}

pub fn make_new_calculation(articles: u32) -> NewCalculation {
    NewCalculation { articles }
}
