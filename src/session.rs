//! Durable session flag, persisted next to the config file.
//!
//! Absent or unreadable file means logged out; logout deletes it.

use std::path::PathBuf;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::config::Config;

#[derive(Serialize, Deserialize, Default)]
pub struct Session {
    logged_in: bool,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    timestamp: u64,
}

impl Session {
    pub fn load() -> Self {
        let path = match Self::session_path() {
            Ok(p) => p,
            Err(_) => return Self::default(),
        };

        if !path.exists() {
            return Self::default();
        }

        let contents = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };

        serde_json::from_str(&contents).unwrap_or_default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn set_logged_in(username: &str) {
        let session = Session {
            logged_in: true,
            username: Some(username.to_string()),
            timestamp: SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs(),
        };
        session.save();
    }

    pub fn clear() {
        if let Ok(path) = Self::session_path() {
            let _ = std::fs::remove_file(path);
        }
    }

    fn save(&self) {
        let path = match Self::session_path() {
            Ok(p) => p,
            Err(_) => return,
        };

        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        let contents = match serde_json::to_string_pretty(self) {
            Ok(c) => c,
            Err(_) => return,
        };

        let _ = std::fs::write(path, contents);
    }

    fn session_path() -> Result<PathBuf, ()> {
        Config::config_path()
            .map(|p| p.with_file_name("session.json"))
            .map_err(|_| ())
    }
}
