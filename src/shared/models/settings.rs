use std::{env, error::Error, fs};

use serde::Deserialize;

const SETTINGS_FILENAME: &str = "settings.json";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tcp_socket_binding: String,
    pub tcp_socket_port: u16,
    pub database_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            tcp_socket_binding: "0.0.0.0".to_string(),
            tcp_socket_port: 3000,
            database_url: "sqlite://tasks.db".to_string(),
        }
    }
}

impl Settings {
    /// Reads `settings.json` next to the binary, falling back to defaults
    /// when the file is missing. `DATABASE_URL` overrides the store location
    /// either way.
    pub fn load() -> Result<Settings, Box<dyn Error>> {
        let mut settings = match fs::read_to_string(SETTINGS_FILENAME) {
            Ok(content) => serde_json::from_str(&content)?,
            Err(_) => Settings::default(),
        };
        if let Ok(url) = env::var("DATABASE_URL") {
            settings.database_url = url;
        }
        Ok(settings)
    }
}
