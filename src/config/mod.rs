use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_reports_dir")]
    pub reports_dir: String,
    /// Logo printed at the top of reports; skipped when missing.
    #[serde(default)]
    pub header_image: Option<String>,
    #[serde(default = "default_ai_model")]
    pub ai_model: String,
    #[serde(default)]
    pub ai_api_key: Option<String>,
    #[serde(default = "default_ai_timeout")]
    pub ai_timeout_seconds: u64,
}

fn default_reports_dir() -> String {
    Config::config_dir().join("reports").to_string_lossy().to_string()
}
fn default_ai_model() -> String {
    "gemini-2.0-flash".to_string()
}
fn default_ai_timeout() -> u64 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            reports_dir: default_reports_dir(),
            header_image: None,
            ai_model: default_ai_model(),
            ai_api_key: None,
            ai_timeout_seconds: default_ai_timeout(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rshipaudit")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rshipaudit")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rshipaudit.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rshipaudit.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// API key for the narrative service: the environment wins over the file.
    pub fn api_key(&self) -> AppResult<String> {
        if let Ok(key) = env::var(API_KEY_ENV)
            && !key.trim().is_empty()
        {
            return Ok(key);
        }

        self.ai_api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(AppError::MissingApiKey)
    }

    pub fn reports_path(&self) -> PathBuf {
        expand_tilde(&self.reports_dir)
    }

    pub fn header_image_path(&self) -> Option<PathBuf> {
        self.header_image.as_deref().map(expand_tilde)
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let mut config = if is_test {
            Self::default()
        } else {
            Self::load()?
        };

        // DB name: user provided or default
        if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            config.database = if p.is_absolute() {
                p.to_string_lossy().to_string()
            } else {
                dir.join(p).to_string_lossy().to_string()
            };
        }

        if !is_test {
            config.save()?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = std::path::Path::new(&config.database).parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
