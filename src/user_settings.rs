use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    pub predict_endpoint: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            predict_endpoint: global_constants::DEFAULT_PREDICT_ENDPOINT.to_string(),
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;

        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save()?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(&settings_path)?;
        let settings: UserSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] Predict endpoint: {}", settings.predict_endpoint);

        Ok(settings)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let settings_path = Self::get_settings_file_path()?;

        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::SETTINGS_DIR_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_predict_server() {
        let settings = UserSettings::default();

        assert_eq!(
            settings.predict_endpoint,
            global_constants::DEFAULT_PREDICT_ENDPOINT
        );
        assert_eq!(settings.predict_endpoint, "http://127.0.0.1:5000/predict");
    }

    #[test]
    fn test_settings_serialization_round_trip() {
        let settings = UserSettings {
            predict_endpoint: "http://10.0.0.7:5000/predict".to_string(),
        };

        let serialized = serde_json::to_string(&settings).unwrap();
        let deserialized: UserSettings = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.predict_endpoint, settings.predict_endpoint);
    }

    #[test]
    fn test_settings_save_and_load_file_round_trip() {
        let temp_dir = std::env::temp_dir().join("intersection-guide-test");
        std::fs::create_dir_all(&temp_dir).unwrap();

        let original_settings = UserSettings {
            predict_endpoint: "http://localhost:9999/predict".to_string(),
        };

        let test_file = temp_dir.join("test_settings.json");
        let contents = serde_json::to_string_pretty(&original_settings).unwrap();
        std::fs::write(&test_file, contents).unwrap();

        let loaded_contents = std::fs::read_to_string(&test_file).unwrap();
        let loaded_settings: UserSettings = serde_json::from_str(&loaded_contents).unwrap();

        assert_eq!(
            loaded_settings.predict_endpoint,
            original_settings.predict_endpoint
        );

        std::fs::remove_dir_all(&temp_dir).ok();
    }
}
