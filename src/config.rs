use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the serialized scaler and regression models
    #[serde(default = "default_models_dir")]
    pub models_dir: PathBuf,

    /// Directory holding the material catalog
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_cost_model_file")]
    pub cost_model_file: String,

    #[serde(default = "default_co2_model_file")]
    pub co2_model_file: String,

    #[serde(default = "default_scaler_file")]
    pub scaler_file: String,

    #[serde(default = "default_catalog_file")]
    pub catalog_file: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_models_dir() -> PathBuf {
    PathBuf::from("models")
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_cost_model_file() -> String {
    "cost_model.json".to_string()
}

fn default_co2_model_file() -> String {
    "co2_model.json".to_string()
}

fn default_scaler_file() -> String {
    "scaler.json".to_string()
}

fn default_catalog_file() -> String {
    "materials.json".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn cost_model_path(&self) -> PathBuf {
        self.models_dir.join(&self.cost_model_file)
    }

    pub fn co2_model_path(&self) -> PathBuf {
        self.models_dir.join(&self.co2_model_file)
    }

    pub fn scaler_path(&self) -> PathBuf {
        self.models_dir.join(&self.scaler_file)
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join(&self.catalog_file)
    }

    /// Socket address string the listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_environment() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
        assert_eq!(config.cost_model_path(), PathBuf::from("models/cost_model.json"));
        assert_eq!(config.co2_model_path(), PathBuf::from("models/co2_model.json"));
        assert_eq!(config.scaler_path(), PathBuf::from("models/scaler.json"));
        assert_eq!(config.catalog_path(), PathBuf::from("data/materials.json"));
    }

    #[test]
    fn test_overrides_from_environment() {
        let vars = vec![
            ("PORT".to_string(), "8080".to_string()),
            ("MODELS_DIR".to_string(), "/srv/models".to_string()),
            ("CATALOG_FILE".to_string(), "materials_final.json".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.scaler_path(), PathBuf::from("/srv/models/scaler.json"));
        assert_eq!(config.catalog_path(), PathBuf::from("data/materials_final.json"));
    }
}
