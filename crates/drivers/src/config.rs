use std::path::PathBuf;

pub const BASE_URL_VAR: &str = "EFFECT_STUDIO_BASE_URL";
pub const TIMEOUT_VAR: &str = "EFFECT_STUDIO_TIMEOUT_SECS";
pub const OUTPUT_DIR_VAR: &str = "EFFECT_STUDIO_OUTPUT_DIR";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub output_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/".to_string(),
            timeout_secs: 15,
            output_dir: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(base_url) = lookup(BASE_URL_VAR).filter(|value| !value.trim().is_empty()) {
            config.base_url = base_url;
        }
        if let Some(raw) = lookup(TIMEOUT_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout_secs = secs,
                _ => log::warn!("ignoring {TIMEOUT_VAR}={raw:?}, expected a positive integer"),
            }
        }
        if let Some(dir) = lookup(OUTPUT_DIR_VAR).filter(|value| !value.trim().is_empty()) {
            config.output_dir = PathBuf::from(dir);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn default_config_targets_local_backend() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080/");
        assert_eq!(config.timeout_secs, 15);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn environment_overrides_defaults() {
        let vars = HashMap::from([
            (BASE_URL_VAR, "http://images.local/api/"),
            (TIMEOUT_VAR, "30"),
            (OUTPUT_DIR_VAR, "renders"),
        ]);
        let config = AppConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(config.base_url, "http://images.local/api/");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.output_dir, PathBuf::from("renders"));
    }

    #[test]
    fn invalid_timeout_is_ignored() {
        let lookup = |value: &'static str| {
            move |name: &str| (name == TIMEOUT_VAR).then(|| value.to_string())
        };
        let config = AppConfig::from_lookup(lookup("soon"));
        assert_eq!(config.timeout_secs, 15);
        let config = AppConfig::from_lookup(lookup("0"));
        assert_eq!(config.timeout_secs, 15);
    }
}
