use std::env;
use std::str::FromStr;

/// Runtime configuration for the embedding service. Generation constants
/// are deliberately not configurable: stored results must be reproducible
/// bit-for-bit across deployments (see `constants.rs`).
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub enable_file_logs: bool,
    pub log_dir: String,
    pub assembly: AssemblyConfig,
}

#[derive(Debug, Clone, Default)]
pub struct AssemblyConfig {
    /// Stop assembling at the first failed generation instead of skipping.
    pub abort_on_failure: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            log_level: env_or("RUST_LOG", "info"),
            enable_file_logs: env_or_bool("ENABLE_FILE_LOGS", false),
            log_dir: env_or("LOG_DIR", "./logs"),
            assembly: AssemblyConfig {
                abort_on_failure: env_or_bool("ASSEMBLY_ABORT_ON_FAILURE", false),
            },
        }
    }
}

pub fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn env_or_parse<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    match env::var(key) {
        Ok(raw) => match raw.parse::<T>() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(
                    key,
                    value = %raw,
                    "Failed to parse env var, using default"
                );
                default
            }
        },
        Err(_) => default,
    }
}

pub fn env_or_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, OnceLock};

    use super::*;

    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn managed_keys() -> &'static [&'static str] {
        &["RUST_LOG", "ENABLE_FILE_LOGS", "ASSEMBLY_ABORT_ON_FAILURE"]
    }

    fn clear_keys(keys: &[&str]) {
        for key in keys {
            env::remove_var(key);
        }
    }

    #[test]
    fn loads_defaults_when_missing() {
        let _guard = env_lock().lock().expect("env lock");
        clear_keys(managed_keys());

        let cfg = Config::from_env();
        assert_eq!(cfg.log_level, "info");
        assert!(!cfg.enable_file_logs);
        assert!(!cfg.assembly.abort_on_failure);
    }

    #[test]
    fn bool_flags_parse_common_spellings() {
        let _guard = env_lock().lock().expect("env lock");
        clear_keys(managed_keys());

        env::set_var("ASSEMBLY_ABORT_ON_FAILURE", "yes");
        assert!(Config::from_env().assembly.abort_on_failure);

        env::set_var("ASSEMBLY_ABORT_ON_FAILURE", "off");
        assert!(!Config::from_env().assembly.abort_on_failure);

        clear_keys(managed_keys());
    }

    #[test]
    fn invalid_values_fall_back() {
        let _guard = env_lock().lock().expect("env lock");
        assert_eq!(env_or_parse("QUIZGEN_TEST_MISSING_KEY", 42_u64), 42);
    }
}
