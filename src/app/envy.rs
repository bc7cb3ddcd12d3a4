use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub host: Option<String>,
    pub port: Option<u16>,

    pub export_dir: Option<String>,
    pub clipboard_command: Option<String>,
    pub clipboard_timeout_ms: Option<u64>,
}

fn default_app_env() -> String {
    "development".to_string()
}

impl Envy {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or("127.0.0.1")
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(3000)
    }

    pub fn export_dir(&self) -> &str {
        self.export_dir.as_deref().unwrap_or(".")
    }

    pub fn clipboard_timeout(&self) -> Duration {
        Duration::from_millis(self.clipboard_timeout_ms.unwrap_or(5000))
    }

    pub fn origin(&self) -> String {
        format!("http://{}:{}", self.host(), self.port())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_env_is_empty() {
        let envy: Envy = envy::from_iter(Vec::<(String, String)>::new()).unwrap();

        assert_eq!(envy.app_env, "development");
        assert_eq!(envy.host(), "127.0.0.1");
        assert_eq!(envy.port(), 3000);
        assert_eq!(envy.export_dir(), ".");
        assert!(envy.clipboard_command.is_none());
        assert_eq!(envy.clipboard_timeout(), Duration::from_secs(5));
        assert_eq!(envy.origin(), "http://127.0.0.1:3000");
    }

    #[test]
    fn test_reads_upper_case_keys() {
        let vars = vec![
            ("APP_ENV".to_string(), "production".to_string()),
            ("PORT".to_string(), "8080".to_string()),
            ("EXPORT_DIR".to_string(), "/tmp/prompts".to_string()),
            ("CLIPBOARD_COMMAND".to_string(), "wl-copy".to_string()),
            ("CLIPBOARD_TIMEOUT_MS".to_string(), "250".to_string()),
        ];
        let envy: Envy = envy::from_iter(vars).unwrap();

        assert_eq!(envy.app_env, "production");
        assert_eq!(envy.port(), 8080);
        assert_eq!(envy.export_dir(), "/tmp/prompts");
        assert_eq!(envy.clipboard_command.as_deref(), Some("wl-copy"));
        assert_eq!(envy.clipboard_timeout(), Duration::from_millis(250));
        assert_eq!(envy.origin(), "http://127.0.0.1:8080");
    }
}
