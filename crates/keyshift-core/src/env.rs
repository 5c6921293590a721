use serde::{Deserialize, Serialize};

/// Environment variables the rewritten code reads at runtime.
///
/// This is a handoff to the surrounding application; keyshift never reads
/// these variables itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvContract {
    #[serde(default = "default_client_id")]
    pub client_id: String,

    #[serde(default = "default_client_secret")]
    pub client_secret: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Sample value printed next to `base_url` in the closing reminder
    #[serde(default = "default_base_url_example")]
    pub base_url_example: String,
}

impl Default for EnvContract {
    fn default() -> Self {
        Self {
            client_id: default_client_id(),
            client_secret: default_client_secret(),
            base_url: default_base_url(),
            base_url_example: default_base_url_example(),
        }
    }
}

fn default_client_id() -> String {
    "AUTH_SPOTIFY_ID".to_string()
}

fn default_client_secret() -> String {
    "AUTH_SPOTIFY_SECRET".to_string()
}

fn default_base_url() -> String {
    "PUBLIC_BASE_URL".to_string()
}

fn default_base_url_example() -> String {
    "https://test.harmonique.io".to_string()
}

impl EnvContract {
    /// `.env` lines the user must provide, in display order
    pub fn dotenv_lines(&self) -> Vec<String> {
        vec![
            format!("{}=your_client_id", self.client_id),
            format!("{}=your_client_secret", self.client_secret),
            format!("{}={}", self.base_url, self.base_url_example),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names() {
        let env = EnvContract::default();
        assert_eq!(env.client_id, "AUTH_SPOTIFY_ID");
        assert_eq!(env.client_secret, "AUTH_SPOTIFY_SECRET");
        assert_eq!(env.base_url, "PUBLIC_BASE_URL");
    }

    #[test]
    fn test_dotenv_lines() {
        let lines = EnvContract::default().dotenv_lines();
        assert_eq!(
            lines,
            vec![
                "AUTH_SPOTIFY_ID=your_client_id",
                "AUTH_SPOTIFY_SECRET=your_client_secret",
                "PUBLIC_BASE_URL=https://test.harmonique.io",
            ]
        );
    }

    #[test]
    fn test_partial_override() {
        let env: EnvContract = toml::from_str("client_id = \"SPOTIFY_CLIENT_ID\"").unwrap();
        assert_eq!(env.client_id, "SPOTIFY_CLIENT_ID");
        assert_eq!(env.client_secret, "AUTH_SPOTIFY_SECRET");
    }
}
