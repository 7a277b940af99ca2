use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_STATIC_DIR: &str = "./dist";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Reads `PORT` and `STATIC_DIR`, after loading any `.env` file.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::var("PORT").ok(), std::env::var("STATIC_DIR").ok())
    }

    fn from_vars(port: Option<String>, static_dir: Option<String>) -> Result<Self> {
        let port = match port {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got {:?}", raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            static_dir: PathBuf::from(static_dir.unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())),
        })
    }

    pub fn addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_vars(None, None).unwrap();
        assert_eq!(config.port, 3001);
        assert_eq!(config.static_dir, PathBuf::from("./dist"));
        assert_eq!(config.addr(), "0.0.0.0:3001");
    }

    #[test]
    fn test_overrides() {
        let config =
            ServerConfig::from_vars(Some(" 8080 ".to_string()), Some("/srv/site".to_string()))
                .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.static_dir, PathBuf::from("/srv/site"));
    }

    #[test]
    fn test_bad_port() {
        let err = ServerConfig::from_vars(Some("http".to_string()), None).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
