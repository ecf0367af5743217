use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
}

impl HostConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(
            std::env::var("SIGNUP_HOST").ok(),
            std::env::var("SIGNUP_PORT").ok(),
        )
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self> {
        let host = host.unwrap_or_else(|| "127.0.0.1".to_string());
        let port: u16 = port
            .unwrap_or_else(|| "8080".to_string())
            .parse()
            .context("Invalid SIGNUP_PORT")?;

        Ok(HostConfig { host, port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_localhost_8080() {
        let cfg = HostConfig::from_vars(None, None).unwrap();
        assert_eq!(cfg, HostConfig { host: "127.0.0.1".into(), port: 8080 });
    }

    #[test]
    fn reads_overrides() {
        let cfg = HostConfig::from_vars(Some("0.0.0.0".into()), Some("3000".into())).unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 3000);
    }

    #[test]
    fn rejects_bad_port() {
        let err = HostConfig::from_vars(None, Some("eighty".into())).unwrap_err();
        assert!(err.to_string().contains("SIGNUP_PORT"));
    }
}
