use anyhow::Context;

/// Process settings, taken from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_docs: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 8080, enable_docs: true }
    }
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        let host = std::env::var("HOST").unwrap_or(defaults.host);
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            Err(_) => defaults.port,
        };
        let enable_docs = std::env::var("ENABLE_DOCS")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(defaults.enable_docs);
        Ok(Self { host, port, enable_docs })
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
