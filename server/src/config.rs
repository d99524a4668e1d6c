use serde::Deserialize;

/// `{ "port": u16 }` — the server's entire configuration surface.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}
