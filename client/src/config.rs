use serde::Deserialize;

/// `{ "host": string, "port": u16, "numbers_count": u64, "upper_bound": f64 }`
/// — everything the client needs to issue one generation request.
#[derive(Debug, Deserialize)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    pub numbers_count: u64,
    pub upper_bound: f64,
}
