#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub max_body_size: usize,
    pub max_batch_size: usize,
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let max_body_kb: usize = std::env::var("MAX_BODY_KB")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(64);

        let max_batch_size = std::env::var("MAX_BATCH_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1000);

        Self {
            port,
            max_body_size: max_body_kb * 1024,
            max_batch_size,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            max_body_size: 64 * 1024,
            max_batch_size: 1000,
        }
    }
}
