use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_url: String,
    pub connect_timeout_seconds: u64,
}

impl Config {
    pub fn new() -> Self {
        Self {
            server_url: env::var("QUIZ_SERVER_URL")
                .unwrap_or_else(|_| "ws://127.0.0.1:3001".to_string()),
            connect_timeout_seconds: env::var("CONNECT_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("Invalid CONNECT_TIMEOUT_SECONDS"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
