pub const MAX_USERNAME_LENGTH: usize = 50;
pub const MAX_POST_LENGTH: usize = 5000;

pub const BIND_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

pub fn listen_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}
