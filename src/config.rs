use std::env;

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or(default.to_string())
}

/// Listen address, overridable via APP_HOST / APP_PORT.
pub fn bind_address() -> (String, u16) {
    let host = env_or("APP_HOST", "0.0.0.0");
    let port = env_or("APP_PORT", "3333").parse().unwrap_or(3333);

    (host, port)
}
