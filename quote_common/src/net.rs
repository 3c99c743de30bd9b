//! Shared networking constants and helpers used by client and server.

/// Port the HTTP server listens on when neither `--port` nor `PORT` is set.
pub const DEFAULT_PORT: u16 = 3000;
/// Environment variable holding the listening port.
pub const PORT_ENV: &str = "PORT";
/// Default bind host for the server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Path prefix of the quotes collection.
pub const QUOTES_PATH: &str = "/quotes";

/// Helper to format an address with a port like "ip:port".
pub fn addr(ip: &str, port: u16) -> String {
    format!("{}:{}", ip, port)
}

/// Default base URL the client talks to.
pub fn default_server_url() -> String {
    format!("http://{}", addr("127.0.0.1", DEFAULT_PORT))
}
