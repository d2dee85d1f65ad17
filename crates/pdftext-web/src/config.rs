/// Runtime configuration resolved from environment variables.
///
/// Resolution order: env var > default. `dotenvy` is loaded in `main` before
/// this runs, so a local `.env` file works too.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port (`PORT`, default 5000).
    pub port: u16,
    /// Upload size cap in bytes (`MAX_UPLOAD_BYTES`, default 50 MiB).
    pub max_upload_bytes: usize,
    /// Development-only verbosity flag (`DEBUG`, default off). Only widens
    /// the default log filter; never changes response bodies.
    pub debug: bool,
}

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let max_upload_bytes = std::env::var("MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);
        let debug = std::env::var("DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            port,
            max_upload_bytes,
            debug,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            debug: false,
        }
    }
}
