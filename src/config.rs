//! Server configuration.

use clap::Parser;

/// Default port for the pagination service.
pub const DEFAULT_PORT: u16 = 8029;

/// Radius applied when a request does not name one.
pub const DEFAULT_RADIUS: i64 = 2;

/// Largest radius a request may ask for.
pub const DEFAULT_MAX_RADIUS: i64 = 50;

/// Command-line arguments for the server.
#[derive(Parser, Debug, Clone)]
#[command(name = "cert-paging")]
#[command(about = "Pagination window service for the certification catalog")]
#[command(version)]
pub struct Args {
    /// Host address to bind to.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, short = 'p', default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Pages shown on each side of the current page when a request omits `radius`.
    #[arg(long, default_value_t = DEFAULT_RADIUS)]
    pub default_radius: i64,

    /// Upper bound on the radius a request may ask for.
    #[arg(long, default_value_t = DEFAULT_MAX_RADIUS)]
    pub max_radius: i64,

    /// Enable debug logging.
    #[arg(long, short = 'd')]
    pub debug: bool,

    /// Enable silent mode (minimal logging).
    #[arg(long, short = 's')]
    pub silent: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            default_radius: DEFAULT_RADIUS,
            max_radius: DEFAULT_MAX_RADIUS,
            debug: false,
            silent: false,
        }
    }
}

/// Server configuration derived from command-line arguments.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Radius used when a request omits one.
    pub default_radius: i64,
    /// Largest radius a request may ask for.
    pub max_radius: i64,
    /// Enable debug logging.
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            default_radius: DEFAULT_RADIUS,
            max_radius: DEFAULT_MAX_RADIUS,
            debug: false,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        // Negative bounds make no sense for either knob.
        let max_radius = args.max_radius.max(0);
        Self {
            host: args.host,
            port: args.port,
            default_radius: args.default_radius.clamp(0, max_radius),
            max_radius,
            debug: args.debug,
        }
    }
}

impl Config {
    /// Returns the bind address for the service.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Largest fixed window size a request may ask for.
    pub fn max_window_size(&self) -> i64 {
        self.max_radius.saturating_mul(2).saturating_add(1)
    }
}
