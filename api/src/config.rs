//! Runtime configuration
//!
//! Loaded from `NT_`-prefixed environment variables, with `.env` support
//! for development. Every value has a default so the server starts with no
//! environment at all.

use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    /// Feed URLs aggregated when a request names none.
    pub default_feeds: Vec<String>,
    /// Per-request timeout for outbound feed fetches.
    pub fetch_timeout_seconds: u64,
    /// In-memory feed cache lifetime.
    pub cache_ttl_seconds: u64,
    /// User-Agent for polite identification on outbound fetches.
    pub user_agent: String,
    /// Upper bound on feeds fetched for a single timeline request.
    pub max_feeds_per_request: usize,
    /// URL schemes a feed may use.
    pub allowed_feed_schemes: Vec<String>,
    /// When set, only https feeds are fetched regardless of the scheme list.
    pub enforce_https_feeds: bool,
    /// Sanitize item HTML before it reaches the wire.
    pub sanitize_html: bool,
    /// Domain allow list; a feed host must end with one of these suffixes.
    pub allowed_feed_domain_suffixes: Vec<String>,
    /// Attach security headers (CSP etc.) to every response.
    pub security_headers_enabled: bool,
    /// Temporary allowance for inline scripts in the CSP.
    pub csp_allow_inline_scripts: bool,
    /// Reserved for bounded fan-out; fetches currently run unbounded per request.
    #[allow(dead_code)]
    pub fetch_concurrency: usize,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            default_feeds: env_list("NT_DEFAULT_FEEDS", &[]),
            fetch_timeout_seconds: env_parse("NT_FETCH_TIMEOUT_SECONDS", 15),
            cache_ttl_seconds: env_parse("NT_CACHE_TTL_SECONDS", 120),
            user_agent: env::var("NT_USER_AGENT")
                .unwrap_or_else(|_| format!("timeline-api/{}", env!("CARGO_PKG_VERSION"))),
            max_feeds_per_request: env_parse("NT_MAX_FEEDS_PER_REQUEST", 10),
            allowed_feed_schemes: env_list("NT_ALLOWED_FEED_SCHEMES", &["https", "http"]),
            enforce_https_feeds: env_flag("NT_ENFORCE_HTTPS_FEEDS", true),
            sanitize_html: env_flag("NT_SANITIZE_HTML", true),
            allowed_feed_domain_suffixes: env_list(
                "NT_ALLOWED_FEED_DOMAIN_SUFFIXES",
                &["nitter.net", "nitter.pufe.org"],
            ),
            security_headers_enabled: env_flag("NT_SECURITY_HEADERS_ENABLED", true),
            csp_allow_inline_scripts: env_flag("NT_CSP_ALLOW_INLINE_SCRIPTS", false),
            fetch_concurrency: env_parse("NT_FETCH_CONCURRENCY", 5),
            server_host: env::var("NT_SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env_parse("NT_SERVER_PORT", 8080),
        }
    }
}

/// Parse a numeric variable, keeping the default on absence or garbage.
fn env_parse<T: FromStr + Copy>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Parse a boolean variable. Accepts true/false, 1/0, yes/no.
fn env_flag(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(v) => match v.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => true,
            "false" | "0" | "no" => false,
            _ => default,
        },
        Err(_) => default,
    }
}

/// Parse a comma-separated list variable into trimmed, non-empty entries.
fn env_list(key: &str, default: &[&str]) -> Vec<String> {
    match env::var(key) {
        Ok(v) => split_list(&v),
        Err(_) => default.iter().map(|s| s.to_string()).collect(),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
