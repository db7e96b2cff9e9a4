//! Feed URL policy
//!
//! Decides which feed URLs the server is willing to fetch. A URL passes
//! only if its scheme is allowed, its host matches the domain allow list,
//! and every address the host resolves to is public.

use std::net::IpAddr;

use tokio::net::lookup_host;
use url::Url;

use crate::config::Config;

#[derive(Debug, Clone)]
pub struct FeedUrlPolicy {
    allowed_schemes: Vec<String>,
    enforce_https: bool,
    allowed_suffixes: Vec<String>,
}

impl FeedUrlPolicy {
    pub fn new(
        allowed_schemes: Vec<String>,
        enforce_https: bool,
        allowed_suffixes: Vec<String>,
    ) -> Self {
        Self {
            allowed_schemes,
            enforce_https,
            allowed_suffixes,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.allowed_feed_schemes.clone(),
            config.enforce_https_feeds,
            config.allowed_feed_domain_suffixes.clone(),
        )
    }

    /// Whether this URL may be fetched. Resolution failure rejects.
    pub async fn permits(&self, url: &Url) -> bool {
        let scheme = url.scheme();
        if !self.allowed_schemes.iter().any(|s| s == scheme) {
            return false;
        }
        if self.enforce_https && scheme != "https" {
            return false;
        }
        let Some(host) = url.host_str() else {
            return false;
        };
        if !self
            .allowed_suffixes
            .iter()
            .any(|suffix| host.ends_with(suffix.as_str()))
        {
            return false;
        }

        let port = url.port_or_known_default().unwrap_or(443);
        let addrs = match lookup_host((host, port)).await {
            Ok(addrs) => addrs,
            Err(_) => return false,
        };

        let mut resolved_any = false;
        for addr in addrs {
            resolved_any = true;
            if is_internal(addr.ip()) {
                return false;
            }
        }
        resolved_any
    }
}

/// Addresses a feed host must never resolve to.
fn is_internal(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => {
            v4.is_loopback() || v4.is_private() || v4.is_link_local() || v4.is_unspecified()
        }
        IpAddr::V6(v6) => {
            // fc00::/7 unique local, fe80::/10 link local
            let seg0 = v6.segments()[0];
            v6.is_loopback()
                || v6.is_unspecified()
                || (seg0 & 0xfe00) == 0xfc00
                || (seg0 & 0xffc0) == 0xfe80
        }
    }
}
