use std::sync::OnceLock;

use log::{info, warn};
use url::Url;

use crate::location::PageLocation;

/// Hostnames that mean the page is served from the developer's machine.
const LOCAL_HOSTS: [&str; 3] = ["localhost", "127.0.0.1", "0.0.0.0"];

/// Leading subdomain label of the public site and the backend label it
/// maps to.
const PUBLIC_HOST_LABEL: &str = "menu.";
const BACKEND_HOST_LABEL: &str = "menuback.";

/// Port the backend listens on during development.
const DEV_PORT: u16 = 5000;

/// Origin used when neither an override nor a page location is available.
const FALLBACK_ORIGIN: &str = "http://localhost:5000";

static API_BASE: OnceLock<ApiBase> = OnceLock::new();

/// The one backend origin every request URL is built from.
///
/// Resolved once per session via [`ApiBase::current`]; the stored origin
/// never carries a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase {
    origin: String,
}

impl ApiBase {
    /// Resolve the backend origin from an optional configured override
    /// and the page location, if any.
    ///
    /// A non-local override always wins. A local override wins only when
    /// the page itself is served from a local host, so a committed
    /// development setting cannot point a deployed site at localhost.
    /// Without a usable override the origin is inferred from the page,
    /// and off-browser the development fallback applies. Never fails:
    /// a malformed override is logged and ignored.
    pub fn resolve(configured: Option<&str>, location: Option<&PageLocation>) -> ApiBase {
        let configured = configured.map(str::trim).filter(|value| !value.is_empty());
        if let Some(origin) = configured.and_then(|value| configured_origin(value, location)) {
            return ApiBase { origin };
        }

        let origin = match location {
            Some(page) if !is_local_host(&page.hostname) => {
                let origin = backend_origin_for(page);
                info!("using inferred backend origin {}", origin);
                origin
            }
            Some(page) => format!("{}//{}:{}", page.protocol, page.hostname, DEV_PORT),
            None => FALLBACK_ORIGIN.to_string(),
        };
        ApiBase { origin }
    }

    /// The resolved origin, without a trailing slash.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Join a request path onto the origin with exactly one slash,
    /// whether or not the caller supplied a leading one.
    pub fn join(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.origin, path)
        } else {
            format!("{}/{}", self.origin, path)
        }
    }

    /// Resolve from the ambient environment: the `BACKEND_URL` override
    /// and the current page location.
    pub fn from_environment() -> ApiBase {
        let configured = configured_override();
        ApiBase::resolve(configured.as_deref(), PageLocation::current().as_ref())
    }

    /// The session-wide base. Resolved from the environment on first use
    /// and pinned for the rest of the session.
    pub fn current() -> &'static ApiBase {
        API_BASE.get_or_init(ApiBase::from_environment)
    }
}

impl std::fmt::Display for ApiBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.origin)
    }
}

/// Origin of a configured override, or `None` when the override must be
/// ignored (malformed, hostless, or local while the page is not).
fn configured_origin(value: &str, location: Option<&PageLocation>) -> Option<String> {
    // The WHATWG parser percent-encodes inner whitespace instead of
    // rejecting it, which would turn junk like "not a url" into a valid
    // relative path. Treat it as malformed up front.
    if value.contains(char::is_whitespace) {
        warn!(
            "configured backend URL {:?} is not a valid URL, inferring the origin instead",
            value
        );
        return None;
    }

    let parsed = match location {
        // Relative overrides resolve against the page, as they would in
        // an address bar.
        Some(page) => Url::parse(&page.origin).and_then(|base| base.join(value)),
        None => Url::parse(value),
    };
    let url = match parsed {
        Ok(url) => url,
        Err(error) => {
            warn!(
                "configured backend URL {:?} is not a valid URL ({}), inferring the origin instead",
                value, error
            );
            return None;
        }
    };

    let host = match url.host_str() {
        Some(host) => host.to_string(),
        None => {
            warn!(
                "configured backend URL {:?} has no host, inferring the origin instead",
                value
            );
            return None;
        }
    };

    if !is_local_host(&host) {
        return Some(url.origin().ascii_serialization());
    }
    match location {
        // A local override only makes sense while the page itself is local.
        Some(page) if is_local_host(&page.hostname) => Some(url.origin().ascii_serialization()),
        _ => None,
    }
}

/// Backend origin inferred from a non-local page: same scheme and host,
/// with a leading "menu." label rewritten to "menuback.".
fn backend_origin_for(page: &PageLocation) -> String {
    match page.hostname.strip_prefix(PUBLIC_HOST_LABEL) {
        Some(rest) => format!("{}//{}{}", page.protocol, BACKEND_HOST_LABEL, rest),
        None => format!("{}//{}", page.protocol, page.hostname),
    }
}

fn is_local_host(hostname: &str) -> bool {
    LOCAL_HOSTS.contains(&hostname)
}

/// Build-time override on wasm, injected by the bundler environment;
/// process environment everywhere else.
#[cfg(target_arch = "wasm32")]
fn configured_override() -> Option<String> {
    option_env!("BACKEND_URL").map(str::to_string)
}

#[cfg(not(target_arch = "wasm32"))]
fn configured_override() -> Option<String> {
    std::env::var("BACKEND_URL").ok()
}
