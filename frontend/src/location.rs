/// Read-only snapshot of the page location fields the resolver needs.
///
/// Captured once from `window.location` in the browser; tests and native
/// builds construct it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    /// Scheme with its trailing colon, as the browser reports it ("https:").
    pub protocol: String,
    /// Hostname without the port ("menu.barbare.fr").
    pub hostname: String,
    /// Full origin ("https://menu.barbare.fr").
    pub origin: String,
}

impl PageLocation {
    pub fn new(protocol: &str, hostname: &str, origin: &str) -> PageLocation {
        PageLocation {
            protocol: protocol.to_string(),
            hostname: hostname.to_string(),
            origin: origin.to_string(),
        }
    }

    /// Snapshot of the current browser page, when there is one.
    #[cfg(target_arch = "wasm32")]
    pub fn capture() -> Option<PageLocation> {
        let location = web_sys::window()?.location();
        let protocol = location.protocol().ok()?;
        let hostname = location.hostname().ok()?;
        let origin = location.origin().ok()?;
        Some(PageLocation {
            protocol,
            hostname,
            origin,
        })
    }

    /// The location context this process runs under: the page location in
    /// the browser, `None` everywhere else.
    pub fn current() -> Option<PageLocation> {
        #[cfg(target_arch = "wasm32")]
        {
            PageLocation::capture()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn current_is_empty_off_browser() {
        assert_eq!(PageLocation::current(), None);
    }
}
