// Re-export all API modules
pub mod menus;

use crate::config::ApiBase;

/// Absolute backend URL for `path`, joined onto the session-wide base
/// with exactly one slash.
pub fn api_url(path: &str) -> String {
    ApiBase::current().join(path)
}
