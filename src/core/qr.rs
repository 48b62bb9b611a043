//! # QR Ingestion
//!
//! Classifies a decoded QR payload. Never fails: anything unrecognised is
//! shown back to the user as-is.
//!
//! ```text
//! "https://example.com"  → OpenUrl
//! "restaurant:42"        → ResolveRestaurant("42")
//! "hello"                → Alert("hello")
//! ```

use url::Url;

pub const RESTAURANT_PREFIX: &str = "restaurant:";

/// Schemes the platform opener handles when none are configured.
pub const DEFAULT_URL_SCHEMES: [&str; 4] = ["http", "https", "mailto", "tel"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrAction {
    OpenUrl(Url),
    ResolveRestaurant(String),
    Alert(String),
}

/// Classify `code`.
///
/// A code is a URL only if it parses *and* its scheme is in `schemes`, so
/// `restaurant:42` (which parses, with scheme `restaurant`) falls through to
/// the prefix rule.
pub fn classify(code: &str, schemes: &[String]) -> QrAction {
    if let Ok(url) = Url::parse(code)
        && schemes.iter().any(|s| s.eq_ignore_ascii_case(url.scheme()))
    {
        return QrAction::OpenUrl(url);
    }

    if let Some(id) = code.strip_prefix(RESTAURANT_PREFIX) {
        return QrAction::ResolveRestaurant(id.to_string());
    }

    QrAction::Alert(code.to_string())
}

pub fn default_schemes() -> Vec<String> {
    DEFAULT_URL_SCHEMES.iter().map(|s| s.to_string()).collect()
}
