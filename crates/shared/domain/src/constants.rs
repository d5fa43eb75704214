//! Site-wide string constants shared by the feature crates.

pub const SITE_NAME: &str = "Various Apps";
pub const SITE_URL: &str = "https://various-apps.com";
pub const CONTACT_EMAIL: &str = "hello@various-apps.com";
pub const PRIVACY_EMAIL: &str = "admin@various-apps.com";

/// Cookie that persists the visitor's locale choice across requests.
pub const LOCALE_COOKIE: &str = "NEXT_LOCALE";

/// Slug of the featured application on the home page.
pub const FEATURED_APP: &str = "qr-sessions";

/// Slug of the only application that publishes a privacy policy page.
pub const PRIVACY_APP: &str = "ai-poster";

pub const SYSTEM_TAG: &str = "System";
pub const CONTENT_TAG: &str = "Content";

pub const IOS: &str = "ios";
pub const ANDROID: &str = "android";
pub const WEB: &str = "web";
