//! Kernel utilities shared across the site features.
//! Keep this crate lightweight: configuration loading plus the shared server state and
//! system routes used by the HTTP application.
//!
//! ## Config loading
//! ```rust,ignore
//! use vapps_kernel::config::load_config;
//! use vapps_kernel::domain::config::SiteConfig;
//!
//! let cfg: SiteConfig = load_config(Some("server"))?;
//! ```
pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use vapps_domain as domain;
