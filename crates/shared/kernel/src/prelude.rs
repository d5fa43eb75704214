pub use crate::config::{ConfigError, load_config, load_config_or_default};
#[cfg(feature = "server")]
pub use crate::server::state::{SiteState, SiteStateBuilder, SiteStateError};
pub use vapps_domain::config::SiteConfig;
pub use vapps_domain::locale::Locale;
