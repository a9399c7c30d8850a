//! Configuration loader with multi-source merging.

use super::settings::ServiceConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

/// Project-level configuration file name.
const CONFIG_FILE: &str = "namescout.toml";

/// Environment variable prefix; `__` separates nesting levels, e.g.
/// `NAMESCOUT_REGISTRAR__API_KEY`.
const ENV_PREFIX: &str = "NAMESCOUT_";

/// Configuration loader that merges defaults, file, and environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `NAMESCOUT_`-prefixed environment variables
    /// 2. Project root: `./namescout.toml`
    /// 3. Default values
    pub fn load() -> Result<ServiceConfig, Box<figment::Error>> {
        Figment::from(Serialized::defaults(ServiceConfig::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration.
    pub fn load_defaults() -> ServiceConfig {
        ServiceConfig::default()
    }
}
