use std::path::Path;

use ::config as config_rs;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

pub trait EnvConfig: Sized + DeserializeOwned {
    const PREFIX: &'static str = "APP";
    const SEPARATOR: &'static str = "__";
    /// Conventional variables mapped onto config keys. The first variable set wins and
    /// takes precedence over the prefixed form.
    const OVERRIDES: &'static [(&'static str, &'static [&'static str])] = &[];

    fn load_dotenv() {
        // Load .env from crate root (falls back to current dir if missing)
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        let _ = dotenvy::from_filename(manifest_dir.join(".env")).or_else(|_| dotenvy::dotenv());
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn from_env() -> Result<Self> {
        Self::load_dotenv();
        Self::from_vars(std::env::vars())
    }

    /// Builds the config from an explicit variable set instead of the process environment.
    fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: config_rs::Map<String, String> = vars.into_iter().collect();

        let mut builder = config_rs::Config::builder().add_source(
            config_rs::Environment::with_prefix(Self::PREFIX)
                .prefix_separator("_")
                .separator(Self::SEPARATOR)
                .try_parsing(true)
                .source(Some(vars.clone())),
        );

        for (key, names) in Self::OVERRIDES {
            let value = names.iter().find_map(|name| vars.get(*name).cloned());
            builder = builder
                .set_override_option(*key, value)
                .with_context(|| format!("failed to apply override for {key}"))?;
        }

        let settings = builder
            .build()
            .context("failed to read environment variables for config")?;

        let cfg = settings
            .try_deserialize::<Self>()
            .context("failed to deserialize environment into config")?;

        cfg.validate()?;
        Ok(cfg)
    }
}
