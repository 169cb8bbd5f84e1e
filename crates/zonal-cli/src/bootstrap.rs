use anyhow::Context;
use figment::{Figment, providers::Serialized};
use zonal_config::ZonalConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, layer command-line overrides on top of every config source,
/// and validate the result.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<ZonalConfig> {
    load_dotenv()?;
    ZonalConfig::from_figment(&with_flag_overrides(ZonalConfig::figment(), flags))
        .context("failed to load zonal configuration")
}

fn load_dotenv() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded .env");
            Ok(())
        }
        Err(error) if error.not_found() => Ok(()),
        Err(error) => Err(error).context("failed to load .env file"),
    }
}

/// Flags beat every other source, including `ZONAL_API_BASE`.
fn with_flag_overrides(figment: Figment, flags: &GlobalFlags) -> Figment {
    let mut figment = figment;
    if let Some(base) = &flags.api_base {
        figment = figment.merge(Serialized::default("api.base_url", base));
    }
    if flags.demo {
        figment = figment.merge(Serialized::default("demo.enabled", true));
    }
    figment
}
