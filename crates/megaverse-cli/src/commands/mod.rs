use std::path::Path;

use megaverse_client::MegaverseClient;
use megaverse_core::MegaverseConfig;

pub mod build;
pub mod goal;

const DEFAULT_CONFIG_FILE: &str = "megaverse.toml";

/// Resolve configuration: file, then environment, then command-line flags.
pub fn load_config(
    path: Option<&Path>,
    candidate_id: Option<String>,
    api: Option<String>,
) -> anyhow::Result<MegaverseConfig> {
    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    let config = match path {
        Some(path) => MegaverseConfig::from_file(path)?,
        None if default_path.is_file() => MegaverseConfig::from_file(default_path)?,
        None => MegaverseConfig::default(),
    };
    Ok(apply_flags(config.with_env(), candidate_id, api))
}

fn apply_flags(
    mut config: MegaverseConfig,
    candidate_id: Option<String>,
    api: Option<String>,
) -> MegaverseConfig {
    if let Some(id) = candidate_id {
        config.api.candidate_id = Some(id);
    }
    if let Some(api) = api {
        config.api.base_url = Some(api);
    }
    config
}

pub fn client(config: &MegaverseConfig) -> anyhow::Result<MegaverseClient> {
    Ok(MegaverseClient::new(
        &config.base_url(),
        config.candidate_id()?,
        config.request_timeout()?,
    )?)
}
