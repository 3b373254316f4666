use std::path::Path;
use tracing::info;

use crate::error::StepgenError;
use crate::models::{Config, ConfigOverrides};

/// Load configuration from project directory with CLI overrides.
///
/// Read once per command; the returned value is the snapshot the whole run
/// uses.
pub fn load_config(project_root: &Path, overrides: ConfigOverrides) -> Result<Config, StepgenError> {
    let config = Config::load_from_dir(project_root)?;
    let config = config.with_overrides(overrides);

    info!(
        "Configuration loaded: package={}, class={}, framework={}",
        config.generator.package_name,
        config.generator.class_name,
        config.generator.framework.tag()
    );

    Ok(config)
}
