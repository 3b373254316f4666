use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::StepgenError;
use crate::host::{Host, InputPrompt};
use crate::models::{Config, Framework, CONFIG_FILE};

/// Write a stepgen.toml into `project_root`, asking the host for the
/// generator settings
pub fn init_project(host: &mut dyn Host, project_root: &Path) -> Result<PathBuf, StepgenError> {
    let config_path = project_root.join(CONFIG_FILE);
    if config_path.exists() {
        return Err(StepgenError::ConfigExists(config_path));
    }

    let mut config = Config::default();
    let generator = &mut config.generator;

    if let Some(package) = host.prompt_input(
        &InputPrompt::new("Package name").with_default(generator.package_name.clone()),
    )? {
        generator.package_name = package;
    }

    if let Some(class) = host.prompt_input(
        &InputPrompt::new("Class name").with_default(generator.class_name.clone()),
    )? {
        generator.class_name = class;
    }

    generator.base_test_class =
        host.prompt_input(&InputPrompt::new("Base test class (leave empty for none)"))?;

    generator.framework = prompt_for_framework(host)?;

    let contents = config.to_toml()?;
    host.write_file(&config_path, &contents)?;
    info!("Created config file: {}", config_path.display());

    host.notify(&next_steps(&config_path), &[])?;

    Ok(config_path)
}

/// Let the user pick a framework; no pick keeps the default
fn prompt_for_framework(host: &mut dyn Host) -> Result<Framework, StepgenError> {
    let frameworks = Framework::all();
    let items: Vec<&str> = frameworks.iter().map(|f| f.display_name()).collect();

    let selection = host.notify("Select target framework", &items)?;
    Ok(selection
        .and_then(|i| frameworks.get(i).copied())
        .unwrap_or_default())
}

fn next_steps(config_path: &Path) -> String {
    format!(
        "stepgen config written to {}\n\nNext steps:\n\
         1. Add extra imports under [generator] imports = [...]\n\
         2. Run 'stepgen generate path/to/file.feature' to print step definitions\n\
         3. Run 'stepgen generate path/to/file.feature -o src/test/java/Steps.java' to write them to a file",
        config_path.display()
    )
}
