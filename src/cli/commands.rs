//! Command dispatch and handlers

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::{Baseline, MaterializeOptions, MaterializeReport};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Execute the parsed command line.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Create {
            baseline,
            location,
            folders_only,
        }) => {
            let container = ServiceContainer::new(Settings::load()?);
            cmd_create(&container, baseline, location.as_deref(), *folders_only)
        }
        Some(Commands::Show { baseline, flat }) => {
            let container = ServiceContainer::new(Settings::load()?);
            cmd_show(&container, baseline, *flat)
        }
        Some(Commands::Config { command }) => cmd_config(command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => {
            Cli::command()
                .print_help()
                .map_err(|e| InfraError::io("print help", e))?;
            Ok(())
        }
    }
}

/// Resolve the target location: flag first, then settings.
pub fn resolve_location(flag: Option<&Path>, settings: &Settings) -> CliResult<PathBuf> {
    flag.map(Path::to_path_buf)
        .or_else(|| settings.location.clone())
        .ok_or_else(|| {
            CliError::Usage(
                "no target location: pass --location or set `location` in the config".into(),
            )
        })
}

/// Outcome of a `create` run, printed by `cmd_create`.
#[derive(Debug)]
pub struct Created {
    pub target: PathBuf,
    pub baseline: Baseline,
    pub report: MaterializeReport,
}

/// Load `baseline` and materialize it below the resolved location.
///
/// Folders-only is on when either the flag or the setting asks for it.
pub fn create(
    container: &ServiceContainer,
    baseline: &Path,
    location: Option<&Path>,
    folders_only: bool,
) -> CliResult<Created> {
    let target = resolve_location(location, &container.settings)?;
    let options = MaterializeOptions {
        create_files: !(folders_only || container.settings.folders_only),
    };
    debug!("target={}, options={:?}", target.display(), options);

    let loaded = container.baseline.load(baseline)?;
    let report = container
        .materializer
        .materialize(&loaded.structure, &target, options)?;
    Ok(Created {
        target,
        baseline: loaded,
        report,
    })
}

#[instrument(skip(container))]
fn cmd_create(
    container: &ServiceContainer,
    baseline: &Path,
    location: Option<&Path>,
    folders_only: bool,
) -> CliResult<()> {
    let created = create(container, baseline, location, folders_only)?;
    output::baseline_warnings(&created.baseline.warnings);
    output::materialize_report(&created.target, &created.report);
    output::success("Structure creation completed successfully.");
    Ok(())
}

#[instrument(skip(container))]
fn cmd_show(container: &ServiceContainer, baseline: &Path, flat: bool) -> CliResult<()> {
    let loaded = container.baseline.load(baseline)?;
    output::baseline_warnings(&loaded.warnings);
    output::structure(&loaded.structure, flat);
    Ok(())
}

fn cmd_config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            print!("{}", settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::info(&path.display()),
                None => output::warning("no config directory available on this platform"),
            }
            Ok(())
        }
        ConfigCommands::Init { force } => {
            let path = global_config_path().ok_or_else(|| {
                CliError::Usage("no config directory available on this platform".into())
            })?;
            if path.exists() && !force {
                return Err(CliError::Usage(format!(
                    "config already exists: {} (use --force to overwrite)",
                    path.display()
                )));
            }
            write_template(&path)?;
            output::action("Created", &path.display());
            Ok(())
        }
    }
}

fn write_template(path: &Path) -> CliResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| InfraError::io(format!("create {}", parent.display()), e))?;
    }
    std::fs::write(path, Settings::template())
        .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
    Ok(())
}
