//! Command dispatch and handlers

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, HierarchyAssembler};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::tree::{TreeNode, TreeNodeConvert};
use crate::infrastructure::census::CensusClient;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Build {
            csv,
            output,
            indicator,
            state,
            year,
            quarter,
            pretty,
        }) => _build(
            csv,
            output.as_deref(),
            indicator.as_deref(),
            state.as_deref(),
            year.as_deref(),
            quarter.as_deref(),
            *pretty,
        ),
        Some(Commands::Groups { csv }) => _groups(csv),
        Some(Commands::Tree { input }) => _tree(input),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(),
            ConfigCommands::Init { force } => _config_init(*force),
        },
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

#[instrument(skip_all)]
fn _build(
    csv: &Path,
    output: Option<&Path>,
    indicator: Option<&str>,
    state: Option<&str>,
    year: Option<&str>,
    quarter: Option<&str>,
    pretty: bool,
) -> CliResult<()> {
    let mut settings = Settings::load()?;
    if let Some(v) = indicator {
        settings.indicator = v.to_string();
    }
    if let Some(v) = state {
        settings.state = v.to_string();
    }
    if let Some(v) = year {
        settings.year = v.to_string();
    }
    if let Some(v) = quarter {
        settings.quarter = v.to_string();
    }
    debug!(?settings, "effective settings");

    let rows = read_label_rows(csv)?;

    let client = CensusClient::new(settings.endpoint.clone(), settings.api_key.clone())
        .map_err(ApplicationError::Fetch)?;
    let assembler = HierarchyAssembler::new(Arc::new(client), settings.query());
    let tree = assembler.assemble(rows)?;

    let document = if pretty {
        serde_json::to_string_pretty(&tree)
    } else {
        serde_json::to_string(&tree)
    }
    .map_err(|e| CliError::Document {
        path: output.map(Path::to_path_buf).unwrap_or_default(),
        source: e,
    })?;

    match output {
        Some(path) => {
            fs::write(path, &document)
                .map_err(|e| CliError::io(format!("cannot write {}", path.display()), e))?;
            output::success(&format!(
                "wrote {} ({} groups, {} total {})",
                path.display(),
                tree.children.len(),
                tree.total(),
                settings.indicator,
            ));
        }
        None => output::info(&document),
    }
    Ok(())
}

#[instrument(skip_all)]
fn _groups(csv: &Path) -> CliResult<()> {
    let rows = read_label_rows(csv)?;
    let groups = crate::domain::group_codes(rows);

    for group in &groups {
        let lead = group.lead();
        output::header(&format!(
            "{} {} ({} codes)",
            lead.code,
            lead.label,
            group.rows().len()
        ));
        for row in &group.rows()[1..] {
            output::detail(&format!("{} {}", row.code, row.label));
        }
    }
    Ok(())
}

#[instrument(skip_all)]
fn _tree(input: &Path) -> CliResult<()> {
    let text = fs::read_to_string(input)
        .map_err(|e| CliError::io(format!("cannot read {}", input.display()), e))?;
    let tree: TreeNode = serde_json::from_str(&text).map_err(|e| CliError::Document {
        path: input.to_path_buf(),
        source: e,
    })?;

    output::info(&tree.to_tree_string());
    Ok(())
}

fn _config_show() -> CliResult<()> {
    let settings = Settings::load()?;
    let rendered = toml::to_string(&settings)
        .map_err(|e| CliError::Usage(format!("cannot render settings: {e}")))?;
    output::info(&rendered);
    Ok(())
}

fn _config_init(force: bool) -> CliResult<()> {
    let path = config_init_path()?;
    if path.exists() && !force {
        return Err(CliError::Usage(format!(
            "config already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| CliError::io(format!("cannot create {}", parent.display()), e))?;
    }
    let rendered = toml::to_string(&Settings::default())
        .map_err(|e| CliError::Usage(format!("cannot render settings: {e}")))?;
    fs::write(&path, rendered)
        .map_err(|e| CliError::io(format!("cannot write {}", path.display()), e))?;

    output::success(&format!("wrote {}", path.display()));
    Ok(())
}

fn config_init_path() -> CliResult<PathBuf> {
    global_config_path().ok_or_else(|| CliError::Usage("no home directory found".to_string()))
}

/// Read `[code, label]` rows from a headerless label CSV. Labels may contain
/// quoted commas; short records are skipped like any other malformed row.
pub fn read_label_rows(path: &Path) -> CliResult<Vec<(String, String)>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let (Some(code), Some(label)) = (record.get(0), record.get(1)) {
            rows.push((code.trim().to_string(), label.trim().to_string()));
        }
    }
    Ok(rows)
}
