use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::classify::{classify, Classification, SectionPlan};
use crate::cli::GenerateArgs;
use crate::config::{load_config, GeneratorConfig};
use crate::errors::GenError;
use crate::io::{self, FileDestination, OutputDestination, StdoutDestination};
use crate::registry::{load_registry, Registry};
use crate::render::{render, RenderOptions};

/// Per-section entry counts of one run, in plan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub entries: usize,
    pub sections: Vec<(String, usize)>,
}

impl GenerateSummary {
    fn from_classification(registry: &Registry, classification: &Classification<'_>) -> Self {
        Self {
            entries: registry.len(),
            sections: classification
                .groups()
                .iter()
                .map(|g| (g.section.heading.clone(), g.entries.len()))
                .collect(),
        }
    }
}

/// Resolved inputs of a generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratePlan {
    pub config: GeneratorConfig,
    pub registry_path: PathBuf,
    pub output: Option<PathBuf>,
    pub check: bool,
}

/// Merge the config file (explicit or discovered from `cwd`) with CLI flags.
pub fn resolve(args: &GenerateArgs, cwd: &Path) -> crate::errors::Result<GeneratePlan> {
    let loaded = load_config(args.config.as_deref(), cwd)?;
    let registry_path = match &args.registry {
        Some(path) => path.clone(),
        None => loaded.registry_path(),
    };

    let mut config = loaded.config;
    if let Some(package) = &args.package {
        config.package = package.clone();
    }
    if let Some(layout) = args.layout {
        config.layout = layout;
    }
    config.validate()?;

    Ok(GeneratePlan {
        config,
        registry_path,
        output: args.output.clone(),
        check: args.check,
    })
}

/// Classify and render `registry`; nothing is written here.
pub fn generate_text(
    registry: &Registry,
    config: &GeneratorConfig,
) -> crate::errors::Result<(String, GenerateSummary)> {
    let plan = SectionPlan::from_config(config);
    let classification = classify(registry, &plan);
    let text = render(registry, &classification, &RenderOptions::from_config(config))?;
    Ok((
        text,
        GenerateSummary::from_classification(registry, &classification),
    ))
}

/// Fail with [`GenError::Stale`] unless `path` already holds `text`.
pub fn check_up_to_date(path: &Path, text: &str) -> crate::errors::Result<()> {
    match io::read_optional_file(path)? {
        Some(existing) if existing == text => Ok(()),
        _ => Err(GenError::Stale {
            path: path.to_path_buf(),
        }),
    }
}

/// Run a resolved plan, writing to `destination` only after full success.
pub fn run(
    plan: &GeneratePlan,
    destination: &dyn OutputDestination,
) -> crate::errors::Result<GenerateSummary> {
    let registry = load_registry(&plan.registry_path)?;
    let (text, summary) = generate_text(&registry, &plan.config)?;

    for (heading, count) in &summary.sections {
        tracing::info!("{heading}: {count} entries");
    }

    match (&plan.output, plan.check) {
        (Some(path), true) => {
            check_up_to_date(path, &text)?;
            tracing::info!("{} is up to date", path.display());
        }
        _ => {
            destination.write_str(&text)?;
            destination.flush()?;
            tracing::info!(
                "Wrote {} entries to {}",
                summary.entries,
                destination.description()
            );
        }
    }

    Ok(summary)
}

fn destination_for(output: Option<&Path>) -> Box<dyn OutputDestination> {
    match output {
        Some(path) => Box::new(FileDestination::new(path.to_path_buf())),
        None => Box::new(StdoutDestination::new()),
    }
}

pub fn handle_generate(args: GenerateArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let plan = resolve(&args, &cwd).context("Failed to resolve configuration")?;
    let destination = destination_for(plan.output.as_deref());

    run(&plan, destination.as_ref()).with_context(|| {
        format!(
            "Failed to generate numerics from {}",
            plan.registry_path.display()
        )
    })?;
    Ok(())
}
