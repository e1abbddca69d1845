mod error;
mod render;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use error::{CliError, CliResult};
use render::OutputFormat;
use sc_components::FrictionMethod;
use sc_core::UnitSystem;
use sc_project::{EvaluationSettings, Project, build_pipeline};

#[derive(Parser)]
#[command(name = "sc-cli")]
#[command(about = "SysCurve CLI - Pump system curves for series pipelines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file syntax and section parameters
    Validate {
        /// Path to the project file (YAML, or JSON by extension)
        project_path: PathBuf,
    },
    /// List pipe sections in series order
    Sections {
        /// Path to the project file
        project_path: PathBuf,
    },
    /// Evaluate the system curve
    Curve {
        /// Path to the project file
        project_path: PathBuf,
        #[command(flatten)]
        overrides: Overrides,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show per-flow-rate head terms of one section
    Breakdown {
        /// Path to the project file
        project_path: PathBuf,
        /// Section ID
        section_id: String,
        #[command(flatten)]
        overrides: Overrides,
    },
}

#[derive(clap::Args)]
struct Overrides {
    /// Target flow rate (replaces the project value)
    #[arg(long)]
    target: Option<f64>,
    /// Friction-factor method: serghide or colebrook
    #[arg(long)]
    method: Option<FrictionMethod>,
    /// Unit system: imperial or metric
    #[arg(long)]
    units: Option<UnitSystem>,
}

impl Overrides {
    fn apply(&self, mut settings: EvaluationSettings) -> EvaluationSettings {
        if let Some(target) = self.target {
            settings.target_flow_rate = target;
        }
        if let Some(method) = self.method {
            settings.method = method;
        }
        if let Some(units) = self.units {
            settings.unit_system = units;
        }
        settings
    }
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Sections { project_path } => cmd_sections(&project_path),
        Commands::Curve {
            project_path,
            overrides,
            format,
            output,
        } => cmd_curve(&project_path, &overrides, format, output.as_deref()),
        Commands::Breakdown {
            project_path,
            section_id,
            overrides,
        } => cmd_breakdown(&project_path, &section_id, &overrides),
    }
}

fn load_project(project_path: &Path) -> CliResult<Project> {
    tracing::debug!(path = %project_path.display(), "loading project");
    Ok(sc_project::load(project_path)?)
}

fn cmd_validate(project_path: &Path) -> CliResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = load_project(project_path)?;
    println!(
        "✓ Project is valid ({} sections)",
        project.pipeline.sections.len()
    );
    Ok(())
}

fn cmd_sections(project_path: &Path) -> CliResult<()> {
    let project = load_project(project_path)?;
    let units = project.pipeline.unit_system;
    let sections = &project.pipeline.sections;

    if sections.is_empty() {
        println!("No sections found in project");
        return Ok(());
    }

    println!("Sections in '{}' ({}):", project.name, units);
    for (index, section) in sections.iter().enumerate() {
        let k_total: f64 = section.k_values.iter().sum();
        println!(
            "  [{}] {} - {} (L={} {len}, D={} {len}, e={}, K={:.2})",
            index,
            section.id,
            section.label(),
            section.length,
            section.diameter,
            section.absolute_roughness,
            k_total,
            len = units.length_label(),
        );
    }
    Ok(())
}

fn cmd_curve(
    project_path: &Path,
    overrides: &Overrides,
    format: OutputFormat,
    output: Option<&Path>,
) -> CliResult<()> {
    let project = load_project(project_path)?;
    let settings = overrides.apply(project.pipeline.settings());
    let pipeline = build_pipeline(&project.pipeline)?;

    let curve = pipeline.evaluate(
        settings.target_flow_rate,
        settings.method,
        settings.unit_system,
    )?;
    let rendered = render::render_curve(
        &curve,
        settings.unit_system,
        format,
        Some(project.name.as_str()),
    )?;

    if let Some(path) = output {
        std::fs::write(path, rendered).map_err(|e| CliError::OutputWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
        println!(
            "✓ Exported {} curve points to {}",
            curve.len(),
            path.display()
        );
    } else {
        print!("{}", rendered);
    }
    Ok(())
}

fn cmd_breakdown(project_path: &Path, section_id: &str, overrides: &Overrides) -> CliResult<()> {
    let project = load_project(project_path)?;
    let settings = overrides.apply(project.pipeline.settings());
    let pipeline = build_pipeline(&project.pipeline)?;

    let index = pipeline
        .position(section_id)
        .ok_or_else(|| CliError::SectionNotFound(section_id.to_string()))?;

    let mut per_section = pipeline.evaluate_sections(
        settings.target_flow_rate,
        settings.method,
        settings.unit_system,
    )?;
    let heads = per_section.swap_remove(index);

    println!(
        "Section '{}' at target {} {} ({}, {}):",
        section_id,
        settings.target_flow_rate,
        settings.unit_system.flow_label(),
        settings.method,
        settings.unit_system,
    );
    print!("{}", render::breakdown_table(&heads, settings.unit_system));
    Ok(())
}
