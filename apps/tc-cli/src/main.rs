mod render;

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tc_app::{AppError, AppResult, RunResponse, project_service, run_service};

use crate::render::{OutputFormat, sink_for};

#[derive(Parser)]
#[command(name = "tc-cli")]
#[command(about = "ThermoControl CLI - Thermostat control loop simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List built-in scenarios
    Presets,
    /// Validate a scenario file
    Validate {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
    },
    /// Run a scenario and render its temperature trajectory
    Run {
        /// Built-in scenario name (see `presets`)
        #[arg(conflicts_with = "scenario", required_unless_present = "scenario")]
        preset: Option<String>,
        /// Path to a scenario YAML or JSON file
        #[arg(long)]
        scenario: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Override the scenario's step count
        #[arg(long)]
        steps: Option<usize>,
    },
    /// Write a built-in scenario to a YAML file
    ExportPreset {
        /// Built-in scenario name
        preset: String,
        /// Output YAML file path
        output: PathBuf,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Presets => cmd_presets(),
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Run {
            preset,
            scenario,
            format,
            output,
            steps,
        } => cmd_run(
            preset.as_deref(),
            scenario.as_deref(),
            format,
            output.as_deref(),
            steps,
        ),
        Commands::ExportPreset { preset, output } => cmd_export_preset(&preset, &output),
    }
}

fn cmd_presets() -> AppResult<()> {
    println!("Built-in scenarios:");
    for preset in project_service::list_presets() {
        println!(
            "  {:<16} {:<13} {} steps, setpoint {}",
            preset.name, preset.loop_type, preset.steps, preset.setpoint
        );
    }
    Ok(())
}

fn cmd_validate(scenario_path: &Path) -> AppResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = project_service::load_scenario(scenario_path)?;
    println!(
        "✓ Scenario '{}' is valid ({}, {} steps)",
        scenario.name,
        scenario.loop_kind.type_name(),
        scenario.steps
    );
    Ok(())
}

fn cmd_run(
    preset: Option<&str>,
    scenario_path: Option<&Path>,
    format: OutputFormat,
    output: Option<&Path>,
    steps: Option<usize>,
) -> AppResult<()> {
    let mut scenario = match (preset, scenario_path) {
        (_, Some(path)) => project_service::load_scenario(path)?,
        (Some(name), None) => project_service::load_preset(name)?,
        (None, None) => {
            return Err(AppError::InvalidInput(
                "either a preset name or --scenario is required".to_string(),
            ));
        }
    };
    if let Some(steps) = steps {
        tracing::debug!(from = scenario.steps, to = steps, "overriding step count");
        scenario.steps = steps;
    }

    let response = run_service::run_scenario(&scenario)?;

    let out: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    let mut sink = sink_for(format, out);
    sink.render(
        &response.record.trajectory,
        response.record.setpoint,
        &response.labels,
    )?;

    if let Some(path) = output {
        eprintln!(
            "✓ Wrote {} samples to {}",
            response.record.trajectory.len(),
            path.display()
        );
    }
    print_summary(&response);
    Ok(())
}

fn print_summary(response: &RunResponse) {
    let s = &response.summary;
    eprintln!("\nRun summary ({}):", response.scenario_name);
    eprintln!("  Steps:          {}", s.samples);
    eprintln!("  Initial:        {:.3}", response.record.initial.temperature);
    eprintln!("  Final:          {:.3}", s.final_temperature);
    eprintln!("  Range:          {:.3} - {:.3}", s.min, s.max);
    eprintln!("  Setpoint:       {:.3}", s.setpoint);
    match s.first_crossing {
        Some(step) => eprintln!("  First crossing: step {}", step),
        None => eprintln!("  First crossing: never"),
    }
    eprintln!("  Peak overshoot: {:.3}", s.peak_overshoot);
    eprintln!("  Reversals:      {}", s.reversals);
    if s.diverged() {
        eprintln!(
            "  Diverged:       {} non-finite samples",
            s.non_finite_samples
        );
    }
    if let Some(eq) = response.equilibrium {
        eprintln!(
            "  Equilibrium:    {:.3} (offset {:.3})",
            eq,
            s.setpoint - eq
        );
    }
    if let Some(m) = response.error_multiplier {
        let behaviour = if m.abs() >= 1.0 {
            "unstable"
        } else if m < 0.0 {
            "alternating"
        } else {
            "monotone"
        };
        eprintln!("  Error factor:   {:.4} per step ({})", m, behaviour);
    }
}

fn cmd_export_preset(preset: &str, output: &Path) -> AppResult<()> {
    project_service::export_preset(preset, output)?;
    println!("✓ Exported preset '{}' to {}", preset, output.display());
    Ok(())
}
