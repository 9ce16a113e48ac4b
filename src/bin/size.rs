use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wingsizer::{
    MassBudget, WingConfig, WingPreset, WingResult, WingShape, WingSource, WingSpec,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    Right,
    Obtuse,
}

#[derive(Parser, Debug)]
#[command(name = "wingsizer", version, about = "Estimate model aircraft wing geometry")]
struct Opts {
    /// YAML wing file. Takes precedence over --preset.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Built-in design to start from
    #[arg(long, value_enum, default_value = "right")]
    preset: Preset,

    /// Aircraft mass (kg)
    #[arg(long)]
    mass: Option<f64>,

    /// Wingspan tip to tip (m)
    #[arg(long)]
    span: Option<f64>,

    /// Cruise speed (m/s)
    #[arg(long)]
    speed: Option<f64>,

    /// Tip chord of an obtuse wing (m)
    #[arg(long)]
    chord_tip: Option<f64>,

    /// Slanted edge offset of an obtuse wing (m)
    #[arg(long)]
    displacement: Option<f64>,

    /// Use the default parts mass budget instead of --mass
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "mass")]
    estimate_mass: bool,

    /// Print the result as JSON
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let opts = Opts::parse();
    let source = match &opts.config {
        Some(path) => WingSource::File(path.clone()),
        None => WingSource::Programmed(match opts.preset {
            Preset::Right => WingPreset::RightDefault,
            Preset::Obtuse => WingPreset::ObtuseDefault,
        }),
    };
    let mut config = WingConfig::new(source).context("loading wing configuration")?;
    config.spec = apply_overrides(config.spec, &opts)?;
    info!("Sizing '{}'", config.name);

    let result = config
        .compute()
        .with_context(|| format!("sizing '{}'", config.name))?;

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&config.spec, &result);
    }
    Ok(())
}

fn apply_overrides(mut spec: WingSpec, opts: &Opts) -> Result<WingSpec> {
    if opts.estimate_mass {
        let breakdown = MassBudget::default().estimate()?;
        info!("Estimated mass {:.4} kg", breakdown.total_kg);
        spec.mass = breakdown.total_kg;
    }
    if let Some(mass) = opts.mass {
        spec.mass = mass;
    }
    if let Some(span) = opts.span {
        spec.aircraft_span = span;
    }
    if let Some(speed) = opts.speed {
        spec.cruise_speed = speed;
    }
    match &mut spec.shape {
        // A right wing can also come from --config, so the parser alone cannot tell.
        WingShape::RightTrapezoid => {
            if opts.chord_tip.is_some() || opts.displacement.is_some() {
                bail!("--chord-tip and --displacement only apply to obtuse wings");
            }
        }
        WingShape::ObtuseTrapezoid {
            chord_tip,
            displacement,
        } => {
            if let Some(value) = opts.chord_tip {
                *chord_tip = value;
            }
            if let Some(value) = opts.displacement {
                *displacement = value;
            }
        }
    }
    Ok(spec)
}

fn print_report(spec: &WingSpec, result: &WingResult) {
    println!("Weight: {} kg", spec.mass);
    println!("Area: {:.5} m^2", result.area);
    println!("Lift: {:.4} N", result.lift_force);
    println!("Cruise speed: {} m/s", spec.cruise_speed);
    println!("Wing span: {} m", spec.aircraft_span);
    println!("Chord tip: {:.4} m", result.chord_tip);
    println!("Chord root: {:.4} m", result.chord_root);
    println!(
        "MAC: {:.4} m at {:.4} m from the root",
        result.mac, result.mac_span_position
    );
}
