// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Field/Radius Explorer
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Interactive explorer for the toroidal field a tokamak needs as a
//! function of major radius, calibrated on a reference design.
//!
//! ```text
//! fusion-explorer                        # terminal UI, ITER reference
//! fusion-explorer --headless --q-pb 20   # print one table and exit
//! fusion-explorer --config explorer.json --log-file explorer.log
//! ```

mod controller;
mod table;
mod tui;

use clap::Parser;
use controller::ExplorationController;
use fusion_types::config::ExplorerConfig;
use fusion_types::domain::Parameter;
use fusion_types::error::FusionResult;
use fusion_types::params::ReactorParameters;
use std::fs::File;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Tokamak field vs. major radius scaling explorer
#[derive(Parser, Debug)]
#[command(name = "fusion-explorer")]
#[command(about = "Reference-calibrated B(R) scaling explorer for tokamaks", long_about = None)]
struct Args {
    /// JSON config with reference, sweep and plot sections
    #[arg(short, long)]
    config: Option<String>,

    /// Print the curves as a table instead of starting the UI
    #[arg(long)]
    headless: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<String>,

    /// L-H threshold margin
    #[arg(long)]
    f_lh: Option<f64>,

    /// Greenwald density fraction
    #[arg(long)]
    f_gw: Option<f64>,

    /// Edge safety factor
    #[arg(long)]
    q: Option<f64>,

    /// Confinement enhancement factor
    #[arg(long)]
    h: Option<f64>,

    /// Fusion power in MW
    #[arg(long)]
    p_fus: Option<f64>,

    /// Power-balance gain
    #[arg(long)]
    q_pb: Option<f64>,

    /// Current-drive gain
    #[arg(long)]
    q_cd: Option<f64>,

    /// Normalised beta
    #[arg(long)]
    beta_n: Option<f64>,
}

impl Args {
    fn overrides(&self) -> [(Parameter, Option<f64>); 8] {
        [
            (Parameter::LhFraction, self.f_lh),
            (Parameter::GreenwaldFraction, self.f_gw),
            (Parameter::SafetyFactor, self.q),
            (Parameter::HFactor, self.h),
            (Parameter::FusionPower, self.p_fus),
            (Parameter::QPowerBalance, self.q_pb),
            (Parameter::QCurrentDrive, self.q_cd),
            (Parameter::BetaN, self.beta_n),
        ]
    }

    /// Starting controls: the reference design with command-line overrides.
    fn initial_target(&self, reference: &ReactorParameters) -> ReactorParameters {
        self.overrides()
            .into_iter()
            .fold(reference.as_target(), |params, (p, v)| match v {
                Some(v) => p.set(&params, v),
                None => params,
            })
    }
}

/// The terminal UI owns stdout and stderr, so it only logs to a file.
fn init_logging(args: &Args) -> FusionResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Some(path) = &args.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if args.headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

fn main() -> FusionResult<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let config = match &args.config {
        Some(path) => ExplorerConfig::from_file(path)?,
        None => {
            let config = ExplorerConfig::default();
            config.validate()?;
            config
        }
    };
    let radii = config.sweep.radii();
    info!(
        points = radii.len(),
        start = config.sweep.start_m,
        stop = config.sweep.stop_m,
        headless = args.headless,
        "starting fusion explorer"
    );

    let initial = args.initial_target(&config.reference);
    let mut controller = ExplorationController::new(config.reference, radii, &initial);

    if args.headless {
        let curves = controller.evaluate()?;
        print!("{}", table::render(&curves));
        return Ok(());
    }

    tui::run(&mut controller, config.plot)?;
    info!(cycles = controller.cycles(), "explorer closed");
    Ok(())
}
