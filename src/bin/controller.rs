// src/bin/controller.rs - Interactive W/A/S/D arm controller on stdin/stdout
use clap::Parser;
use planar_arm::{config, controller, Config, ThreeLinkArm};

#[derive(Debug, Parser)]
#[command(name = "arm-controller", about = "Drive the arm end effector from the keyboard")]
struct Args {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<String>,
    /// Override the per-key step from the configuration.
    #[arg(short, long)]
    step: Option<f64>,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    // Logs go to stderr so the transcript on stdout stays readable
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = match args.config.as_deref() {
        Some(path) => config::load_config(path)?,
        None => Config::default(),
    };
    if let Some(step) = args.step {
        config.controller.step = step;
        config.validate().map_err(|e| {
            tracing::error!("Rejected --step {}: {}", step, e);
            e
        })?;
    }

    let arm = ThreeLinkArm::from_config(&config.arm)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    controller::run(arm, config.controller.step, stdin.lock(), stdout.lock())?;
    Ok(())
}
