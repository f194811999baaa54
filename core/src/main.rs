use anyhow::Context;
use clap::Parser;

use healthgraph_core::cli::Cli;
use healthgraph_core::metrics::Metrics;
use healthgraph_core::pipeline::run_export;
use healthgraph_core::storage::{load_config, save_config};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.apply_overrides(load_config(&cli.config)?);
    config.validate(&cli.config)?;

    if let Some(path) = &cli.write_config {
        save_config(&config, path)?;
        return Ok(());
    }

    let metrics = Metrics::new()?;
    let summary = run_export(&config, &metrics)
        .with_context(|| format!("export of {} failed", config.input_path.display()))?;

    if cli.print_metrics {
        eprint!("{}", metrics.render()?);
    }
    println!(
        "Exported {} workouts to {}",
        summary.exported,
        summary.output_path.display()
    );
    Ok(())
}
