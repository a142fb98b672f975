use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod input;
mod model;
mod render;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "gdp-report")]
#[command(about = "Average GDP per country across CSV files", long_about = None)]
struct Cli {
    /// Input CSV files with country, gdp and year columns (later files win).
    #[arg(long, required = true, num_args = 1..)]
    files: Vec<PathBuf>,

    /// Path of the CSV report to write.
    #[arg(long)]
    report: PathBuf,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    // 1) Aggregate all inputs; any fatal error stops here, before output exists.
    let all_gdp = input::read_files(&cli.files)?;
    info!(files = cli.files.len(), countries = all_gdp.len(), "aggregated inputs");
    if all_gdp.is_empty() {
        info!("no usable rows in inputs; report will be header-only");
    }

    // 2) Rank.
    let ranked = model::rank_averages(all_gdp);

    // 3) Render.
    println!("{}", render::render_table(&ranked));
    render::write_report(&ranked, &cli.report)?;
    info!(report = %cli.report.display(), countries = ranked.len(), "wrote report");

    Ok(())
}
