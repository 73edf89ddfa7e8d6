use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use postgen::config::HookContext;
use postgen::version::endoflife::EndOfLifeRegistry;

#[derive(Parser)]
#[command(name = "postgen")]
#[command(version, about = "Finalize a freshly generated Python project")]
struct Cli {
    /// Root of the generated project
    #[arg(long, default_value = ".")]
    project_dir: PathBuf,

    /// Importable package name, possibly dotted (e.g. "acme.tools.cli")
    #[arg(long)]
    package_name: String,

    /// Distribution name as published to an index (e.g. "acme-tools-cli")
    #[arg(long)]
    distribution_name: String,

    /// Override the release-support registry base URL
    #[arg(long)]
    registry_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("postgen=info")),
        )
        .with_target(false)
        .without_time()
        .init();

    let registry = match cli.registry_url {
        Some(url) => EndOfLifeRegistry::new(url),
        None => EndOfLifeRegistry::default(),
    };

    let ctx = HookContext {
        project_root: cli.project_dir,
        package_name: cli.package_name,
        distribution_name: cli.distribution_name,
    };

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(postgen::hook::run(&ctx, &registry))?;

    Ok(())
}
