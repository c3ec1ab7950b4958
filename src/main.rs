use anyhow::Context;
use clap::Parser;
use postdesk::api::ApiClient;
use postdesk::cli::Cli;
use postdesk::config::Config;
use postdesk::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_from(&cli.config_path())?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    let log_path = init_tracing(&config.logging)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log = %log_path.display(),
        "Starting postdesk"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("postdesk-io")
        .build()
        .context("Failed to start async runtime")?;

    let api = ApiClient::new(&config.api)?;
    postdesk::ui::run(&config, api, runtime.handle().clone())
        .context("Terminal UI failed")?;

    runtime.shutdown_background();
    tracing::info!("Exiting");
    Ok(())
}
