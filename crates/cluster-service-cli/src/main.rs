use clap::Parser;
use cluster_service_aws::{load_sdk_config, AwsClient};
use cluster_service_cli::cli::{CleanupArgs, Cli, Command, OutputFormat};
use cluster_service_cli::output::render_table;
use eyre::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_json);

    match cli.command {
        Command::Cleanup(args) => cleanup(args).await,
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_logging(verbose: bool, json: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn cleanup(args: CleanupArgs) -> Result<()> {
    let tags = args.tag_set();
    let config = load_sdk_config(&args.session()).await;
    let client = AwsClient::from_sdk_config(&config);

    tracing::info!(
        cluster_id = %args.cluster_id,
        dry_run = args.dry_run,
        engines = ?client.engine_names().collect::<Vec<_>>(),
        "cleaning up cluster resources"
    );

    let report = client
        .delete_resources_for_cluster(&args.cluster_id, &tags, args.dry_run)
        .await?;

    match args.output {
        OutputFormat::Json => println!("{}", report.to_json_pretty()?),
        OutputFormat::Table => print!("{}", render_table(&report)),
    }

    tracing::info!(cluster_id = %args.cluster_id, items = report.len(), "cleanup finished");
    Ok(())
}
