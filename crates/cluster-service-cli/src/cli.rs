use clap::{Args, Parser, Subcommand, ValueEnum};
use cluster_service_aws::SessionConfig;
use cluster_service_core::tags::parse_tag;
use cluster_service_core::{CoreError, TagSet};

/// Remove the cloud resources left behind by a decommissioned cluster.
#[derive(Debug, Parser)]
#[command(name = "cluster-service", version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Delete every resource tagged with the cluster id
    Cleanup(CleanupArgs),
}

#[derive(Debug, Args)]
pub struct CleanupArgs {
    /// Value of the cluster-identity tag
    pub cluster_id: String,

    /// Extra tag a resource must carry (KEY=VALUE, repeatable)
    #[arg(long = "tag", value_name = "KEY=VALUE", value_parser = parse_tag_arg)]
    pub tags: Vec<(String, String)>,

    /// Report what would be deleted without deleting it
    #[arg(long)]
    pub dry_run: bool,

    /// AWS region
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Named AWS profile
    #[arg(long, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,
}

impl CleanupArgs {
    /// Extra tags as a set; a repeated key keeps its last value.
    pub fn tag_set(&self) -> TagSet {
        self.tags.iter().cloned().collect()
    }

    pub fn session(&self) -> SessionConfig {
        SessionConfig {
            region: self.region.clone(),
            profile: self.profile.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

fn parse_tag_arg(raw: &str) -> Result<(String, String), CoreError> {
    parse_tag(raw)
}
