use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::info;

use travelblog::{
    Envelope, Pipeline, ProviderKind, ResearchStage, ToolRegistry, TravelBlogConfig,
    TravelBlogError, providers, telemetry,
};

/// Travel data research tools for agent-written travel blogs
#[derive(Parser)]
#[command(name = "travelblog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured provider
    #[arg(short, long, global = true, value_enum)]
    provider: Option<ProviderKind>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Research a destination and write the report to the output file
    Research {
        /// Destination to research
        #[arg(default_value = "Kyiv")]
        destination: String,

        /// Output file (defaults to output.path from the config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Call a single tool with JSON arguments and print the result envelope
    Tool {
        /// Tool name, see `tools`
        name: String,

        /// Arguments as a JSON object
        #[arg(default_value = "{}")]
        args: String,
    },

    /// List the available tools with their argument schemas
    Tools,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            if let Some(hint) = err
                .chain()
                .find_map(|cause| cause.downcast_ref::<TravelBlogError>())
                .map(TravelBlogError::user_message)
            {
                eprintln!("{hint}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = TravelBlogConfig::load_with_provider(cli.config.clone(), cli.provider)
        .context("Failed to load configuration")?;
    telemetry::init(&config.logging, cli.verbose)?;

    let provider = providers::from_config(&config)?;
    let registry = ToolRegistry::for_provider(provider);

    match cli.command {
        Command::Research {
            destination,
            output,
        } => {
            info!("Starting blog research about {}...", destination);
            let pipeline = Pipeline::new().stage(ResearchStage::from_registry(&registry)?);
            let text = pipeline.run(destination).await?;

            let path = output.unwrap_or(config.output.path);
            std::fs::write(&path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Research saved to '{}'", path.display());
        }
        Command::Tool { name, args } => {
            let arguments: Value =
                serde_json::from_str(&args).context("Tool arguments must be valid JSON")?;
            let envelope = registry.call(&name, arguments).await;
            println!("{}", serde_json::to_string_pretty(&envelope)?);
            if let Envelope::Failure { .. } = envelope {
                bail!("Tool {name} failed");
            }
        }
        Command::Tools => {
            println!("{}", serde_json::to_string_pretty(&registry.descriptors())?);
        }
    }

    Ok(())
}
