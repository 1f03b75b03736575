use clap::{Parser, Subcommand};
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;

use fusion_meals::{dishes, routes, ExtractionProfile, ProxyConfig, ProxyError};

#[derive(Parser, Debug)]
#[command(author, version, about = "Fusion Meals API proxy and demo servers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the proxy API in front of the recipe backends
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Run the restaurant dish demo server
    Dishes {
        #[arg(short, long)]
        port: Option<u16>,
        #[arg(long)]
        data_file: Option<PathBuf>,
    },
    /// Parse a markdown meal plan and print it as JSON
    ParseMealPlan {
        file: PathBuf,
        #[arg(short, long, default_value_t = 7)]
        days: usize,
    },
    /// Extract a generated recipe from markdown and print it as JSON
    ParseRecipe {
        file: PathBuf,
        /// Use the fusion builder's fallback values
        #[arg(long)]
        fusion: bool,
    },
}

async fn run(command: Command) -> Result<(), ProxyError> {
    match command {
        Command::Serve { host, port } => {
            let mut config = ProxyConfig::load()?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            routes::serve(&config).await
        }
        Command::Dishes { port, data_file } => {
            let mut config = ProxyConfig::load()?.dishes;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(data_file) = data_file {
                config.data_file = data_file;
            }
            dishes::serve(&config).await
        }
        Command::ParseMealPlan { file, days } => {
            let plan = fusion_meals::parse_meal_plan_file(file, days).await?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
            Ok(())
        }
        Command::ParseRecipe { file, fusion } => {
            let profile = if fusion {
                ExtractionProfile::FUSION
            } else {
                ExtractionProfile::GENERATED
            };
            let recipe = fusion_meals::parse_recipe_file(file, &profile).await?;
            println!("{}", serde_json::to_string_pretty(&recipe)?);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
