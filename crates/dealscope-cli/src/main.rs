mod analyze;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "dealscope-cli")]
#[command(about = "DealScope command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a full analysis over local documents without a running server.
    Analyze(analyze::AnalyzeArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze(args) => analyze::run(args).await,
    }
}
