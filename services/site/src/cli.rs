use crate::render::{run_render, RenderArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use youth_advocacy::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Youth Advocacy Africa",
    about = "Serve the Youth Advocacy Africa landing page and application form",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Write the landing page HTML for static hosting
    Render(RenderArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Render(args) => run_render(args),
    }
}
