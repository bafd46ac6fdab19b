mod cli;
mod infra;
mod pages;
mod render;
mod routes;
mod server;

use youth_advocacy::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
