use anyhow::Result;
use studylog::commands::Cli;
use studylog::libs::logger::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging("info");
    Cli::menu().await
}
