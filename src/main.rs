use tracing::info;
use wfh::startup;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting wfh");

    // Load configuration
    let config = startup::load_config()?;

    let link = startup::run(&config, std::env::args().skip(1)).await?;
    println!("Event created: {}", link);

    Ok(())
}
