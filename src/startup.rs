use crate::cli;
use crate::components::{authenticate, create_wfh_event};
use crate::config::Config;
use crate::error::{other_error, WfhResult};
use crate::utils::time::resolve_date;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper=warn")),
        )
        // stdout is reserved for the prompt and the event link
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| other_error(&format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Create the event for the weekday named in `args` and return its link.
///
/// The argument and weekday are checked before any file or network access.
pub async fn run<I>(config: &Config, args: I) -> WfhResult<String>
where
    I: IntoIterator<Item = String>,
{
    let day = cli::day_argument(args)?;
    let date = resolve_date(&day)?;
    info!("Working from home on {}", date);

    let client = authenticate(config).await?;
    create_wfh_event(client, config, &date).await
}
