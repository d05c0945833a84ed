pub mod auth;
pub mod client_secret;
pub mod models;
pub mod submitter;
pub mod token;

pub use auth::{authenticate, AuthenticatedClient, AuthorizationPrompt, Authenticator, ConsolePrompt};
pub use models::EventRequest;
pub use submitter::EventSubmitter;

use crate::config::Config;
use crate::error::WfhResult;

/// Create the all-day WFH event on `date` and return its link
pub async fn create_wfh_event(
    client: AuthenticatedClient,
    config: &Config,
    date: &str,
) -> WfhResult<String> {
    let event = EventRequest::all_day(&config.event, date);
    let mut submitter = EventSubmitter::new(
        client,
        config.calendar_id.clone(),
        config.calendar_api_base.clone(),
    );

    submitter.submit(&event).await
}
