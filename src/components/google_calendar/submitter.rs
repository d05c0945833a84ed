use super::auth::AuthenticatedClient;
use super::models::{EventRequest, InsertedEvent};
use crate::error::{google_calendar_error, WfhResult};
use tracing::{debug, info};
use url::Url;

/// Creates events in one calendar
pub struct EventSubmitter {
    client: AuthenticatedClient,
    calendar_id: String,
    api_base: String,
}

impl EventSubmitter {
    pub fn new(client: AuthenticatedClient, calendar_id: String, api_base: String) -> Self {
        Self {
            client,
            calendar_id,
            api_base,
        }
    }

    /// `{api_base}/calendars/{calendar_id}/events`, with the id path-escaped
    pub fn events_url(&self) -> WfhResult<Url> {
        let mut url = Url::parse(&self.api_base)
            .map_err(|e| google_calendar_error(&format!("Failed to parse URL: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| google_calendar_error("Calendar API base cannot take a path"))?
            .pop_if_empty()
            .push("calendars")
            .push(&self.calendar_id)
            .push("events");

        Ok(url)
    }

    /// Insert the event and return its HTML link
    pub async fn submit(&mut self, event: &EventRequest) -> WfhResult<String> {
        let url = self.events_url()?;
        let access_token = self.client.access_token().await?;

        debug!("Inserting event on {} into calendar '{}'", event.start.date, self.calendar_id);

        let response = self
            .client
            .http()
            .post(url)
            .bearer_auth(access_token)
            .json(event)
            .send()
            .await
            .map_err(|e| google_calendar_error(&format!("Unable to create event. {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(google_calendar_error(&format!(
                "Unable to create event. HTTP {} - {}",
                status, error_body
            )));
        }

        let created: InsertedEvent = response.json().await.map_err(|e| {
            google_calendar_error(&format!("Failed to parse event response: {}", e))
        })?;

        let link = created
            .html_link
            .ok_or_else(|| google_calendar_error("Event response missing 'htmlLink' field"))?;

        info!("Created event {}", created.id.as_deref().unwrap_or("<unknown>"));
        Ok(link)
    }
}
