use crate::config::EventText;
use serde::{Deserialize, Serialize};

/// All-day date in the Calendar API's `EventDateTime` shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDate {
    pub date: String,
}

/// Event insert body for a single all-day event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRequest {
    pub summary: String,
    pub location: String,
    pub description: String,
    pub start: EventDate,
    pub end: EventDate,
}

impl EventRequest {
    /// Event starting and ending on `date` (`YYYY-MM-DD`)
    pub fn all_day(text: &EventText, date: &str) -> Self {
        Self {
            summary: text.summary.clone(),
            location: text.location.clone(),
            description: text.description.clone(),
            start: EventDate {
                date: date.to_string(),
            },
            end: EventDate {
                date: date.to_string(),
            },
        }
    }
}

/// The part of the insert response we use
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertedEvent {
    pub id: Option<String>,
    pub html_link: Option<String>,
}
