// Export components
pub mod google_calendar;

// Re-export the calendar entry points
pub use google_calendar::{authenticate, create_wfh_event};
