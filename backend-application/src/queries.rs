pub mod event_queries;
pub mod media_queries;
pub mod saved_event_queries;
