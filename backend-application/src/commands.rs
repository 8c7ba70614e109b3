pub mod event_commands;
pub mod motion_commands;
pub mod saved_event_commands;
