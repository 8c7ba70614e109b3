pub mod event_handlers;
pub mod motion_handlers;
pub mod ops_handlers;
pub mod saved_handlers;

pub use event_handlers::*;
pub use motion_handlers::*;
pub use ops_handlers::*;
pub use saved_handlers::*;
