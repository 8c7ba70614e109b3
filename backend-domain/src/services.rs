pub mod event_filter;
pub mod media_catalog;
pub mod shake_detector;

pub use event_filter::*;
pub use media_catalog::*;
pub use shake_detector::*;
