pub mod document_store;
pub mod session_file;

pub use document_store::*;
pub use session_file::*;
