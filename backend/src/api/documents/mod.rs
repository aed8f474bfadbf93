//! Document API: lookup and JSON rendering.

mod get_document;
pub use get_document::get_document;

pub mod document_json;
