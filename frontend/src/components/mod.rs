pub mod error_boundary;
pub mod loading_indicator;
pub mod navbar;
pub mod modal;
pub mod search_components;
pub mod document_components;
