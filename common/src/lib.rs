//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod search_query;
pub mod search_result;
pub mod search_const;
pub mod solr_document;
pub mod catalog_config;
pub mod json_api;
