//! Catalog server library: Solr access, response shaping and HTTP handlers.

pub mod api;
pub mod db_utils;
pub mod server_extra;
