pub mod solr_utils;
