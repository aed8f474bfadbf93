//! Catalog display configuration: which index fields carry titles, types,
//! list fields and facets.

use serde::{Deserialize, Serialize};

use crate::search_const::{
    DEFAULT_DISPLAY_TYPE_FIELD, DEFAULT_FACET_LIMIT, DEFAULT_PER_PAGE, DEFAULT_TITLE_FIELD, MAX_PER_PAGE,
    MORE_LIKE_THIS_COUNT,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetFieldConfig {
    pub field: String,
    pub label: String,
    pub limit: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayFieldConfig {
    pub field: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub title_field: String,
    pub display_type_field: String,
    pub index_fields: Vec<DisplayFieldConfig>,
    pub show_fields: Vec<DisplayFieldConfig>,
    pub facet_fields: Vec<FacetFieldConfig>,
    pub default_per_page: u64,
    pub max_per_page: u64,
    pub more_like_this_fields: Vec<String>,
    pub more_like_this_count: u64,
}

impl CatalogConfig {
    /// A bare configuration: no facets and no extra list fields.
    pub fn new(title_field: impl Into<String>) -> Self {
        Self {
            title_field: title_field.into(),
            display_type_field: DEFAULT_DISPLAY_TYPE_FIELD.to_string(),
            index_fields: vec![],
            show_fields: vec![],
            facet_fields: vec![],
            default_per_page: DEFAULT_PER_PAGE,
            max_per_page: MAX_PER_PAGE,
            more_like_this_fields: vec![],
            more_like_this_count: MORE_LIKE_THIS_COUNT,
        }
    }

    pub fn add_facet_field(mut self, field: impl Into<String>, label: impl Into<String>) -> Self {
        self.facet_fields.push(FacetFieldConfig { field: field.into(), label: label.into(), limit: DEFAULT_FACET_LIMIT });
        self
    }

    pub fn add_index_field(mut self, field: impl Into<String>, label: impl Into<String>) -> Self {
        self.index_fields.push(DisplayFieldConfig { field: field.into(), label: label.into() });
        self
    }

    pub fn add_show_field(mut self, field: impl Into<String>, label: impl Into<String>) -> Self {
        self.show_fields.push(DisplayFieldConfig { field: field.into(), label: label.into() });
        self
    }

    pub fn facet_config(&self, field: &str) -> Option<&FacetFieldConfig> {
        self.facet_fields.iter().find(|f| f.field == field)
    }

    /// Requested page size, falling back to the default and capped at the maximum.
    pub fn rows_for(&self, per_page: Option<u64>) -> u64 {
        match per_page {
            Some(n) if n > 0 => n.min(self.max_per_page),
            _ => self.default_per_page,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let mut config = CatalogConfig::new(DEFAULT_TITLE_FIELD)
            .add_facet_field("format", "Format")
            .add_facet_field("pub_date_ssim", "Publication Year")
            .add_facet_field("language_ssim", "Language")
            .add_facet_field("subject_ssim", "Topic")
            .add_index_field("author_tsim", "Author")
            .add_index_field("format", "Format")
            .add_index_field("language_ssim", "Language")
            .add_index_field("published_ssim", "Published")
            .add_show_field("subtitle_tsim", "Subtitle")
            .add_show_field("author_tsim", "Author")
            .add_show_field("format", "Format")
            .add_show_field("url_fulltext_ssim", "URL")
            .add_show_field("language_ssim", "Language")
            .add_show_field("published_ssim", "Published")
            .add_show_field("isbn_ssim", "ISBN");
        config.more_like_this_fields = vec!["title_tsim".to_string(), "subject_ssim".to_string()];
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_defaulted_and_capped() {
        let config = CatalogConfig::new("title_tsim");
        assert_eq!(config.rows_for(None), DEFAULT_PER_PAGE);
        assert_eq!(config.rows_for(Some(0)), DEFAULT_PER_PAGE);
        assert_eq!(config.rows_for(Some(20)), 20);
        assert_eq!(config.rows_for(Some(5000)), MAX_PER_PAGE);
    }

    #[test]
    fn facet_lookup_by_field_name() {
        let config = CatalogConfig::new("title_tsim").add_facet_field("format", "Format");
        assert_eq!(config.facet_config("format").map(|f| f.label.as_str()), Some("Format"));
        assert!(config.facet_config("language_ssim").is_none());
    }
}
