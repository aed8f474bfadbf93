//! Absolute URLs the JSON API links to.

const DEFAULT_CATALOG_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogUrls {
    /// The listing being rendered; pagination links are built on it.
    pub current_url: String,
    /// Target of facet apply/remove links.
    pub search_action_url: String,
    /// Where a facet resource's `self` link points.
    pub facet_url: String,
    /// Prefix of per-document URLs.
    pub document_url: String,
}

impl CatalogUrls {
    pub fn for_base(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            current_url: format!("{base}/"),
            search_action_url: format!("{base}/"),
            facet_url: format!("{base}/"),
            document_url: format!("{base}/catalog"),
        }
    }

    /// URLs for the JSON endpoints: paging, facet and facet item links stay
    /// on `/catalog.json`, which lists every configured facet in `included`.
    pub fn for_json_api(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            current_url: format!("{base}/catalog.json"),
            search_action_url: format!("{base}/catalog.json"),
            facet_url: format!("{base}/catalog.json"),
            ..Self::for_base(base)
        }
    }

    pub fn base_url_from_env() -> String {
        std::env::var("CATALOG_BASE_URL").unwrap_or(DEFAULT_CATALOG_BASE_URL.to_string())
    }

    pub fn document_url_for(&self, id: &str) -> String {
        format!("{}/{}", self.document_url, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_urls_under_base() {
        let urls = CatalogUrls::for_base("http://test.host/");
        assert_eq!(urls.current_url, "http://test.host/");
        assert_eq!(urls.document_url_for("123"), "http://test.host/catalog/123");
        assert_eq!(urls.facet_url, "http://test.host/");

        let json = CatalogUrls::for_json_api("http://test.host");
        assert_eq!(json.current_url, "http://test.host/catalog.json");
        assert_eq!(json.search_action_url, "http://test.host/catalog.json");
        assert_eq!(json.facet_url, "http://test.host/catalog.json");
        assert_eq!(json.document_url, "http://test.host/catalog");
    }
}
