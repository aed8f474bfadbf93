use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::Context;
use common::{catalog_config::CatalogConfig, search_query::SearchQuery, solr_document::SolrDocument};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

const DEFAULT_SOLR_URL: &str = "http://127.0.0.1:8983/solr/blacklight-core";
const DEFAULT_SOLR_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct SolrConfig {
    pub url: String,
    pub timeout_secs: u64,
}

impl SolrConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), timeout_secs: DEFAULT_SOLR_TIMEOUT_SECS }
    }

    pub fn from_env() -> Self {
        let url = std::env::var("SOLR_URL").unwrap_or(DEFAULT_SOLR_URL.to_string());
        let timeout_secs = std::env::var("SOLR_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SOLR_TIMEOUT_SECS);
        Self { url, timeout_secs }
    }

    fn select_url(&self) -> String {
        format!("{}/select", self.url.trim_end_matches('/'))
    }
}

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
#[serde(default)]
pub struct RawSolrResponse {
    #[serde(rename = "responseHeader")]
    pub response_header: RawResponseHeader,
    pub response: RawSolrResultSet,
    pub facet_counts: Option<RawFacetCounts>,
    /// Keyed by document id. Depending on `json.nl` Solr renders this as an
    /// object or as a flat `[id, result, id, result]` list.
    #[serde(rename = "moreLikeThis")]
    pub more_like_this: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
#[serde(default)]
pub struct RawResponseHeader {
    pub status: i64,
    #[serde(rename = "QTime")]
    pub qtime: u64,
    pub params: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
#[serde(default)]
pub struct RawSolrResultSet {
    #[serde(rename = "numFound")]
    pub num_found: u64,
    pub start: u64,
    pub docs: Vec<SolrDocument>,
}

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
#[serde(default)]
pub struct RawFacetCounts {
    /// `field -> [value, count, value, count, ...]`
    pub facet_fields: BTreeMap<String, Vec<serde_json::Value>>,
}

fn term_query(field: &str, value: &str) -> String {
    format!("{{!term f={field}}}{value}")
}

pub fn build_search_params(query: &SearchQuery, config: &CatalogConfig) -> Vec<(String, String)> {
    let rows = config.rows_for(query.per_page);
    let start = (query.current_page() - 1).saturating_mul(rows);
    let q = query.q.trim();

    let mut params = vec![
        ("q".to_string(), if q.is_empty() { "*:*".to_string() } else { q.to_string() }),
        ("start".to_string(), start.to_string()),
        ("rows".to_string(), rows.to_string()),
        ("wt".to_string(), "json".to_string()),
        ("facet".to_string(), "true".to_string()),
        ("facet.mincount".to_string(), "1".to_string()),
    ];
    for facet in &config.facet_fields {
        params.push(("facet.field".to_string(), facet.field.clone()));
        params.push((format!("f.{}.facet.limit", facet.field), facet.limit.to_string()));
    }
    // only configured fields reach the local params
    for (field, values) in query.facet_filters.iter().filter(|(field, _)| config.facet_config(field).is_some()) {
        for value in values {
            params.push(("fq".to_string(), term_query(field, value)));
        }
    }
    params
}

pub fn build_document_params(id: &str, config: &CatalogConfig) -> Vec<(String, String)> {
    let mut params = vec![
        ("q".to_string(), term_query("id", id)),
        ("rows".to_string(), "1".to_string()),
        ("wt".to_string(), "json".to_string()),
    ];
    if !config.more_like_this_fields.is_empty() {
        params.extend([
            ("mlt".to_string(), "true".to_string()),
            ("mlt.fl".to_string(), config.more_like_this_fields.join(",")),
            ("mlt.count".to_string(), config.more_like_this_count.to_string()),
            ("mlt.mintf".to_string(), "1".to_string()),
            ("mlt.mindf".to_string(), "1".to_string()),
        ]);
    }
    params
}

pub async fn solr_select(config: &SolrConfig, params: &[(String, String)]) -> anyhow::Result<RawSolrResponse> {
    let url = config.select_url();
    debug!("SOLR SELECT: {} {:?}", url, params);
    let t0 = std::time::Instant::now();
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .context("Failed to build http client")?;

    let response = client
        .post(&url)
        .form(params)
        .send()
        .await
        .with_context(|| format!("Failed to reach solr at {url}"))?;
    let status = response.status();
    let response_txt = response.text().await.context("Failed to read solr response")?;
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("Solr error: {}: {}", status, response_txt);
    }
    let dt_ms = t0.elapsed().as_millis();
    info!("SOLR RESPONSE: status = {}, len = {}, took {}ms", status, response_txt.len(), dt_ms);

    let response: RawSolrResponse = serde_json::from_str(&response_txt).context("Failed to parse solr response")?;
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<'a>(params: &'a [(String, String)], key: &str) -> Vec<&'a str> {
        params.iter().filter(|(k, _)| k == key).map(|(_, v)| v.as_str()).collect()
    }

    #[test]
    fn search_params_cover_paging_facets_and_filters() {
        let config = CatalogConfig::new("title_tsim").add_facet_field("format", "Format").add_facet_field("language_ssim", "Language");
        let query = SearchQuery::from_query_string("q=rome&page=3&per_page=20&f[format][]=Book");
        let params = build_search_params(&query, &config);

        assert_eq!(values(&params, "q"), vec!["rome"]);
        assert_eq!(values(&params, "start"), vec!["40"]);
        assert_eq!(values(&params, "rows"), vec!["20"]);
        assert_eq!(values(&params, "facet.field"), vec!["format", "language_ssim"]);
        assert_eq!(values(&params, "f.format.facet.limit"), vec!["10"]);
        assert_eq!(values(&params, "fq"), vec!["{!term f=format}Book"]);
    }

    #[test]
    fn filters_on_unconfigured_fields_are_dropped() {
        let config = CatalogConfig::new("title_tsim").add_facet_field("format", "Format");
        let query = SearchQuery::from_query_string("f[format][]=Book&f[subject_ssim][]=Rome&f[x v=$y}][]=z");
        let params = build_search_params(&query, &config);
        assert_eq!(values(&params, "fq"), vec!["{!term f=format}Book"]);
    }

    #[test]
    fn blank_query_matches_everything() {
        let params = build_search_params(&SearchQuery { q: "  ".to_string(), ..Default::default() }, &CatalogConfig::new("title_tsim"));
        assert_eq!(values(&params, "q"), vec!["*:*"]);
        assert_eq!(values(&params, "start"), vec!["0"]);
        assert!(values(&params, "facet.field").is_empty());
    }

    #[test]
    fn document_params_request_more_like_this() {
        let params = build_document_params("2007020969", &CatalogConfig::default());
        assert_eq!(values(&params, "q"), vec!["{!term f=id}2007020969"]);
        assert_eq!(values(&params, "mlt"), vec!["true"]);
        assert_eq!(values(&params, "mlt.fl"), vec!["title_tsim,subject_ssim"]);

        let params = build_document_params("1", &CatalogConfig::new("title_tsim"));
        assert!(values(&params, "mlt").is_empty());
    }

    #[test]
    fn parses_select_response() {
        let raw: RawSolrResponse = serde_json::from_str(
            r#"{
                "responseHeader": {"status": 0, "QTime": 3, "params": {"rows": "10"}},
                "response": {"numFound": 2, "start": 0, "docs": [{"id": "123", "format": "Book"}]},
                "facet_counts": {"facet_queries": {}, "facet_fields": {"format": ["Book", 30, "Article", 12]}}
            }"#,
        )
        .unwrap();
        assert_eq!(raw.response.num_found, 2);
        assert_eq!(raw.response.docs[0].id, "123");
        assert_eq!(raw.facet_counts.unwrap().facet_fields["format"].len(), 4);
        assert!(raw.more_like_this.is_none());
    }

    #[test]
    fn solr_url_trailing_slash_is_ignored() {
        assert_eq!(SolrConfig::new("http://solr:8983/solr/core/").select_url(), "http://solr:8983/solr/core/select");
    }
}
