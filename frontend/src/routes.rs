use dioxus::prelude::*;

use common::search_query::SearchQuery;
use crate::components::navbar::Navbar;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::home_page::HomePage;
use crate::pages::search_page::SearchPage;
use crate::pages::show_page::ShowPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    HomePage {},

    #[route("/search/:query")]
    SearchPage { query: UrlParam<SearchQuery> },

    #[route("/catalog/:id")]
    ShowPage { id: String },
}

impl Route {
    pub fn search_page_from_query(q: SearchQuery) -> Self {
        Self::SearchPage { query: UrlParam::from(q) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_render_and_parse() {
        assert_eq!(Route::ShowPage { id: "2007020969".to_string() }.to_string(), "/catalog/2007020969");

        let query = SearchQuery::from_query_string("q=rome&f[format][]=Book");
        let path = Route::search_page_from_query(query.clone()).to_string();
        assert!(path.starts_with("/search/"));
        let parsed: Route = path.parse().unwrap();
        assert_eq!(parsed, Route::search_page_from_query(query));
    }
}
