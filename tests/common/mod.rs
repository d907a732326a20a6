//! Shared test harness for integration tests.
//!
//! Provides [`MockApi`], a wiremock server that answers like the NASA Image
//! and Video Library, plus JSON builders for its three endpoints.

#![allow(dead_code)]

use std::sync::Arc;

use nasaview::api::{MediaSource, NasaClient};
use nasaview::config::{ApiConfig, Config, LookupMode};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A search hit as the API returns it.
pub fn search_item(nasa_id: &str, title: &str, media_type: &str) -> Value {
    json!({
        "href": format!("https://images-assets.nasa.gov/{media_type}/{nasa_id}/collection.json"),
        "data": [{
            "nasa_id": nasa_id,
            "title": title,
            "media_type": media_type,
            "center": "JSC",
            "date_created": "1969-07-20T00:00:00Z"
        }],
        "links": [{
            "href": format!("https://images-assets.nasa.gov/{media_type}/{nasa_id}/{nasa_id}~thumb.jpg"),
            "rel": "preview",
            "render": "image"
        }]
    })
}

/// Wrap items in the `collection` envelope.
pub fn collection(items: Vec<Value>) -> Value {
    json!({
        "collection": {
            "version": "1.0",
            "href": "https://images-api.nasa.gov/search",
            "items": items,
            "metadata": { "total_hits": 0 }
        }
    })
}

/// Metadata lookup response for one asset.
pub fn metadata(nasa_id: &str, title: &str, description: &str) -> Value {
    collection(vec![json!({
        "data": [{
            "nasa_id": nasa_id,
            "title": title,
            "description": description,
            "date_created": "1972-12-07T00:00:00Z",
            "media_type": "image"
        }]
    })])
}

/// Manifest response listing `hrefs`.
pub fn manifest(hrefs: &[&str]) -> Value {
    collection(hrefs.iter().map(|h| json!({ "href": h })).collect())
}

pub struct MockApi {
    pub server: MockServer,
}

impl MockApi {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.api.base_url = self.base_url();
        config.view.settle_delay_ms = 0;
        config
    }

    pub fn client(&self) -> Arc<dyn MediaSource> {
        self.client_with(LookupMode::Sequential)
    }

    pub fn client_with(&self, lookup: LookupMode) -> Arc<dyn MediaSource> {
        Arc::new(NasaClient::new(&ApiConfig {
            base_url: self.base_url(),
            lookup,
            ..ApiConfig::default()
        }))
    }

    /// Answer `/search?q=<query>&media_type=<filter>` with `body`.
    pub async fn search(&self, query: &str, filter: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", query))
            .and(query_param("media_type", filter))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Answer `/search?nasa_id=<id>` with `body`.
    pub async fn metadata(&self, nasa_id: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("nasa_id", nasa_id))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answer `/asset/<id>` with `body`.
    pub async fn manifest(&self, nasa_id: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/asset/{nasa_id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answer every request to `route` with a bare status code.
    pub async fn fail(&self, route: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_string("upstream exploded"))
            .mount(&self.server)
            .await;
    }
}
