// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Integration tests for request execution against a mock Brave Search server.
//!
//! Tests cover:
//! - Headers and query string sent upstream
//! - Success, error-status and transport-failure outcomes
//! - No retries on failure
//! - Concurrent calls on one client

use std::time::Duration;

use brave_search::{
	BraveError, ClientConfig, Endpoints, SearchClient, SpellcheckOptions, SuggestOptions,
	WebSearchOptions,
};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WEB_PATH: &str = "/res/v1/web/search";
const SUGGEST_PATH: &str = "/res/v1/suggest/search";
const SPELLCHECK_PATH: &str = "/res/v1/spellcheck/search";

fn client_for(server: &MockServer) -> SearchClient {
	let config =
		ClientConfig::new("test-key").with_endpoints(Endpoints::with_origin(&server.uri()));
	SearchClient::from_config(config).unwrap()
}

#[tokio::test]
async fn search_sends_headers_and_returns_body() {
	let server = MockServer::start().await;
	let body = json!({ "type": "search", "web": { "results": [{ "title": "Giant panda" }] } });

	Mock::given(method("GET"))
		.and(path(WEB_PATH))
		.and(query_param("q", "panda"))
		.and(header("accept", "application/json"))
		.and(header("accept-encoding", "gzip"))
		.and(header("x-subscription-token", "test-key"))
		.respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
		.expect(1)
		.mount(&server)
		.await;

	let result = client_for(&server)
		.search("panda", &WebSearchOptions::new())
		.await
		.unwrap();

	assert_eq!(result, body);
}

#[tokio::test]
async fn search_passes_only_supplied_options() {
	let server = MockServer::start().await;

	Mock::given(method("GET"))
		.and(path(WEB_PATH))
		.and(query_param("q", "cat"))
		.and(query_param("country", "jp"))
		.and(query_param("count", "5"))
		.and(query_param_is_missing("search_lang"))
		.and(query_param_is_missing("offset"))
		.and(query_param_is_missing("result_filter"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
		.expect(1)
		.mount(&server)
		.await;

	let options = WebSearchOptions::new().with_country("jp").with_size(5);
	let result = client_for(&server).search("cat", &options).await.unwrap();

	assert_eq!(result, json!({}));
}

#[tokio::test]
async fn reserved_characters_reach_server_intact() {
	let server = MockServer::start().await;

	Mock::given(method("GET"))
		.and(path(WEB_PATH))
		.and(query_param("q", "a&b=c? d"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
		.expect(1)
		.mount(&server)
		.await;

	let result = client_for(&server)
		.search("a&b=c? d", &WebSearchOptions::new())
		.await
		.unwrap();

	assert_eq!(result["ok"], json!(true));
}

#[tokio::test]
async fn forbidden_status_is_reported_without_retry() {
	let server = MockServer::start().await;

	Mock::given(method("GET"))
		.and(path(WEB_PATH))
		.respond_with(ResponseTemplate::new(403).set_body_string("invalid token"))
		.expect(1)
		.mount(&server)
		.await;

	let err = client_for(&server)
		.search("panda", &WebSearchOptions::new())
		.await
		.unwrap_err();

	assert_eq!(err.to_string(), "403: Forbidden");
	assert_eq!(err.status(), Some(403));
	assert!(!err.is_transport());
}

#[tokio::test]
async fn server_error_is_not_retried() {
	let server = MockServer::start().await;

	Mock::given(method("GET"))
		.and(path(SUGGEST_PATH))
		.respond_with(ResponseTemplate::new(503))
		.expect(1)
		.mount(&server)
		.await;

	let err = client_for(&server)
		.suggest("hel", &SuggestOptions::new())
		.await
		.unwrap_err();

	assert_eq!(err.to_string(), "503: Service Unavailable");
}

#[tokio::test]
async fn connection_failure_keeps_underlying_message() {
	// Bind and drop to get a port nothing is listening on.
	let port = {
		let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
		listener.local_addr().unwrap().port()
	};
	let config = ClientConfig::new("test-key")
		.with_endpoints(Endpoints::with_origin(&format!("http://127.0.0.1:{port}")));
	let client = SearchClient::from_config(config).unwrap();

	let err = client
		.spellcheck("helo", &SpellcheckOptions::new())
		.await
		.unwrap_err();

	match &err {
		BraveError::Network(inner) => assert_eq!(err.to_string(), inner.to_string()),
		other => panic!("expected network error, got {other:?}"),
	}
	assert!(err.is_transport());
	assert_eq!(err.status(), None);
}

#[tokio::test]
async fn invalid_json_body_is_a_transport_error() {
	let server = MockServer::start().await;

	Mock::given(method("GET"))
		.and(path(WEB_PATH))
		.respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
		.expect(1)
		.mount(&server)
		.await;

	let err = client_for(&server)
		.search("panda", &WebSearchOptions::new())
		.await
		.unwrap_err();

	match &err {
		BraveError::InvalidResponse(inner) => assert_eq!(err.to_string(), inner.to_string()),
		other => panic!("expected parse error, got {other:?}"),
	}
	assert!(err.is_transport());
}

#[tokio::test]
async fn slow_response_hits_configured_timeout() {
	let server = MockServer::start().await;

	Mock::given(method("GET"))
		.and(path(WEB_PATH))
		.respond_with(
			ResponseTemplate::new(200)
				.set_body_json(json!({}))
				.set_delay(Duration::from_secs(2)),
		)
		.mount(&server)
		.await;

	let config = ClientConfig::new("test-key")
		.with_endpoints(Endpoints::with_origin(&server.uri()))
		.with_timeout(Duration::from_millis(100));
	let client = SearchClient::from_config(config).unwrap();

	let err = client
		.search("panda", &WebSearchOptions::new())
		.await
		.unwrap_err();

	match err {
		BraveError::Network(inner) => assert!(inner.is_timeout()),
		other => panic!("expected timeout, got {other:?}"),
	}
}

#[tokio::test]
async fn concurrent_calls_get_their_own_responses() {
	let server = MockServer::start().await;

	Mock::given(method("GET"))
		.and(path(WEB_PATH))
		.and(query_param("q", "rust"))
		.respond_with(
			ResponseTemplate::new(200)
				.set_body_json(json!({ "kind": "web" }))
				.set_delay(Duration::from_millis(50)),
		)
		.expect(1)
		.mount(&server)
		.await;

	Mock::given(method("GET"))
		.and(path(SUGGEST_PATH))
		.and(query_param("q", "ru"))
		.and(query_param("language", "en"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({ "kind": "suggest" })))
		.expect(1)
		.mount(&server)
		.await;

	Mock::given(method("GET"))
		.and(path(SPELLCHECK_PATH))
		.and(query_param("q", "rsut"))
		.respond_with(
			ResponseTemplate::new(200)
				.set_body_json(json!({ "kind": "spellcheck" }))
				.set_delay(Duration::from_millis(20)),
		)
		.expect(1)
		.mount(&server)
		.await;

	let client = client_for(&server);
	let web_options = WebSearchOptions::new();
	let suggest_options = SuggestOptions::new().with_language("en");
	let spellcheck_options = SpellcheckOptions::new();

	let (web, suggest, spellcheck) = tokio::join!(
		client.search("rust", &web_options),
		client.suggest("ru", &suggest_options),
		client.spellcheck("rsut", &spellcheck_options),
	);

	assert_eq!(web.unwrap(), json!({ "kind": "web" }));
	assert_eq!(suggest.unwrap(), json!({ "kind": "suggest" }));
	assert_eq!(spellcheck.unwrap(), json!({ "kind": "spellcheck" }));
}

#[tokio::test]
async fn cloned_clients_share_configuration() {
	let server = MockServer::start().await;

	Mock::given(method("GET"))
		.and(path(SPELLCHECK_PATH))
		.and(header("x-subscription-token", "test-key"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
		.expect(2)
		.mount(&server)
		.await;

	let client = client_for(&server);
	let cloned = client.clone();
	let options = SpellcheckOptions::new();

	let handle =
		tokio::spawn(async move { cloned.spellcheck("one", &SpellcheckOptions::new()).await });
	let local = client.spellcheck("two", &options).await;

	assert_eq!(local.unwrap(), json!([]));
	assert_eq!(handle.await.unwrap().unwrap(), json!([]));
}
