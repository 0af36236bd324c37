//! Integration tests for the catalog client against a local mock server.

use httptest::{all_of, matchers::*, responders::*, Expectation, Server};
use serde_json::json;

use itunes_search::{Client, ClientError, LookupKey, LookupOptions, SearchOptions};

fn catalog_body(count: u64) -> serde_json::Value {
    json!({
        "resultCount": count,
        "results": (0..count).map(|i| json!({"trackId": i})).collect::<Vec<_>>(),
    })
}

fn test_client(server: &Server) -> Client {
    Client::with_base_url(server.url_str("/")).expect("Failed to create test client")
}

#[tokio::test]
async fn test_search_sends_default_parameters() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/search"),
            request::query(url_decoded(contains(("country", "us")))),
            request::query(url_decoded(contains(("term", "abc")))),
            request::query(url_decoded(contains(("explicit", "No")))),
        ])
        .respond_with(json_encoded(catalog_body(1))),
    );

    let client = test_client(&server);
    let response = client
        .search("abc", &SearchOptions::default())
        .await
        .expect("search should succeed");

    assert_eq!(response.result_count, 1);
    assert_eq!(response.results.len(), 1);
}

#[tokio::test]
async fn test_search_explicit_true_sends_yes() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/search"),
            request::query(url_decoded(contains(("explicit", "Yes")))),
        ])
        .respond_with(json_encoded(catalog_body(0))),
    );

    let client = test_client(&server);
    let options = SearchOptions {
        explicit: true,
        ..Default::default()
    };
    client
        .search("abc", &options)
        .await
        .expect("search should succeed");
}

#[tokio::test]
async fn test_search_options_override_defaults() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/search"),
            request::query(url_decoded(contains(("country", "gb")))),
            request::query(url_decoded(contains(("media", "music")))),
            request::query(url_decoded(contains(("limit", "5")))),
        ])
        .respond_with(json_encoded(catalog_body(0))),
    );

    let client = test_client(&server);
    let options = SearchOptions {
        country: Some("gb".to_string()),
        media: Some("music".to_string()),
        limit: Some(5),
        ..Default::default()
    };
    client
        .search("abc", &options)
        .await
        .expect("search should succeed");
}

#[tokio::test]
async fn test_search_term_is_form_encoded() {
    let server = Server::run();
    // Spaces must be encoded as '+' on the wire, not '%20'
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/search"),
            request::query(matches("(^|&)term=the\\+beatles($|&)")),
        ])
        .respond_with(json_encoded(catalog_body(0))),
    );

    let client = test_client(&server);
    client
        .search("the beatles", &SearchOptions::default())
        .await
        .expect("search should succeed");
}

#[tokio::test]
async fn test_search_empty_term_is_passed_through() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/search"),
            request::query(url_decoded(contains(("term", "")))),
        ])
        .respond_with(json_encoded(catalog_body(0))),
    );

    let client = test_client(&server);
    client
        .search("", &SearchOptions::default())
        .await
        .expect("search should succeed");
}

#[tokio::test]
async fn test_lookup_by_id() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/lookup"),
            request::query(url_decoded(contains(("id", "294")))),
            request::query(url_decoded(contains(("country", "us")))),
        ])
        .respond_with(json_encoded(catalog_body(1))),
    );

    let client = test_client(&server);
    let response = client
        .lookup(&LookupKey::Id(294), &LookupOptions::default())
        .await
        .expect("lookup should succeed");

    assert_eq!(response.result_count, 1);
}

#[tokio::test]
async fn test_lookup_by_url_resolves_track_and_country() {
    let server = Server::run();
    // The track id wins over the album id, and the URL's country overrides
    // the caller-supplied option
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/lookup"),
            request::query(url_decoded(contains(("id", "1440829199")))),
            request::query(url_decoded(contains(("country", "gb")))),
        ])
        .respond_with(json_encoded(catalog_body(1))),
    );

    let client = test_client(&server);
    let key = LookupKey::Url(
        "https://music.apple.com/gb/album/abbey-road/1440829196?i=1440829199".to_string(),
    );
    let options = LookupOptions {
        country: Some("de".to_string()),
        ..Default::default()
    };
    client
        .lookup(&key, &options)
        .await
        .expect("lookup should succeed");
}

#[tokio::test]
async fn test_lookup_unrecognized_url_sends_defaults_only() {
    let server = Server::run();
    // The request still goes out, with no id parameter at all
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/lookup"),
            request::query(url_decoded(contains(("country", "us")))),
            request::query(url_decoded(not(contains(key("id"))))),
        ])
        .respond_with(json_encoded(catalog_body(0))),
    );

    let client = test_client(&server);
    let key = LookupKey::Url("https://example.com/not/a/store/url".to_string());
    let response = client
        .lookup(&key, &LookupOptions::default())
        .await
        .expect("lookup should succeed");

    assert_eq!(response.result_count, 0);
}

#[tokio::test]
async fn test_non_success_status_surfaces_as_request_failed() {
    let server = Server::run();
    // The body is deliberately not JSON: it must not be parsed on failure
    server.expect(
        Expectation::matching(request::method_path("GET", "/lookup"))
            .respond_with(status_code(404).body("plain text, not json")),
    );

    let client = test_client(&server);
    let err = client
        .lookup(&LookupKey::Id(1), &LookupOptions::default())
        .await
        .expect_err("lookup should fail");

    match &err {
        ClientError::RequestFailed { status } => {
            assert_eq!(status.as_u16(), 404);
            assert!(err.to_string().contains("Not Found"), "got: {}", err);
        }
        other => panic!("Expected RequestFailed, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_surfaces_as_request_failed() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/search"))
            .respond_with(status_code(500).body("Internal Server Error")),
    );

    let client = test_client(&server);
    let err = client
        .search("abc", &SearchOptions::default())
        .await
        .expect_err("search should fail");

    assert!(
        matches!(&err, ClientError::RequestFailed { status } if status.as_u16() == 500),
        "Expected RequestFailed(500), got: {:?}",
        err
    );
}

#[tokio::test]
async fn test_undecodable_body_surfaces_as_transport_error() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/search"))
            .respond_with(status_code(200).body("this is not json")),
    );

    let client = test_client(&server);
    let err = client
        .search("abc", &SearchOptions::default())
        .await
        .expect_err("search should fail");

    assert!(
        matches!(&err, ClientError::Transport(_)),
        "Expected Transport, got: {:?}",
        err
    );
}

#[tokio::test]
async fn test_connection_error_surfaces_as_transport_error() {
    // Port 1 is guaranteed closed: connection refused
    let client = Client::with_base_url("http://127.0.0.1:1").expect("Failed to create client");

    let err = client
        .search("abc", &SearchOptions::default())
        .await
        .expect_err("search should fail");

    assert!(
        matches!(&err, ClientError::Transport(_)),
        "Expected Transport, got: {:?}",
        err
    );
}

#[tokio::test]
async fn test_results_are_returned_verbatim() {
    let server = Server::run();
    let body = json!({
        "resultCount": 1,
        "results": [{
            "wrapperType": "track",
            "trackId": 1440829199u64,
            "trackName": "Here Comes the Sun",
            "unknownField": {"nested": true},
        }],
    });
    server.expect(
        Expectation::matching(request::method_path("GET", "/lookup"))
            .respond_with(json_encoded(body)),
    );

    let client = test_client(&server);
    let response = client
        .lookup(&LookupKey::Id(1440829199), &LookupOptions::default())
        .await
        .expect("lookup should succeed");

    assert_eq!(response.result_count, 1);
    assert_eq!(response.results[0]["trackName"], "Here Comes the Sun");
    // No post-processing: undocumented fields survive untouched
    assert_eq!(response.results[0]["unknownField"]["nested"], true);
}
