//! End-to-end tests against a served gate.

use blockpath::rules::Rule;
use reqwest::StatusCode;

mod common;

async fn get(server: &common::TestServer, path: &str) -> (StatusCode, String) {
    let res = common::client()
        .get(server.url(path))
        .send()
        .await
        .expect("server unreachable");
    let status = res.status();
    (status, res.text().await.unwrap())
}

#[tokio::test]
async fn test_blocks_with_configured_status() {
    let server = common::start_server(vec![Rule::new("/test", Some(403))]).await;
    assert_eq!(get(&server, "/test").await, (StatusCode::FORBIDDEN, String::new()));
}

#[tokio::test]
async fn test_second_rule_matches() {
    let server = common::start_server(vec![
        Rule::new("/test", Some(403)),
        Rule::new("/toto", Some(403)),
    ])
    .await;

    assert_eq!(get(&server, "/toto").await.0, StatusCode::FORBIDDEN);
    assert_eq!(get(&server, "/plop").await, (StatusCode::OK, "/plop".to_string()));
}

#[tokio::test]
async fn test_not_found_has_body() {
    let server = common::start_server(vec![
        Rule::new("/test", Some(404)),
        Rule::new("/toto", Some(404)),
    ])
    .await;

    assert_eq!(
        get(&server, "/test").await,
        (StatusCode::NOT_FOUND, "404 page not found".to_string())
    );
}

#[tokio::test]
async fn test_no_rules_forwards() {
    let server = common::start_server(Vec::new()).await;
    assert_eq!(get(&server, "/test").await, (StatusCode::OK, "/test".to_string()));
}

#[tokio::test]
async fn test_default_status() {
    let server = common::start_server(vec![Rule::new("/foo", None)]).await;
    assert_eq!(get(&server, "/foo").await.0, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_anchored_pattern() {
    let server = common::start_server(vec![Rule::new("^/bar(.*)", Some(403))]).await;

    assert_eq!(get(&server, "/bar/foo").await.0, StatusCode::FORBIDDEN);
    assert_eq!(get(&server, "/foo/bar").await, (StatusCode::OK, "/foo/bar".to_string()));
}

#[tokio::test]
async fn test_escaped_path_reaches_rules() {
    let server = common::start_server(vec![Rule::new("my%20doc", Some(400))]).await;
    assert_eq!(get(&server, "/files/my%20doc").await.0, StatusCode::BAD_REQUEST);
    assert_eq!(
        get(&server, "/files/my-doc").await,
        (StatusCode::OK, "/files/my-doc".to_string())
    );
}

#[tokio::test]
async fn test_concurrent_requests() {
    let server = common::start_server(vec![Rule::new("^/private", Some(403))]).await;
    let client = common::client();

    let mut handles = Vec::new();
    for i in 0..20 {
        let client = client.clone();
        let path = if i % 2 == 0 { "/private/x" } else { "/public/x" };
        let url = server.url(path);
        handles.push(tokio::spawn(async move {
            (i, client.get(url).send().await.unwrap().status())
        }));
    }

    for handle in handles {
        let (i, status) = handle.await.unwrap();
        let expected = if i % 2 == 0 { StatusCode::FORBIDDEN } else { StatusCode::OK };
        assert_eq!(status, expected);
    }
}
