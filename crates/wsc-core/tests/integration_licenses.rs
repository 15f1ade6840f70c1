//! Integration test: license pass against a local stand-in for the GitHub API.

mod common;

use wsc_core::license::{enrich, GitHubClient, LicenseError, LicenseSource};
use wsc_core::project::{decode_projects, write_projects_json, Project};

fn project(name: &str, source: &str, license: &str) -> Project {
    Project {
        name: name.to_string(),
        source: vec![source.to_string()],
        license: license.to_string(),
        ..Project::default()
    }
}

#[test]
fn client_resolves_spdx_noassertion_and_not_found() {
    let server = common::license_server::start(&[
        (
            "/repos/o/mit/license",
            "200 OK",
            r#"{"name":"LICENSE","license":{"key":"mit","spdx_id":"MIT"}}"#,
        ),
        (
            "/repos/o/custom/license",
            "200 OK",
            r#"{"license":{"key":"other","spdx_id":"NOASSERTION"}}"#,
        ),
    ]);
    let client = GitHubClient::new(server.base_url.clone(), None);

    assert_eq!(client.license("o/mit").unwrap(), "MIT");
    assert_eq!(client.license("o/custom").unwrap(), "other");
    assert_eq!(client.license("o/gone").unwrap(), "not found");
    assert_eq!(
        server.paths(),
        vec![
            "/repos/o/mit/license",
            "/repos/o/custom/license",
            "/repos/o/gone/license"
        ]
    );
}

#[test]
fn client_sends_accept_and_token() {
    let server = common::license_server::start(&[(
        "/repos/o/r/license",
        "200 OK",
        r#"{"license":{"spdx_id":"Unlicense"}}"#,
    )]);

    let anon = GitHubClient::new(server.base_url.clone(), None);
    anon.license("o/r").unwrap();
    let authed = GitHubClient::new(server.base_url.clone(), Some("s3cret".to_string()));
    authed.license("o/r").unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(
        requests[0].header("Accept"),
        Some("application/vnd.github.v3+json")
    );
    assert!(requests[0].header("Authorization").is_none());
    assert!(requests[0].header("User-Agent").is_some());
    assert_eq!(requests[1].header("Authorization"), Some("token s3cret"));
}

#[test]
fn client_reports_unexpected_message_and_bad_body() {
    let server = common::license_server::start(&[
        (
            "/repos/o/limited/license",
            "403 Forbidden",
            r#"{"message":"API rate limit exceeded"}"#,
        ),
        ("/repos/o/html/license", "200 OK", "<html>oops</html>"),
    ]);
    let client = GitHubClient::new(server.base_url.clone(), None);

    match client.license("o/limited") {
        Err(LicenseError::Message(msg)) => assert_eq!(msg, "API rate limit exceeded"),
        other => panic!("expected message error, got {other:?}"),
    }
    assert!(matches!(
        client.license("o/html"),
        Err(LicenseError::Decode { .. })
    ));
}

#[test]
fn client_transport_error_when_unreachable() {
    // Bind then drop to get a port nothing listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = GitHubClient::new(format!("http://127.0.0.1:{port}"), None);
    assert!(matches!(
        client.license("o/r"),
        Err(LicenseError::Transport { .. })
    ));
}

#[test]
fn enrich_pass_end_to_end() {
    let server = common::license_server::start(&[
        (
            "/repos/o/a/license",
            "200 OK",
            r#"{"license":{"spdx_id":"MIT"}}"#,
        ),
        (
            "/repos/o/b/license",
            "403 Forbidden",
            r#"{"message":"API rate limit exceeded"}"#,
        ),
        (
            "/repos/o/c/license",
            "200 OK",
            r#"{"license":{"spdx_id":"GPL-2.0"}}"#,
        ),
    ]);
    let client = GitHubClient::new(server.base_url.clone(), None);
    let projects = vec![
        project("licensed", "https://github.com/o/licensed", "Apache-2.0"),
        project("a", "https://github.com/o/a", ""),
        project("blog", "https://example.blogspot.com/", ""),
        project("b", "https://github.com/o/b", ""),
        project("c", "https://github.com/o/c", ""),
    ];

    let outcome = enrich(projects, &client, None);

    // The licensed project and the non-GitHub one are never queried; the pass stops at o/b.
    assert_eq!(
        server.paths(),
        vec!["/repos/o/a/license", "/repos/o/b/license"]
    );
    assert_eq!(outcome.updated, 1);
    assert_eq!(outcome.error.as_ref().map(|e| e.index), Some(3));

    let mut out = Vec::new();
    write_projects_json(&mut out, &outcome.projects).unwrap();
    let reread = decode_projects(&out).unwrap();
    let licenses: Vec<&str> = reread.iter().map(|p| p.license.as_str()).collect();
    assert_eq!(licenses, vec!["Apache-2.0", "MIT", "", "", ""]);
}
