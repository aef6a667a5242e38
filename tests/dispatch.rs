//! Dispatcher + renderer against a live local server.

mod common;

use bibi_tui::{render, Config, ContentKind, DispatchError, Dispatcher, HttpMethod};

fn dispatcher(timeout_secs: u64) -> Dispatcher {
    let config = Config {
        request_timeout_secs: timeout_secs,
        ..Config::default()
    };
    Dispatcher::new(&config).unwrap()
}

#[tokio::test]
async fn every_method_gets_a_status_code() {
    let base = common::spawn_server().await;
    let dispatcher = dispatcher(5);

    for method in HttpMethod::ALL {
        let resp = dispatcher
            .send_parts(&format!("{base}/echo"), method, None)
            .await
            .unwrap();
        assert!((100..=599).contains(&resp.status_code), "{method}");
        assert_eq!(resp.body, format!("{method} "));
    }
}

#[tokio::test]
async fn body_sent_only_for_post_and_put() {
    let base = common::spawn_server().await;
    let dispatcher = dispatcher(5);
    let url = format!("{base}/echo");

    let cases = [
        (HttpMethod::GET, "GET "),
        (HttpMethod::POST, "POST raw=1"),
        (HttpMethod::PUT, "PUT raw=1"),
        (HttpMethod::DELETE, "DELETE "),
    ];
    for (method, expected) in cases {
        let resp = dispatcher
            .send_parts(&url, method, Some("raw=1"))
            .await
            .unwrap();
        assert_eq!(resp.body, expected);
    }
}

#[tokio::test]
async fn json_scenario_renders_two_space_indent() {
    let base = common::spawn_server().await;
    let resp = dispatcher(5)
        .send_parts(&format!("{base}/json"), HttpMethod::GET, None)
        .await
        .unwrap();

    let model = render(&resp);
    assert_eq!(model.status_line, "200");
    assert_eq!(model.kind, ContentKind::Json);
    assert_eq!(model.body_block, "{\n  \"a\": 1,\n  \"b\": 2\n}");
}

#[tokio::test]
async fn repeated_headers_keep_wire_order() {
    let base = common::spawn_server().await;
    let resp = dispatcher(5)
        .send_parts(&format!("{base}/headers"), HttpMethod::GET, None)
        .await
        .unwrap();

    let model = render(&resp);
    let ours: Vec<(&str, &str)> = model
        .header_rows
        .iter()
        .filter(|(name, _)| name == "content-type" || name == "x-custom")
        .map(|(n, v)| (n.as_str(), v.as_str()))
        .collect();
    assert_eq!(
        ours,
        vec![
            ("content-type", "application/json"),
            ("x-custom", "1"),
            ("x-custom", "2"),
        ]
    );
}

#[tokio::test]
async fn declared_json_with_bad_body_degrades() {
    let base = common::spawn_server().await;
    let resp = dispatcher(5)
        .send_parts(&format!("{base}/broken"), HttpMethod::GET, None)
        .await
        .unwrap();

    let model = render(&resp);
    assert_eq!(model.body_block, "not json");
    assert!(model.note.is_some());
}

#[tokio::test]
async fn html_is_prettified() {
    let base = common::spawn_server().await;
    let resp = dispatcher(5)
        .send_parts(&format!("{base}/page"), HttpMethod::GET, None)
        .await
        .unwrap();

    let model = render(&resp);
    assert_eq!(model.kind, ContentKind::Html);
    assert!(model.body_block.contains(" <body>\n  <p>\n   hi\n  </p>\n </body>"));
}

#[tokio::test]
async fn timeout_is_a_transport_error() {
    let base = common::spawn_server().await;
    let err = dispatcher(1)
        .send_parts(&format!("{base}/slow"), HttpMethod::GET, None)
        .await
        .unwrap_err();
    assert!(matches!(err, DispatchError::Timeout(1)), "{err:?}");
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = dispatcher(5)
        .send_parts(&format!("http://{addr}/"), HttpMethod::GET, None)
        .await
        .unwrap_err();
    assert!(matches!(err, DispatchError::Connect(_)), "{err:?}");
}

#[tokio::test]
async fn malformed_url_is_rejected() {
    let err = dispatcher(5)
        .send_parts("http://", HttpMethod::GET, None)
        .await
        .unwrap_err();
    assert!(matches!(err, DispatchError::InvalidUrl { .. }), "{err:?}");
}
