use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use writesonic_client::{WritesonicClient, WritesonicError};
use writesonic_core::{
    BlogIdeas, Engine, Generated, GenerationSettings, LandingPageRequest, Pas,
};

fn client_for(server: &MockServer) -> WritesonicClient {
    WritesonicClient::builder("test-key")
        .base_url(server.uri())
        .build()
        .unwrap()
}

fn blog_request() -> BlogIdeas {
    BlogIdeas {
        topic: "sustainable fashion".to_string(),
        primary_keyword: None,
    }
}

#[tokio::test]
async fn test_blog_ideas_sends_headers_query_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/blog-ideas"))
        .and(query_param("engine", "good"))
        .and(query_param("language", "en"))
        .and(query_param("num_copies", "1"))
        .and(header("X-API-Key", "test-key"))
        .and(header("Content-Type", "application/json"))
        .and(header("Accept", "application/json"))
        .and(body_json(json!({ "topic": "sustainable fashion" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "text": "Idea A" }, { "text": "Idea B" }])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let results = client_for(&server)
        .blog()
        .ideas(&GenerationSettings::default(), &blog_request())
        .await
        .unwrap();

    let texts: Vec<&str> = results.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, ["Idea A", "Idea B"]);
}

#[tokio::test]
async fn test_settings_become_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/pas"))
        .and(query_param("engine", "premium"))
        .and(query_param("language", "fr"))
        .and(query_param("num_copies", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "text": "copy" }])))
        .expect(1)
        .mount(&server)
        .await;

    let request = Pas {
        product_name: "Acme".into(),
        product_description: "Project management".into(),
    };
    let settings = GenerationSettings::new(Engine::Premium, "fr", 3);
    let results = client_for(&server).copy().pas(&settings, &request).await.unwrap();
    assert_eq!(results.len(), 1);
}

#[tokio::test]
async fn test_generate_landing_page_uses_landing_decoder() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/landing-pages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "title": "Acme SaaS",
            "subtitle": "Work together",
            "cta": "Try it",
            "button": "Start"
        }])))
        .mount(&server)
        .await;

    let request = LandingPageRequest {
        product_name: "Acme SaaS".into(),
        product_description: "Project management tool".into(),
        feature_1: "Task tracking".into(),
        feature_2: "Team collaboration".into(),
        feature_3: "Analytics".into(),
    };

    let generated = client_for(&server)
        .generate(&GenerationSettings::default(), &request)
        .await
        .unwrap();

    match generated {
        Generated::LandingPages(pages) => {
            assert_eq!(pages.len(), 1);
            assert_eq!(pages[0].title, "Acme SaaS");
            assert_eq!(pages[0].main_feature_title, "");
        }
        Generated::Text(_) => panic!("expected landing pages"),
    }
}

#[tokio::test]
async fn test_validation_error_surfaces_first_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/blog-ideas"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [{
                "loc": ["body", "topic"],
                "msg": "field required",
                "type": "value_error.missing"
            }]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .blog()
        .ideas(&GenerationSettings::default(), &blog_request())
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err.to_string(), "field required");
}

#[tokio::test]
async fn test_empty_validation_detail_is_generic_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(422).set_body_string(r#"{"detail":[]}"#))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .blog()
        .ideas(&GenerationSettings::default(), &blog_request())
        .await
        .unwrap_err();

    match err {
        WritesonicError::Api { code, message } => {
            assert_eq!(code, 422);
            assert_eq!(message, r#"{"detail":[]}"#);
        }
        other => panic!("expected generic API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_embeds_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .blog()
        .ideas(&GenerationSettings::default(), &blog_request())
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(503));
    assert_eq!(err.to_string(), "API error (503): maintenance");
}

#[tokio::test]
async fn test_non_200_success_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_string("[]"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .blog()
        .ideas(&GenerationSettings::default(), &blog_request())
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(201));
}

#[tokio::test]
async fn test_wrong_shape_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": "not a list" })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .blog()
        .ideas(&GenerationSettings::default(), &blog_request())
        .await
        .unwrap_err();

    assert!(matches!(err, WritesonicError::Decode(_)));
}

#[tokio::test]
async fn test_post_raw_without_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/anything"))
        .and(query_param("num_copies", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let raw = client_for(&server)
        .post_raw::<()>("/anything", &GenerationSettings::default(), None)
        .await
        .unwrap();
    assert_eq!(raw, b"[]");

    let received = server.received_requests().await.unwrap();
    assert!(received[0].body.is_empty());
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = WritesonicClient::builder("test-key")
        .base_url(format!("http://127.0.0.1:{port}"))
        .build()
        .unwrap();

    let err = client
        .blog()
        .ideas(&GenerationSettings::default(), &blog_request())
        .await
        .unwrap_err();

    assert!(err.is_transport(), "unexpected error: {err:?}");
}
