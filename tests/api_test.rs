use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use risk_catalog::server::create_server;
use risk_catalog::types::{Discipline, Scope};
use risk_catalog::Catalogue;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use tower::ServiceExt;

async fn get(uri: &str) -> Result<(StatusCode, Value)> {
    get_from(Catalogue::builtin(), uri).await
}

async fn get_from(catalogue: Catalogue, uri: &str) -> Result<(StatusCode, Value)> {
    let app = create_server(catalogue);
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty())?)
        .await?;
    let status = response.status();
    let bytes = hyper::body::to_bytes(response.into_body()).await?;
    Ok((status, serde_json::from_slice(&bytes)?))
}

#[tokio::test]
async fn root_returns_welcome_message() -> Result<()> {
    let (status, body) = get("/").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "message": "Welcome to the AI Risk Assessment API" })
    );
    Ok(())
}

#[tokio::test]
async fn health_reports_version() -> Result<()> {
    let (status, body) = get("/health").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    Ok(())
}

#[tokio::test]
async fn lists_scopes_in_order() -> Result<()> {
    let (status, body) = get("/scopes").await?;
    assert_eq!(status, StatusCode::OK);

    let scopes: Vec<Scope> = serde_json::from_value(body)?;
    let ids: Vec<i64> = scopes.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    Ok(())
}

#[tokio::test]
async fn gets_single_scope() -> Result<()> {
    let (status, body) = get("/scopes/4").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 4);
    assert_eq!(body["name"], "Fine-tuned Models");
    assert!(body["description"].is_string());
    assert!(body["example"].is_string());
    Ok(())
}

#[tokio::test]
async fn missing_scope_is_404_with_detail() -> Result<()> {
    for uri in ["/scopes/0", "/scopes/999", "/scopes/-3"] {
        let (status, body) = get(uri).await?;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({ "detail": "Scope not found" }));
    }
    Ok(())
}

#[tokio::test]
async fn non_integer_scope_is_rejected_before_lookup() -> Result<()> {
    let (status, body) = get("/scopes/one").await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());

    let (status, _) = get("/recommendations/abc/governance").await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[tokio::test]
async fn integer_beyond_i64_is_scope_not_found() -> Result<()> {
    let (status, body) = get("/scopes/99999999999999999999").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Scope not found" }));

    let (status, body) = get("/recommendations/99999999999999999999/governance").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Scope not found" }));

    let (status, body) = get("/recommendations/-99999999999999999999/nonexistent").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Scope not found");
    Ok(())
}

#[tokio::test]
async fn lists_and_gets_disciplines() -> Result<()> {
    let (status, body) = get("/disciplines").await?;
    assert_eq!(status, StatusCode::OK);
    let disciplines: Vec<Discipline> = serde_json::from_value(body)?;
    let ids: Vec<&str> = disciplines.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["governance", "legal", "risk", "controls", "resilience"]);

    let (status, body) = get("/disciplines/legal").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Legal & Privacy");
    assert_eq!(body["considerations"].as_object().map(|m| m.len()), Some(5));
    Ok(())
}

#[tokio::test]
async fn discipline_lookup_is_case_sensitive() -> Result<()> {
    let (status, body) = get("/disciplines/Governance").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Discipline not found" }));
    Ok(())
}

#[tokio::test]
async fn recommendation_combines_scope_and_discipline() -> Result<()> {
    let (status, body) = get("/recommendations/1/governance").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["scope"]["id"], 1);
    assert_eq!(body["discipline"]["id"], "governance");
    assert_eq!(
        body["recommendation"],
        "Review terms of service and licensing agreements. Create policies prohibiting use of PII or confidential data. Implement user training on appropriate AI usage."
    );
    Ok(())
}

#[tokio::test]
async fn recommendation_errors_check_scope_first() -> Result<()> {
    let (status, body) = get("/recommendations/999/governance").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Scope not found");

    let (_, body) = get("/recommendations/999/nonexistent").await?;
    assert_eq!(body["detail"], "Scope not found");

    let (status, body) = get("/recommendations/1/nonexistent").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Discipline not found");
    Ok(())
}

#[tokio::test]
async fn recommendation_falls_back_when_consideration_missing() -> Result<()> {
    let scope = |id: i64| Scope {
        id,
        name: format!("Scope {id}"),
        description: "desc".to_string(),
        example: "example".to_string(),
    };
    let discipline = Discipline {
        id: "controls".to_string(),
        name: "Controls".to_string(),
        description: "desc".to_string(),
        considerations: BTreeMap::from([("1".to_string(), "Use DLP.".to_string())]),
    };
    let catalogue = Catalogue::new(vec![scope(1), scope(2)], vec![discipline])?;

    let (status, body) = get_from(catalogue, "/recommendations/2/controls").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["recommendation"],
        "No specific recommendation available for this combination."
    );
    Ok(())
}

#[tokio::test]
async fn unknown_route_is_404() -> Result<()> {
    let (status, body) = get("/matrix").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Not Found");
    Ok(())
}

#[tokio::test]
async fn allows_any_origin() -> Result<()> {
    let app = create_server(Catalogue::builtin());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/scopes")
                .header(header::ORIGIN, "https://frontend.example")
                .body(Body::empty())?,
        )
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&header::HeaderValue::from_static("*"))
    );
    Ok(())
}
