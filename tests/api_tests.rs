use std::collections::HashSet;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use mottu_api::config::EnvironmentConfig;
use mottu_api::create_app;
use mottu_api::state::AppState;

// Función helper para crear la app de test
fn create_test_app() -> Router {
    create_app(AppState::new(EnvironmentConfig::default()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_moto(app: &Router, placa: &str) -> Value {
    let response = send(
        app,
        Method::POST,
        "/motos",
        Some(json!({
            "placa": placa,
            "cor": "Verde",
            "status": "Pronta",
            "tempoLimite": 30
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

fn assert_links(entity: &Value, resource: &str) {
    let id = entity["id"].as_i64().unwrap();
    let href = format!("/{}/{}", resource, id);
    let links = entity["links"].as_object().unwrap();

    assert_eq!(links.len(), 3);
    for (rel, method) in [("self", "GET"), ("update", "PUT"), ("delete", "DELETE")] {
        assert_eq!(links[rel]["href"], href.as_str());
        assert_eq!(links[rel]["rel"], rel);
        assert_eq!(links[rel]["method"], method);
    }
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let response = send(&app, Method::GET, "/health", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_create_assigns_sequential_ids_per_collection() {
    let app = create_test_app();

    for expected in 1..=3 {
        let moto = create_moto(&app, &format!("ABC-000{expected}")).await;
        assert_eq!(moto["id"], expected);
    }

    // cada colección tiene su propio contador
    let response = send(
        &app,
        Method::POST,
        "/colaboradores",
        Some(json!({ "nome": "João", "cargo": "Mecânico" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["id"], 1);

    let response = send(
        &app,
        Method::POST,
        "/alertas",
        Some(json!({ "descricao": "Tempo excedido", "motoId": 2 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["id"], 1);
}

#[tokio::test]
async fn test_create_returns_location_and_entity() {
    let app = create_test_app();
    let response = send(
        &app,
        Method::POST,
        "/motos",
        Some(json!({
            "placa": "ABC-1234",
            "cor": "Verde",
            "status": "Pronta",
            "tempoLimite": 0
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[header::LOCATION], "/motos/1");

    let moto = body_json(response).await;
    assert_eq!(moto["placa"], "ABC-1234");
    assert_eq!(moto["cor"], "Verde");
    assert_eq!(moto["status"], "Pronta");
    assert_eq!(moto["tempoLimite"], 0);
    assert!(moto["dataEntrada"].is_string());
    assert_links(&moto, "motos");
}

#[tokio::test]
async fn test_create_with_missing_fields_is_bad_request() {
    let app = create_test_app();

    let response = send(&app, Method::POST, "/motos", Some(json!({ "placa": "ABC-1234" }))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, "Dados inválidos");

    let response = send(
        &app,
        Method::POST,
        "/colaboradores",
        Some(json!({ "nome": "", "cargo": "Mecânico" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, "Dados inválidos");

    // nada se insertó
    let response = send(&app, Method::GET, "/motos", None).await;
    assert_eq!(body_json(response).await["totalCount"], 0);
}

#[tokio::test]
async fn test_null_or_mistyped_fields_are_bad_request() {
    let app = create_test_app();

    let response = send(
        &app,
        Method::POST,
        "/motos",
        Some(json!({ "placa": null, "cor": "Verde", "status": "Pronta", "tempoLimite": 0 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, "Dados inválidos");

    let response = send(
        &app,
        Method::POST,
        "/colaboradores",
        Some(json!({ "nome": null, "cargo": "Mecânico" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, "Dados inválidos");

    let response = send(
        &app,
        Method::POST,
        "/alertas",
        Some(json!({ "descricao": "Tempo excedido", "motoId": null })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, "Dados inválidos ou moto não encontrada");

    // cuerpo que no es JSON
    let request = Request::builder()
        .method(Method::POST)
        .uri("/motos")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ placa"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, "Dados inválidos");

    let moto = create_moto(&app, "NUL-0001").await;
    let uri = format!("/motos/{}", moto["id"]);
    let response = send(&app, Method::PUT, &uri, Some(json!({ "cor": 5 }))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, "Dados inválidos");

    let response = send(&app, Method::GET, &uri, None).await;
    assert_eq!(body_json(response).await["cor"], "Verde");

    let response = send(&app, Method::GET, "/alertas", None).await;
    assert_eq!(body_json(response).await["totalCount"], 0);
}

#[tokio::test]
async fn test_get_unknown_ids_returns_portuguese_not_found() {
    let app = create_test_app();

    for (uri, message) in [
        ("/motos/1", "Moto não encontrada"),
        ("/colaboradores/1", "Colaborador não encontrado"),
        ("/alertas/1", "Alerta não encontrado"),
    ] {
        let response = send(&app, Method::GET, uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, message);
    }
}

#[tokio::test]
async fn test_deleted_id_is_gone_and_never_reused() {
    let app = create_test_app();
    create_moto(&app, "AAA-0001").await;
    create_moto(&app, "AAA-0002").await;

    let response = send(&app, Method::DELETE, "/motos/2", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(body_json(response).await, Value::Null);

    let response = send(&app, Method::GET, "/motos/2", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, Method::DELETE, "/motos/2", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, "Moto não encontrada");

    let moto = create_moto(&app, "AAA-0003").await;
    assert_eq!(moto["id"], 3);
}

#[tokio::test]
async fn test_list_empty_collection() {
    let app = create_test_app();
    let response = send(&app, Method::GET, "/motos?page=1&pageSize=10", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "data": [], "totalCount": 0, "page": 1, "pageSize": 10 })
    );
}

#[tokio::test]
async fn test_list_uses_defaults_without_query() {
    let app = create_test_app();
    let response = send(&app, Method::GET, "/colaboradores", None).await;

    let body = body_json(response).await;
    assert_eq!(body["page"], 1);
    assert_eq!(body["pageSize"], 10);
}

#[tokio::test]
async fn test_list_second_page_of_fifteen() {
    let app = create_test_app();
    for i in 1..=15 {
        create_moto(&app, &format!("MOT-{i:04}")).await;
    }

    let response = send(&app, Method::GET, "/motos?page=2&pageSize=10", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["totalCount"], 15);
    assert_eq!(body["page"], 2);
    assert_eq!(body["pageSize"], 10);

    let data = body["data"].as_array().unwrap();
    let ids: Vec<i64> = data.iter().map(|m| m["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![11, 12, 13, 14, 15]);
    for moto in data {
        assert_links(moto, "motos");
    }
}

#[tokio::test]
async fn test_list_with_non_positive_page_size_is_empty() {
    let app = create_test_app();
    create_moto(&app, "AAA-0001").await;

    for uri in ["/motos?pageSize=0", "/motos?page=2&pageSize=-3"] {
        let body = body_json(send(&app, Method::GET, uri, None).await).await;
        assert_eq!(body["data"], json!([]));
        assert_eq!(body["totalCount"], 1);
    }

    // página 0: el desplazamiento negativo no salta nada
    let body = body_json(send(&app, Method::GET, "/motos?page=0", None).await).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["page"], 0);
}

#[tokio::test]
async fn test_list_page_size_is_not_clamped_by_default() {
    let app = create_test_app();
    for i in 1..=60 {
        create_moto(&app, &format!("MOT-{i:04}")).await;
    }

    let body = body_json(send(&app, Method::GET, "/motos?pageSize=100", None).await).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 60);
    assert_eq!(body["pageSize"], 100);
}

#[tokio::test]
async fn test_list_page_size_clamped_when_configured() {
    let config = EnvironmentConfig {
        max_page_size: Some(50),
        ..EnvironmentConfig::default()
    };
    let app = create_app(AppState::new(config));
    for i in 1..=60 {
        create_moto(&app, &format!("MOT-{i:04}")).await;
    }

    let body = body_json(send(&app, Method::GET, "/motos?pageSize=100", None).await).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 50);
    assert_eq!(body["pageSize"], 50);
    assert_eq!(body["totalCount"], 60);
}

#[tokio::test]
async fn test_partial_moto_update_changes_only_color() {
    let app = create_test_app();
    let created = create_moto(&app, "ABC-1234").await;

    let response = send(&app, Method::PUT, "/motos/1", Some(json!({ "cor": "Azul" }))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["cor"], "Azul");
    assert_eq!(updated["placa"], created["placa"]);
    assert_eq!(updated["status"], created["status"]);
    assert_eq!(updated["tempoLimite"], created["tempoLimite"]);
    assert_eq!(updated["dataEntrada"], created["dataEntrada"]);
    assert_links(&updated, "motos");

    let fetched = body_json(send(&app, Method::GET, "/motos/1", None).await).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_unknown_moto_is_not_found() {
    let app = create_test_app();
    let response = send(&app, Method::PUT, "/motos/5", Some(json!({ "cor": "Azul" }))).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, "Moto não encontrada");
}

#[tokio::test]
async fn test_colaborador_update_accepts_empty_strings() {
    let app = create_test_app();
    send(
        &app,
        Method::POST,
        "/colaboradores",
        Some(json!({ "nome": "Maria", "cargo": "Supervisora" })),
    )
    .await;

    let response = send(&app, Method::PUT, "/colaboradores/1", Some(json!({ "cargo": "" }))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["nome"], "Maria");
    assert_eq!(body["cargo"], "");
    assert_links(&body, "colaboradores");
}

#[tokio::test]
async fn test_alert_for_unknown_moto_is_bad_request() {
    let app = create_test_app();

    let response = send(
        &app,
        Method::POST,
        "/alertas",
        Some(json!({ "descricao": "Tempo excedido", "motoId": 1 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, "Dados inválidos ou moto não encontrada");

    create_moto(&app, "ABC-1234").await;
    let response = send(
        &app,
        Method::POST,
        "/alertas",
        Some(json!({ "descricao": "", "motoId": 1 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(
        &app,
        Method::POST,
        "/alertas",
        Some(json!({ "descricao": "Tempo excedido", "motoId": 7 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_alert_lifecycle() {
    let app = create_test_app();
    create_moto(&app, "ABC-1234").await;
    create_moto(&app, "XYZ-9876").await;

    let response = send(
        &app,
        Method::POST,
        "/alertas",
        Some(json!({ "descricao": "Tempo excedido", "motoId": 1 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[header::LOCATION], "/alertas/1");
    let created = body_json(response).await;
    assert_eq!(created["motoId"], 1);
    assert!(created["dataAlerta"].is_string());
    assert_links(&created, "alertas");

    let response = send(&app, Method::PUT, "/alertas/1", Some(json!({ "motoId": 99 }))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, "Moto não encontrada");

    let response = send(&app, Method::PUT, "/alertas/1", Some(json!({ "motoId": 2 }))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["motoId"], 2);
    assert_eq!(updated["descricao"], "Tempo excedido");
    assert_eq!(updated["dataAlerta"], created["dataAlerta"]);

    let response = send(&app, Method::DELETE, "/alertas/1", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = send(&app, Method::GET, "/alertas/1", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_is_open() {
    let app = create_test_app();
    let request = Request::builder()
        .method(Method::GET)
        .uri("/motos")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_produce_unique_ids() {
    let app = create_test_app();

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                let body = create_moto(&app, &format!("CON-{i:04}")).await;
                body["id"].as_i64().unwrap()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        assert!(ids.insert(handle.await.unwrap()));
    }
    assert_eq!(ids, (1..=50).collect::<HashSet<i64>>());

    let body = body_json(send(&app, Method::GET, "/motos?pageSize=100", None).await).await;
    assert_eq!(body["totalCount"], 50);
}
