use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use duckbills::{Services, build_app};

/// Helper function to create a test app holding the fixture rows
fn create_test_app() -> Router {
    build_app(Services::seeded())
}

/// Helper function to parse JSON response body
async fn parse_json_body(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Failed to parse JSON")
}

/// Send a request without a body and return status plus parsed JSON
async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    (status, parse_json_body(response.into_body()).await)
}

/// Send a JSON request and return status plus parsed JSON
async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    (status, parse_json_body(response.into_body()).await)
}

fn ids(list: &Value) -> Vec<i64> {
    list.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();

    let (status, body) = send(&app, "GET", "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_health_check_ignores_store_state() {
    let app = build_app(Services::empty());

    let (status, body) = send(&app, "GET", "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_list_categories_returns_fixtures() {
    let app = create_test_app();

    let (status, body) = send(&app, "GET", "/categorias/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "id": 1, "nome": "Salário", "tipo": "renda" },
            { "id": 2, "nome": "Aluguel", "tipo": "despesa" }
        ])
    );
}

#[tokio::test]
async fn test_collection_routes_accept_both_slash_forms() {
    let app = create_test_app();

    for uri in [
        "/categorias",
        "/rendas",
        "/despesas",
        "/contas-recorrentes",
        "/orcamentos",
        "/metas",
    ] {
        let (without_slash, a) = send(&app, "GET", uri).await;
        let (with_slash, b) = send(&app, "GET", &format!("{uri}/")).await;

        assert_eq!(without_slash, StatusCode::OK, "GET {uri}");
        assert_eq!(with_slash, StatusCode::OK, "GET {uri}/");
        assert_eq!(a, b);
    }
}

#[tokio::test]
async fn test_create_category_appends_with_next_id() {
    let app = create_test_app();

    let (status, created) = send_json(
        &app,
        "POST",
        "/categorias/",
        json!({ "nome": "Transporte", "tipo": "despesa" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, json!({ "id": 3, "nome": "Transporte", "tipo": "despesa" }));

    let (_, list) = send(&app, "GET", "/categorias/").await;
    assert_eq!(ids(&list), vec![1, 2, 3]);
    assert_eq!(list[2]["nome"], "Transporte");
}

#[tokio::test]
async fn test_create_category_ignores_caller_id() {
    let app = create_test_app();

    let (status, created) = send_json(
        &app,
        "POST",
        "/categorias",
        json!({ "id": 1, "nome": "Bônus", "tipo": "renda" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 3);
}

#[tokio::test]
async fn test_create_category_with_unknown_kind_is_rejected() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/categorias")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"nome":"X","tipo":"transfer"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
    let (_, list) = send(&app, "GET", "/categorias").await;
    assert_eq!(ids(&list), vec![1, 2]);
}

#[tokio::test]
async fn test_auto_assigned_ids_on_empty_store_start_at_one() {
    let app = build_app(Services::empty());
    let goal = json!({
        "titulo": "Bicicleta",
        "valor_atual": 0.0,
        "valor_meta": 2500.0,
        "prazo": "2026-03-01",
        "usuario_id": 1
    });

    let (_, first) = send_json(&app, "POST", "/metas", goal.clone()).await;
    let (_, second) = send_json(&app, "POST", "/metas", goal).await;

    assert_eq!(first["id"], 1);
    assert_eq!(second["id"], 2);
    assert_eq!(first["descricao"], Value::Null);
}

#[tokio::test]
async fn test_income_crud_flow() {
    let app = create_test_app();

    let (status, created) = send_json(
        &app,
        "POST",
        "/rendas/",
        json!({
            "id": 1,
            "valor": 450.0,
            "data": "2025-09-20",
            "descricao": "Venda",
            "categoria_id": 1,
            "usuario_id": 1
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 3);

    let (status, updated) = send_json(
        &app,
        "PUT",
        "/rendas/3",
        json!({
            "id": 50,
            "valor": 500.0,
            "data": "2025-09-21",
            "categoria_id": 1,
            "usuario_id": 1
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], 3);
    assert_eq!(updated["valor"], 500.0);
    assert_eq!(updated["descricao"], Value::Null);

    let (status, body) = send(&app, "DELETE", "/rendas/3").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    let (_, list) = send(&app, "GET", "/rendas").await;
    assert_eq!(ids(&list), vec![1, 2]);
}

#[tokio::test]
async fn test_income_update_and_delete_missing_id() {
    let app = create_test_app();
    let body = json!({
        "valor": 1.0,
        "data": "2025-09-21",
        "categoria_id": 1,
        "usuario_id": 1
    });

    let (status, error) = send_json(&app, "PUT", "/rendas/99", body).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["error"], "not_found");

    let (status, _) = send(&app, "DELETE", "/rendas/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = send(&app, "GET", "/rendas").await;
    assert_eq!(ids(&list), vec![1, 2]);
}

#[tokio::test]
async fn test_create_expense_with_existing_id_is_rejected() {
    let app = create_test_app();
    let (_, before) = send(&app, "GET", "/despesas/").await;

    let (status, error) = send_json(
        &app,
        "POST",
        "/despesas/",
        json!({
            "id": 1,
            "valor": 10.0,
            "data": "2025-09-15",
            "categoria_id": 2,
            "usuario_id": 1
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "duplicate_identifier");
    assert_eq!(error["message"], "Expense with id 1 already exists");

    let (_, after) = send(&app, "GET", "/despesas/").await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_create_expense_keeps_caller_id_and_defaults_recurring() {
    let app = create_test_app();

    let (status, created) = send_json(
        &app,
        "POST",
        "/despesas",
        json!({
            "id": 1757000000000_i64,
            "valor": 35.9,
            "data": "2025-09-15",
            "descricao": "Cinema",
            "categoria_id": 2,
            "usuario_id": 1
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1757000000000_i64);
    assert_eq!(created["recorrente"], false);

    let (_, list) = send(&app, "GET", "/despesas").await;
    assert_eq!(ids(&list), vec![1, 2, 1757000000000]);
}

#[tokio::test]
async fn test_recurring_bills_reject_duplicate_id() {
    let app = create_test_app();
    let bill = |id: i64| {
        json!({
            "id": id,
            "valor": 89.9,
            "descricao": "Internet",
            "categoria_id": 2,
            "usuario_id": 1,
            "tipo": "despesa",
            "data_inicio": "2025-10-01",
            "frequencia": "mensal"
        })
    };

    let (status, _) = send_json(&app, "POST", "/contas-recorrentes/", bill(2)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, created) = send_json(&app, "POST", "/contas-recorrentes/", bill(3)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["frequencia"], "mensal");

    let (_, list) = send(&app, "GET", "/contas-recorrentes/").await;
    assert_eq!(ids(&list), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_budget_lifecycle() {
    let app = create_test_app();
    let budget = |id: i64, limit: f64| {
        json!({
            "id": id,
            "categoria_id": 2,
            "usuario_id": 1,
            "valor_limite": limit,
            "periodo": "mensal"
        })
    };

    let (status, _) = send_json(&app, "POST", "/orcamentos", budget(1, 10.0)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_json(&app, "POST", "/orcamentos", budget(3, 800.0)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, updated) = send_json(&app, "PUT", "/orcamentos/3", budget(8, 900.0)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], 3);
    assert_eq!(updated["valor_limite"], 900.0);

    let (status, again) = send_json(&app, "PUT", "/orcamentos/3", budget(8, 900.0)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(again, updated);

    let (status, _) = send_json(&app, "PUT", "/orcamentos/42", budget(42, 1.0)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/orcamentos/1").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "DELETE", "/orcamentos/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = send(&app, "GET", "/orcamentos").await;
    assert_eq!(ids(&list), vec![2, 3]);
}

#[tokio::test]
async fn test_put_goal_forces_path_id() {
    let app = create_test_app();

    let (status, updated) = send_json(
        &app,
        "PUT",
        "/metas/2",
        json!({
            "id": 999,
            "titulo": "Macbook Air",
            "valor_atual": 4000.0,
            "valor_meta": 9000.0,
            "prazo": "2026-02-28",
            "descricao": "Modelo mais barato",
            "usuario_id": 1
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], 2);
    assert_eq!(updated["titulo"], "Macbook Air");

    let (status, fetched) = send(&app, "GET", "/metas/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, updated);

    let (status, _) = send(&app, "GET", "/metas/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_value_to_goal() {
    let app = create_test_app();
    let (_, before) = send(&app, "GET", "/metas/1").await;

    let (status, after) = send(&app, "PATCH", "/metas/1/adicionar-valor?valor=250.5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(after["valor_atual"], 7750.5);
    assert_eq!(after["valor_meta"], before["valor_meta"]);
    assert_eq!(after["prazo"], before["prazo"]);
    assert_eq!(after["titulo"], before["titulo"]);
}

#[tokio::test]
async fn test_add_negative_value_to_goal_is_rejected() {
    let app = create_test_app();
    let (_, before) = send(&app, "GET", "/metas/1").await;

    let (status, error) = send(&app, "PATCH", "/metas/1/adicionar-valor?valor=-5").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "validation_error");

    let (status, after) = send(&app, "GET", "/metas/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(after["valor_atual"], before["valor_atual"]);
    assert_eq!(after, before);
}

#[tokio::test]
async fn test_add_non_finite_value_to_goal_is_rejected() {
    let app = create_test_app();
    let (_, before) = send(&app, "GET", "/metas/1").await;

    for valor in ["inf", "-inf", "NaN"] {
        let uri = format!("/metas/1/adicionar-valor?valor={valor}");
        let (status, error) = send(&app, "PATCH", &uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "valor={valor}");
        assert_eq!(error["error"], "validation_error");
    }

    let (_, after) = send(&app, "GET", "/metas/1").await;
    assert_eq!(after, before);
    assert!(after["valor_atual"].is_f64());
}

#[tokio::test]
async fn test_add_value_overflowing_goal_total_is_rejected() {
    let app = create_test_app();

    let (status, first) = send(&app, "PATCH", "/metas/2/adicionar-valor?valor=1e308").await;
    assert_eq!(status, StatusCode::OK);
    assert!(first["valor_atual"].is_f64());

    let (status, error) = send(&app, "PATCH", "/metas/2/adicionar-valor?valor=1e308").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "invalid_argument");

    let (status, stored) = send(&app, "GET", "/metas/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stored, first);

    let (status, _) = send_json(&app, "PUT", "/metas/2", stored).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_add_zero_value_and_missing_goal() {
    let app = create_test_app();

    let (status, _) = send(&app, "PATCH", "/metas/1/adicionar-valor?valor=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, error) = send(&app, "PATCH", "/metas/77/adicionar-valor?valor=10").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["message"], "Goal with id 77 not found");
}

#[tokio::test]
async fn test_delete_goal() {
    let app = create_test_app();

    let (status, body) = send(&app, "DELETE", "/metas/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Goal 4 deleted");

    let (_, list) = send(&app, "GET", "/metas").await;
    assert_eq!(ids(&list), vec![1, 2, 3]);

    let (_, created) = send_json(
        &app,
        "POST",
        "/metas",
        json!({
            "titulo": "Notebook",
            "valor_atual": 0.0,
            "valor_meta": 3000.0,
            "prazo": "2026-01-15",
            "usuario_id": 1
        }),
    )
    .await;
    assert_eq!(created["id"], 4);
}

#[tokio::test]
async fn test_openapi_document_lists_resources() {
    let app = create_test_app();

    let (status, doc) = send(&app, "GET", "/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    let paths = doc["paths"].as_object().unwrap();
    for path in [
        "/health",
        "/categorias",
        "/rendas/{id}",
        "/despesas",
        "/contas-recorrentes",
        "/orcamentos/{id}",
        "/metas/{id}/adicionar-valor",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
}

#[tokio::test]
async fn test_cors_allows_any_origin_with_credentials() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/categorias/")
                .header("origin", "http://localhost:3000")
                .header("access-control-request-method", "POST")
                .header("access-control-request-headers", "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(
        headers.get("access-control-allow-credentials").unwrap(),
        "true"
    );
}
