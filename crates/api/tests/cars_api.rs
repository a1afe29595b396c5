//! HTTP-level integration tests for the `/api/cars` endpoints, including the
//! seeded catalog.

mod common;

use axum::http::StatusCode;
use common::{body_json, car_payload, delete, get, post_json, put_json};
use consorcio_db::repositories::CarRepo;
use consorcio_db::seed::seed_if_empty;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn seeded_catalog_lists_four_models(pool: PgPool) {
    seed_if_empty(&pool).await.unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/api/cars").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let cars = json.as_array().unwrap();
    let models: Vec<_> = cars.iter().map(|c| c["model"].as_str().unwrap()).collect();
    assert_eq!(models, ["Golf GTI", "Polo Track", "T-Cross", "Nivus"]);
    for car in cars {
        assert!(car["monthly_price"].as_str().unwrap().contains("R$"));
        assert_eq!(car["is_active"], true);
        assert_eq!(car["highlights"].as_array().unwrap().len(), 3);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_car_returns_stored_document(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/cars", car_payload("virtus-2025", "Virtus")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], "virtus-2025");
    assert_eq!(json["model"], "Virtus");
    assert_eq!(json["highlights"][1], "Câmbio automático");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/cars").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_car_without_id_generates_one(pool: PgPool) {
    let mut payload = car_payload("ignored", "Taos");
    payload.as_object_mut().unwrap().remove("id");
    payload.as_object_mut().unwrap().remove("is_active");

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/cars", payload).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(uuid::Uuid::parse_str(json["id"].as_str().unwrap()).is_ok());
    assert_eq!(json["is_active"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_car_with_duplicate_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/cars", car_payload("jetta-2025", "Jetta")).await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/cars", car_payload("jetta-2025", "Jetta")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Failed to create car");
    assert_eq!(json["code"], "WRITE_FAILED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn replace_car_overwrites_fields_and_keeps_path_id(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/cars", car_payload("amarok-2025", "Amarok")).await;

    let mut payload = car_payload("some-other-id", "Amarok");
    payload["monthly_price"] = serde_json::json!("R$ 2.199");
    payload["highlights"] = serde_json::json!(["Tração 4x4"]);

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, "/api/cars/amarok-2025", payload).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Car updated successfully");

    let stored = CarRepo::find_by_id(&pool, "amarok-2025").await.unwrap().unwrap();
    assert_eq!(stored.monthly_price, "R$ 2.199");
    assert_eq!(stored.highlights, vec!["Tração 4x4".to_string()]);
    assert!(CarRepo::find_by_id(&pool, "some-other-id").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn replace_with_identical_document_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/cars", car_payload("saveiro-2025", "Saveiro")).await;

    let app = common::build_test_app(pool);
    let response = put_json(app, "/api/cars/saveiro-2025", car_payload("saveiro-2025", "Saveiro")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn replace_or_delete_unknown_car_returns_404_and_changes_nothing(pool: PgPool) {
    seed_if_empty(&pool).await.unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, "/api/cars/ghost-car", car_payload("ghost-car", "Ghost")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Car not found");

    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/api/cars/ghost-car").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert_eq!(CarRepo::count(&pool).await.unwrap(), 4);
    assert!(CarRepo::find_by_id(&pool, "ghost-car").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_car_hides_it_but_keeps_the_row(pool: PgPool) {
    seed_if_empty(&pool).await.unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/api/cars/nivus-2025").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Car deleted successfully");

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/cars").await).await;
    let ids: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert!(!ids.contains(&"nivus-2025"));
    assert_eq!(ids.len(), 3);

    let stored = CarRepo::find_by_id(&pool, "nivus-2025").await.unwrap().unwrap();
    assert!(!stored.is_active);
    assert_eq!(stored.model, "Nivus");

    // Already inactive: nothing left to delete.
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/cars/nivus-2025").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn replace_rejected_by_store_is_a_failed_write(pool: PgPool) {
    seed_if_empty(&pool).await.unwrap();

    let mut payload = car_payload("golf-gti-2025", "Golf GTI");
    payload["description"] = serde_json::json!("nul\u{0}byte");

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, "/api/cars/golf-gti-2025", payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "WRITE_FAILED");
    assert_eq!(json["error"], "Failed to update car");

    let stored = CarRepo::find_by_id(&pool, "golf-gti-2025").await.unwrap().unwrap();
    assert_eq!(stored.model, "Golf GTI");
    assert!(!stored.description.contains('\u{0}'));
}
