//! Skills-variant HTTP round trips against a live axum server.

mod support;

use reqwest::StatusCode;
use serde_json::{json, Value};
use staffbook_http::Variant;
use support::spawn_server;

#[tokio::test]
async fn skilled_employee_lifecycle_at_root_path() {
    let base = spawn_server(Variant::Skills).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/"))
        .json(&json!({
            "name": "Pavan",
            "email": "pavan@gmail.com",
            "skills": { "skills": "Java, Spring Boot" }
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = resp.json().await.unwrap();
    assert_eq!(created["id"], 1);
    assert_eq!(created["skills"]["skills"], "Java, Spring Boot");
    let skills_id = created["skills"]["id"].clone();
    assert!(skills_id.is_i64());

    let resp = client
        .put(format!("{base}/1"))
        .json(&json!({
            "name": "Pavan",
            "email": "pavan@gmail.com",
            "skills": { "skills": "Rust" }
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = resp.json().await.unwrap();
    assert_eq!(updated["skills"]["id"], skills_id);
    assert_eq!(updated["skills"]["skills"], "Rust");

    let resp = client.delete(format!("{base}/1")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.text().await.unwrap(),
        "Employee with ID: 1 was deleted."
    );

    let resp = client.get(format!("{base}/1")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_without_skills_clears_them() {
    let base = spawn_server(Variant::Skills).await;
    let client = reqwest::Client::new();

    client
        .post(format!("{base}/"))
        .json(&json!({
            "name": "Lee",
            "email": "lee@x.io",
            "skills": { "skills": "Go" }
        }))
        .send()
        .await
        .unwrap();

    let updated: Value = client
        .put(format!("{base}/1"))
        .json(&json!({ "name": "Lee", "email": "lee@x.io" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated["skills"], Value::Null);

    let listed: Vec<Value> = client
        .get(format!("{base}/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["skills"], Value::Null);
}

#[tokio::test]
async fn skills_variant_validates_name_and_email() {
    let base = spawn_server(Variant::Skills).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/"))
        .json(&json!({ "name": "", "email": "pavan@gmail.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["violations"][0]["field"], "name");
    assert_eq!(body["violations"][0]["message"], "Name is required");
}

#[tokio::test]
async fn directory_routes_are_not_mounted_in_skills_variant() {
    let base = spawn_server(Variant::Skills).await;
    let resp = reqwest::get(format!("{base}/employees"))
        .await
        .unwrap();
    // `/employees` is matched by `/:id` and fails identifier decoding.
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
