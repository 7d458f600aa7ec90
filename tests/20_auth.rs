mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

/// The protected route without a token is refused before any handler or
/// database work happens.
#[tokio::test]
async fn protegido_without_token_is_403() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/protegido", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["code"], "FORBIDDEN");
    Ok(())
}

#[tokio::test]
async fn protegido_with_garbage_token_is_401() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/protegido", server.base_url))
        .header("x-access-token", "definitely-not-a-jwt")
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["code"], "UNAUTHORIZED");
    Ok(())
}

/// Mandatory-field validation happens before the database is touched, so
/// this passes with no database provisioned.
#[tokio::test]
async fn register_with_missing_fields_is_400() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let payload = json!({
        "nombre": "Dra. Paz",
        "correo": "paz@clinica.ec"
        // contrasena and rol missing
    });

    let res = client
        .post(format!("{}/api/registrar-usuario", server.base_url))
        .json(&payload)
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["field_errors"].get("contrasena").is_some());
    assert!(body["field_errors"].get("rol").is_some());
    Ok(())
}

#[tokio::test]
async fn login_with_missing_password_is_400() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/login", server.base_url))
        .json(&json!({ "correo": "paz@clinica.ec" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}
