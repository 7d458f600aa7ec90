mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

// Every create endpoint must reject an incomplete payload with 400 before
// any database access; these run without a provisioned database.

#[tokio::test]
async fn create_owner_with_missing_fields_is_400() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/propietarios", server.base_url))
        .json(&json!({ "nombre": "Carlos Vera", "ciudad": "Loja" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["field_errors"].get("direccion").is_some());
    assert!(body["field_errors"].get("cedula").is_some());
    Ok(())
}

#[tokio::test]
async fn create_pet_with_missing_fields_is_400() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/mascotas", server.base_url))
        .json(&json!({ "nombre": "Rex", "especie": "perro" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert!(body["field_errors"].get("raza").is_some());
    assert!(body["field_errors"].get("fecha_nacimiento").is_some());
    Ok(())
}

/// Spec case: a clinical history without the attending veterinarian writes
/// no row and reports the missing field.
#[tokio::test]
async fn create_history_without_veterinario_is_400() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let payload = json!({
        "mascota_id": 1,
        "fecha": "2024-05-10",
        "estado_reproductivo": "entero",
        "alimentacion": "balanceado",
        "habitat": "casa"
        // veterinario_id missing
    });

    let res = client
        .post(format!("{}/api/historias_clinicas", server.base_url))
        .json(&payload)
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["field_errors"].get("veterinario_id").is_some());
    Ok(())
}

#[tokio::test]
async fn create_exam_with_missing_fields_is_400() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/examenes_clinicos", server.base_url))
        .json(&json!({ "mascota_id": 1, "fecha": "2024-05-10" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert!(body["field_errors"].get("actitud").is_some());
    assert!(body["field_errors"].get("condicion_corporal").is_some());
    assert!(body["field_errors"].get("hidratacion").is_some());
    Ok(())
}

#[tokio::test]
async fn create_appointment_with_missing_fields_is_400() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/citas", server.base_url))
        .json(&json!({ "motivo": "vacunación" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert!(body["field_errors"].get("fecha_hora").is_some());
    assert!(body["field_errors"].get("mascota_id").is_some());
    Ok(())
}

#[tokio::test]
async fn appointment_with_unparseable_schedule_is_400() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let payload = json!({
        "fecha_hora": "10/05/2024 3pm",
        "motivo": "control",
        "propietario_id": 1,
        "veterinario_id": 1,
        "mascota_id": 1
    });

    let res = client
        .post(format!("{}/api/citas", server.base_url))
        .json(&payload)
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}
