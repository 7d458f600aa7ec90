//! Shared request-validation helpers for the handler layer.
//!
//! Handlers validate field presence before touching a repository; these
//! helpers carry the "all fields are mandatory" checks and the schedule
//! parsing that the original `routes.js` performed inline.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::error::ApiError;

/// True when an optional string field is present and not blank once trimmed.
pub fn has_text(value: &Option<String>) -> bool {
    value.as_deref().map(|s| !s.trim().is_empty()).unwrap_or(false)
}

/// Reject the request unless every listed field is present.
///
/// `fields` pairs a field name with the result of its presence check. Any
/// field whose check is `false` is reported under `field_errors`, keyed by
/// name, and the whole request fails with a single `ValidationError`.
pub fn require_fields(message: &str, fields: &[(&str, bool)]) -> Result<(), ApiError> {
    let mut field_errors: HashMap<String, String> = HashMap::new();
    for (name, present) in fields {
        if !present {
            field_errors.insert((*name).to_string(), "Este campo es obligatorio.".to_string());
        }
    }

    if field_errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::validation_error(message, Some(field_errors)))
    }
}

/// Parse an appointment schedule string into a `NaiveDateTime`.
///
/// Accepts the common timestamp spellings a client or seed might send; an
/// unparseable value is a client error, not a server one.
pub fn parse_fecha_hora(value: &str) -> Result<NaiveDateTime, ApiError> {
    let trimmed = value.trim();
    const FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(dt);
        }
    }
    Err(ApiError::bad_request("Fecha y hora inválidas."))
}
