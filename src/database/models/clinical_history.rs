use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// A clinical history (`historias_clinicas`): one per visit, tied to a pet
/// and the attending veterinarian.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ClinicalHistory {
    pub id: i32,
    pub mascota_id: i32,
    pub fecha: NaiveDate,
    pub vacunacion_tipo: Option<String>,
    pub vacunacion_fecha: Option<NaiveDate>,
    pub desparasitacion_producto: Option<String>,
    pub desparasitacion_fecha: Option<NaiveDate>,
    pub estado_reproductivo: String,
    pub alimentacion: String,
    pub habitat: String,
    pub alergias: Option<String>,
    pub cirugias: Option<String>,
    pub antecedentes: Option<String>,
    pub enfermedades_anteriores: Option<String>,
    pub observaciones: Option<String>,
    pub veterinario_id: i32,
}

#[derive(Debug, Clone)]
pub struct NewClinicalHistory {
    pub mascota_id: i32,
    pub fecha: NaiveDate,
    pub vacunacion_tipo: Option<String>,
    pub vacunacion_fecha: Option<NaiveDate>,
    pub desparasitacion_producto: Option<String>,
    pub desparasitacion_fecha: Option<NaiveDate>,
    pub estado_reproductivo: String,
    pub alimentacion: String,
    pub habitat: String,
    pub alergias: Option<String>,
    pub cirugias: Option<String>,
    pub antecedentes: Option<String>,
    pub enfermedades_anteriores: Option<String>,
    pub observaciones: Option<String>,
    pub veterinario_id: i32,
}

/// Full replacement for an update; the pet link is fixed at creation.
#[derive(Debug, Clone)]
pub struct ClinicalHistoryUpdate {
    pub fecha: NaiveDate,
    pub vacunacion_tipo: Option<String>,
    pub vacunacion_fecha: Option<NaiveDate>,
    pub desparasitacion_producto: Option<String>,
    pub desparasitacion_fecha: Option<NaiveDate>,
    pub estado_reproductivo: String,
    pub alimentacion: String,
    pub habitat: String,
    pub alergias: Option<String>,
    pub cirugias: Option<String>,
    pub antecedentes: Option<String>,
    pub enfermedades_anteriores: Option<String>,
    pub observaciones: Option<String>,
    pub veterinario_id: i32,
}

/// History joined with the attending veterinarian's name. Inner join: a
/// history whose veterinarian row is gone drops out of these views.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ClinicalHistoryWithVet {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub historia: ClinicalHistory,
    pub veterinario: String,
}
