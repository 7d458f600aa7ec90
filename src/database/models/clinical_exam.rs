use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// A physical exam (`examenes_clinicos`): general state plus per-mucosa and
/// per-body-system findings, each with free-text observations. Only the
/// general fields are mandatory; detail fields are filled as examined.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ClinicalExam {
    pub id: i32,
    pub mascota_id: i32,
    pub fecha: NaiveDate,
    pub actitud: String,
    pub condicion_corporal: String,
    pub hidratacion: String,
    pub observaciones: Option<String>,

    pub mucosa_conjuntiva: Option<String>,
    pub mucosa_conjuntiva_observaciones: Option<String>,
    pub mucosa_oral: Option<String>,
    pub mucosa_oral_observaciones: Option<String>,
    pub mucosa_vulvar_prepu: Option<String>,
    pub mucosa_vulvar_prepu_observaciones: Option<String>,
    pub mucosa_rectal: Option<String>,
    pub mucosa_rectal_observaciones: Option<String>,
    pub mucosa_ojos: Option<String>,
    pub mucosa_ojos_observaciones: Option<String>,
    pub mucosa_oidos: Option<String>,
    pub mucosa_oidos_observaciones: Option<String>,
    pub mucosa_nodulos: Option<String>,
    pub mucosa_nodulos_observaciones: Option<String>,
    pub mucosa_piel_anexos: Option<String>,
    pub mucosa_piel_anexos_observaciones: Option<String>,

    pub locomocion_estado: Option<String>,
    pub locomocion_observaciones: Option<String>,
    pub musculo_estado: Option<String>,
    pub musculo_observaciones: Option<String>,
    pub nervioso_estado: Option<String>,
    pub nervioso_observaciones: Option<String>,
    pub cardiovascular_estado: Option<String>,
    pub cardiovascular_observaciones: Option<String>,
    pub respiratorio_estado: Option<String>,
    pub respiratorio_observaciones: Option<String>,
    pub digestivo_estado: Option<String>,
    pub digestivo_observaciones: Option<String>,
    pub genitourinario_estado: Option<String>,
    pub genitourinario_observaciones: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ExamDetails {
    pub observaciones: Option<String>,

    pub mucosa_conjuntiva: Option<String>,
    pub mucosa_conjuntiva_observaciones: Option<String>,
    pub mucosa_oral: Option<String>,
    pub mucosa_oral_observaciones: Option<String>,
    pub mucosa_vulvar_prepu: Option<String>,
    pub mucosa_vulvar_prepu_observaciones: Option<String>,
    pub mucosa_rectal: Option<String>,
    pub mucosa_rectal_observaciones: Option<String>,
    pub mucosa_ojos: Option<String>,
    pub mucosa_ojos_observaciones: Option<String>,
    pub mucosa_oidos: Option<String>,
    pub mucosa_oidos_observaciones: Option<String>,
    pub mucosa_nodulos: Option<String>,
    pub mucosa_nodulos_observaciones: Option<String>,
    pub mucosa_piel_anexos: Option<String>,
    pub mucosa_piel_anexos_observaciones: Option<String>,

    pub locomocion_estado: Option<String>,
    pub locomocion_observaciones: Option<String>,
    pub musculo_estado: Option<String>,
    pub musculo_observaciones: Option<String>,
    pub nervioso_estado: Option<String>,
    pub nervioso_observaciones: Option<String>,
    pub cardiovascular_estado: Option<String>,
    pub cardiovascular_observaciones: Option<String>,
    pub respiratorio_estado: Option<String>,
    pub respiratorio_observaciones: Option<String>,
    pub digestivo_estado: Option<String>,
    pub digestivo_observaciones: Option<String>,
    pub genitourinario_estado: Option<String>,
    pub genitourinario_observaciones: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewClinicalExam {
    pub mascota_id: i32,
    pub fecha: NaiveDate,
    pub actitud: String,
    pub condicion_corporal: String,
    pub hidratacion: String,
    pub detalles: ExamDetails,
}

/// Full replacement for an update; the pet link is fixed at creation.
#[derive(Debug, Clone)]
pub struct ClinicalExamUpdate {
    pub fecha: NaiveDate,
    pub actitud: String,
    pub condicion_corporal: String,
    pub hidratacion: String,
    pub detalles: ExamDetails,
}

/// Exam joined with the pet's name (inner join).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ClinicalExamWithPet {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub examen: ClinicalExam,
    pub mascota_nombre: String,
}
