use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::pet::{
    NewPet, Pet, PetDetail, PetForAppointment, PetSummary, PetUpdate, PetWithOwner,
};

pub struct PetRepository {
    pool: PgPool,
}

impl PetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, nueva: &NewPet) -> Result<i32, DatabaseError> {
        let id = sqlx::query_scalar(
            "INSERT INTO mascotas
                 (nombre, especie, raza, sexo, color, fecha_nacimiento, edad, procedencia, chip, propietario_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING id",
        )
        .bind(&nueva.nombre)
        .bind(&nueva.especie)
        .bind(&nueva.raza)
        .bind(&nueva.sexo)
        .bind(&nueva.color)
        .bind(nueva.fecha_nacimiento)
        .bind(nueva.edad)
        .bind(&nueva.procedencia)
        .bind(&nueva.chip)
        .bind(nueva.propietario_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Pet>, DatabaseError> {
        let mascota = sqlx::query_as::<_, Pet>(
            "SELECT id, nombre, especie, raza, sexo, color, fecha_nacimiento, edad,
                    procedencia, chip, propietario_id
             FROM mascotas
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(mascota)
    }

    /// Detail view joined with the owner. Inner join on purpose: the detail
    /// page always shows the owner, so ownerless pets report not found.
    pub async fn get_detail(&self, id: i32) -> Result<Option<PetDetail>, DatabaseError> {
        let mascota = sqlx::query_as::<_, PetDetail>(
            "SELECT m.id AS mascota_id,
                    m.nombre AS mascota_nombre,
                    m.especie, m.raza, m.sexo, m.color, m.fecha_nacimiento, m.edad,
                    m.propietario_id,
                    p.nombre AS propietario_nombre
             FROM mascotas m
             JOIN propietarios p ON m.propietario_id = p.id
             WHERE m.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(mascota)
    }

    /// Registry listing. LEFT JOIN so pets without an owner still appear,
    /// with a null owner name.
    pub async fn list_with_owner(&self) -> Result<Vec<PetWithOwner>, DatabaseError> {
        let filas = sqlx::query_as::<_, PetWithOwner>(
            "SELECT m.id, m.nombre, m.especie, m.raza, m.sexo, m.color,
                    m.fecha_nacimiento, m.edad, m.procedencia, m.chip,
                    p.nombre AS propietario_nombre
             FROM mascotas m
             LEFT JOIN propietarios p ON m.propietario_id = p.id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(filas)
    }

    pub async fn list_brief(&self) -> Result<Vec<PetSummary>, DatabaseError> {
        let filas = sqlx::query_as::<_, PetSummary>("SELECT id, nombre FROM mascotas")
            .fetch_all(&self.pool)
            .await?;
        Ok(filas)
    }

    pub async fn list_for_appointments(&self) -> Result<Vec<PetForAppointment>, DatabaseError> {
        let filas = sqlx::query_as::<_, PetForAppointment>(
            "SELECT id, nombre, propietario_id FROM mascotas",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(filas)
    }

    pub async fn update(&self, id: i32, cambios: &PetUpdate) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            "UPDATE mascotas
             SET especie = $1, raza = $2, sexo = $3, color = $4,
                 fecha_nacimiento = $5, edad = $6, propietario_id = $7
             WHERE id = $8",
        )
        .bind(&cambios.especie)
        .bind(&cambios.raza)
        .bind(&cambios.sexo)
        .bind(&cambios.color)
        .bind(cambios.fecha_nacimiento)
        .bind(cambios.edad)
        .bind(cambios.propietario_id)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Unconditional delete. Clinical histories and exams referencing the
    /// pet are left in place (no cascade); callers re-fetch first to report
    /// not found correctly.
    pub async fn delete(&self, id: i32) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM mascotas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
