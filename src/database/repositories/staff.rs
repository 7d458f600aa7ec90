use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::staff::{NewStaff, Staff, StaffSummary, VetContact};

pub struct StaffRepository {
    pool: PgPool,
}

impl StaffRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Registration checks this before inserting; the unique index on
    /// `correo` is the backstop for concurrent registrations.
    pub async fn email_taken(&self, correo: &str) -> Result<bool, DatabaseError> {
        let found: Option<i32> = sqlx::query_scalar("SELECT id FROM usuarios WHERE correo = $1")
            .bind(correo)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }

    pub async fn create(&self, nuevo: &NewStaff) -> Result<i32, DatabaseError> {
        let id = sqlx::query_scalar(
            "INSERT INTO usuarios (nombre, correo, contrasena, celular, rol)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(&nuevo.nombre)
        .bind(&nuevo.correo)
        .bind(&nuevo.contrasena)
        .bind(&nuevo.celular)
        .bind(&nuevo.rol)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn find_by_email(&self, correo: &str) -> Result<Option<Staff>, DatabaseError> {
        let usuario = sqlx::query_as::<_, Staff>(
            "SELECT id, nombre, correo, contrasena, celular, rol
             FROM usuarios
             WHERE correo = $1",
        )
        .bind(correo)
        .fetch_optional(&self.pool)
        .await?;
        Ok(usuario)
    }

    pub async fn list_veterinarians(&self) -> Result<Vec<StaffSummary>, DatabaseError> {
        let filas = sqlx::query_as::<_, StaffSummary>(
            "SELECT id, nombre FROM usuarios WHERE rol = 'veterinario'",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(filas)
    }

    pub async fn list_veterinarians_with_phone(&self) -> Result<Vec<VetContact>, DatabaseError> {
        let filas = sqlx::query_as::<_, VetContact>(
            "SELECT id, nombre, COALESCE(celular, 'Sin teléfono') AS celular
             FROM usuarios
             WHERE rol = 'veterinario'",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(filas)
    }
}
