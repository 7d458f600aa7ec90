use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::owner::{NewOwner, Owner, OwnerContact, OwnerSummary};

pub struct OwnerRepository {
    pool: PgPool,
}

impl OwnerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, nuevo: &NewOwner) -> Result<i32, DatabaseError> {
        let id = sqlx::query_scalar(
            "INSERT INTO propietarios (nombre, direccion, ciudad, provincia, cedula, celular)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(&nuevo.nombre)
        .bind(&nuevo.direccion)
        .bind(&nuevo.ciudad)
        .bind(&nuevo.provincia)
        .bind(&nuevo.cedula)
        .bind(&nuevo.celular)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Owner>, DatabaseError> {
        let propietario = sqlx::query_as::<_, Owner>(
            "SELECT id, nombre, direccion, ciudad, provincia, cedula, celular
             FROM propietarios
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(propietario)
    }

    /// Owner of a given pet. Inner join: a pet without an owner row yields
    /// no result and surfaces as not found.
    pub async fn find_by_pet(&self, mascota_id: i32) -> Result<Option<Owner>, DatabaseError> {
        let propietario = sqlx::query_as::<_, Owner>(
            "SELECT p.id, p.nombre, p.direccion, p.ciudad, p.provincia, p.cedula, p.celular
             FROM propietarios p
             JOIN mascotas m ON p.id = m.propietario_id
             WHERE m.id = $1",
        )
        .bind(mascota_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(propietario)
    }

    pub async fn list(&self) -> Result<Vec<OwnerSummary>, DatabaseError> {
        let filas = sqlx::query_as::<_, OwnerSummary>("SELECT id, nombre FROM propietarios")
            .fetch_all(&self.pool)
            .await?;
        Ok(filas)
    }

    pub async fn list_with_phone(&self) -> Result<Vec<OwnerContact>, DatabaseError> {
        let filas =
            sqlx::query_as::<_, OwnerContact>("SELECT id, nombre, celular FROM propietarios")
                .fetch_all(&self.pool)
                .await?;
        Ok(filas)
    }

    pub async fn update(&self, id: i32, cambios: &NewOwner) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            "UPDATE propietarios
             SET nombre = $1, direccion = $2, ciudad = $3, provincia = $4, cedula = $5, celular = $6
             WHERE id = $7",
        )
        .bind(&cambios.nombre)
        .bind(&cambios.direccion)
        .bind(&cambios.ciudad)
        .bind(&cambios.provincia)
        .bind(&cambios.cedula)
        .bind(&cambios.celular)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }
}
