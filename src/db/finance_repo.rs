// src/db/finance_repo.rs

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::common::db_utils::map_integrity;
use crate::common::error::AppError;
use crate::models::finance::{Payment, ServiceCost};

#[derive(Clone)]
pub struct FinanceRepository {
    pool: SqlitePool,
}

impl FinanceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  COSTOS DE SERVIÇO
    // =========================================================================

    pub async fn create_service_cost(
        &self,
        residencia_id: i64,
        monto: f64,
        periodo: &str,
    ) -> Result<ServiceCost, AppError> {
        let cost = sqlx::query_as::<_, ServiceCost>(
            r#"
            INSERT INTO service_costs (residencia_id, monto, periodo)
            VALUES (?1, ?2, ?3)
            RETURNING *
            "#,
        )
        .bind(residencia_id)
        .bind(monto)
        .bind(periodo)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_integrity(e, "service_costs"))?;

        Ok(cost)
    }

    pub async fn find_service_cost(&self, id: i64) -> Result<Option<ServiceCost>, AppError> {
        let maybe = sqlx::query_as::<_, ServiceCost>("SELECT * FROM service_costs WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(maybe)
    }

    pub async fn list_service_costs(&self) -> Result<Vec<ServiceCost>, AppError> {
        let costs = sqlx::query_as::<_, ServiceCost>(
            "SELECT * FROM service_costs ORDER BY periodo DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(costs)
    }

    pub async fn update_service_cost(
        &self,
        id: i64,
        monto: Option<f64>,
        periodo: Option<&str>,
    ) -> Result<ServiceCost, AppError> {
        let maybe = sqlx::query_as::<_, ServiceCost>(
            r#"
            UPDATE service_costs
            SET monto   = COALESCE(?2, monto),
                periodo = COALESCE(?3, periodo)
            WHERE id = ?1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(monto)
        .bind(periodo)
        .fetch_optional(&self.pool)
        .await?;

        maybe.ok_or(AppError::NotFound("Costo de serviço"))
    }

    pub async fn delete_service_cost(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM service_costs WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_integrity(e, "service_costs"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Costo de serviço"));
        }
        Ok(())
    }

    // =========================================================================
    //  PAGAMENTOS
    // =========================================================================

    pub async fn create_payment(
        &self,
        residente_id: i64,
        servicio_costo_id: i64,
        monto: f64,
        fecha_pago: NaiveDate,
    ) -> Result<Payment, AppError> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (residente_id, servicio_costo_id, monto, fecha_pago)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING *
            "#,
        )
        .bind(residente_id)
        .bind(servicio_costo_id)
        .bind(monto)
        .bind(fecha_pago)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_integrity(e, "payments"))?;

        Ok(payment)
    }

    pub async fn find_payment(&self, id: i64) -> Result<Option<Payment>, AppError> {
        let maybe = sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(maybe)
    }

    pub async fn list_payments(&self) -> Result<Vec<Payment>, AppError> {
        let payments =
            sqlx::query_as::<_, Payment>("SELECT * FROM payments ORDER BY fecha_pago DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(payments)
    }

    pub async fn update_payment(
        &self,
        id: i64,
        monto: Option<f64>,
        fecha_pago: Option<NaiveDate>,
    ) -> Result<Payment, AppError> {
        let maybe = sqlx::query_as::<_, Payment>(
            r#"
            UPDATE payments
            SET monto      = COALESCE(?2, monto),
                fecha_pago = COALESCE(?3, fecha_pago)
            WHERE id = ?1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(monto)
        .bind(fecha_pago)
        .fetch_optional(&self.pool)
        .await?;

        maybe.ok_or(AppError::NotFound("Pagamento"))
    }

    pub async fn delete_payment(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM payments WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Pagamento"));
        }
        Ok(())
    }
}
