use super::{EmployeeStore, StoreError};
use crate::models::employee::{Employee, EmployeeFields};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct PgEmployeeStore {
    pool: PgPool,
}

impl PgEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn insert(&self, fields: &EmployeeFields) -> Result<Employee, StoreError> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (id, name, email, phone, position, employee_id, gender, image, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, name, email, phone, position, employee_id, gender, image
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.phone)
        .bind(&fields.position)
        .bind(&fields.employee_id)
        .bind(&fields.gender)
        .bind(&fields.image)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn list(&self) -> Result<Vec<Employee>, StoreError> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT id, name, email, phone, position, employee_id, gender, image FROM employees ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    async fn replace(&self, id: Uuid, fields: &EmployeeFields) -> Result<Option<Employee>, StoreError> {
        let mut query: sqlx::QueryBuilder<'_, sqlx::Postgres> =
            sqlx::QueryBuilder::new("UPDATE employees SET ");
        let mut separated = query.separated(", ");

        separated.push("name = ");
        separated.push_bind_unseparated(&fields.name);
        separated.push("email = ");
        separated.push_bind_unseparated(&fields.email);
        separated.push("phone = ");
        separated.push_bind_unseparated(&fields.phone);
        separated.push("position = ");
        separated.push_bind_unseparated(&fields.position);
        separated.push("employee_id = ");
        separated.push_bind_unseparated(&fields.employee_id);
        separated.push("gender = ");
        separated.push_bind_unseparated(&fields.gender);
        separated.push("image = ");
        separated.push_bind_unseparated(&fields.image);
        query.push(" WHERE id = ");
        query.push_bind(id);
        query.push(" RETURNING id, name, email, phone, position, employee_id, gender, image");

        let employee = query
            .build_query_as::<Employee>()
            .fetch_optional(&self.pool)
            .await?;

        Ok(employee)
    }

    async fn remove(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
