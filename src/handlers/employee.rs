use actix_web::{web, HttpResponse};
use log::{error, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::employee::EmployeeFields;
use crate::store::EmployeeStore;
use crate::utils::validation::validate_payload;

fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest("Invalid employee ID".to_string()))
}

pub async fn create_employee(
    store: web::Data<dyn EmployeeStore>,
    new_employee: web::Json<EmployeeFields>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*new_employee)?;

    let employee = store.insert(&new_employee).await.map_err(|err| {
        error!("Error adding employee: {}", err);
        AppError::PersistenceFailure("Error adding employee".to_string())
    })?;

    info!("Added employee {}", employee.id);
    Ok(HttpResponse::Created().json(employee))
}

pub async fn get_employees(store: web::Data<dyn EmployeeStore>) -> Result<HttpResponse, AppError> {
    let employees = store.list().await.map_err(|err| {
        error!("Error fetching employees: {}", err);
        AppError::PersistenceFailure("Error fetching employees".to_string())
    })?;

    Ok(HttpResponse::Ok().json(employees))
}

pub async fn update_employee(
    store: web::Data<dyn EmployeeStore>,
    id: web::Path<String>,
    updates: web::Json<EmployeeFields>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&id)?;
    validate_payload(&*updates)?;

    let updated = store.replace(id, &updates).await.map_err(|err| {
        error!("Error updating employee {}: {}", id, err);
        AppError::PersistenceFailure("Error updating employee".to_string())
    })?;

    match updated {
        Some(employee) => Ok(HttpResponse::Ok().json(employee)),
        None => Err(AppError::NotFound("Employee not found".to_string())),
    }
}

pub async fn delete_employee(
    store: web::Data<dyn EmployeeStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&id)?;

    let removed = store.remove(id).await.map_err(|err| {
        error!("Error deleting employee {}: {}", id, err);
        AppError::PersistenceFailure("Error deleting employee".to_string())
    })?;

    if !removed {
        return Err(AppError::NotFound("Employee not found".to_string()));
    }

    info!("Deleted employee {}", id);
    Ok(HttpResponse::NoContent().finish())
}
