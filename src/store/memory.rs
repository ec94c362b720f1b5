use super::{EmployeeStore, StoreError};
use crate::models::employee::{Employee, EmployeeFields};
use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

/// In-process store with the same ordering and id rules as the database.
#[derive(Default)]
pub struct MemoryEmployeeStore {
    employees: Mutex<Vec<Employee>>,
    failing: bool,
}

impl MemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails, for exercising 500 paths.
    pub fn failing() -> Self {
        Self {
            employees: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing {
            return Err(StoreError::Unavailable("memory store is in failing mode".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn insert(&self, fields: &EmployeeFields) -> Result<Employee, StoreError> {
        self.check()?;
        let employee = Employee::new(Uuid::new_v4(), fields.clone());
        self.employees.lock().await.push(employee.clone());
        Ok(employee)
    }

    async fn list(&self) -> Result<Vec<Employee>, StoreError> {
        self.check()?;
        Ok(self.employees.lock().await.clone())
    }

    async fn replace(&self, id: Uuid, fields: &EmployeeFields) -> Result<Option<Employee>, StoreError> {
        self.check()?;
        let mut employees = self.employees.lock().await;
        Ok(employees.iter_mut().find(|e| e.id == id).map(|slot| {
            *slot = Employee::new(id, fields.clone());
            slot.clone()
        }))
    }

    async fn remove(&self, id: Uuid) -> Result<bool, StoreError> {
        self.check()?;
        let mut employees = self.employees.lock().await;
        let before = employees.len();
        employees.retain(|e| e.id != id);
        Ok(employees.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str) -> EmployeeFields {
        EmployeeFields {
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
            phone: "555-0000".into(),
            position: "Tester".into(),
            employee_id: format!("E-{}", name),
            gender: "Female".into(),
            image: None,
        }
    }

    #[actix_web::test]
    async fn list_keeps_insertion_order() {
        let store = MemoryEmployeeStore::new();
        let a = store.insert(&fields("Ann")).await.unwrap();
        let b = store.insert(&fields("Bea")).await.unwrap();

        let ids: Vec<Uuid> = store.list().await.unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }

    #[actix_web::test]
    async fn replace_keeps_id_and_position() {
        let store = MemoryEmployeeStore::new();
        let a = store.insert(&fields("Ann")).await.unwrap();
        store.insert(&fields("Bea")).await.unwrap();

        let updated = store.replace(a.id, &fields("Cat")).await.unwrap().unwrap();
        assert_eq!(updated.id, a.id);
        assert_eq!(updated.name, "Cat");
        assert_eq!(store.list().await.unwrap()[0], updated);
    }

    #[actix_web::test]
    async fn unknown_ids_are_reported() {
        let store = MemoryEmployeeStore::new();
        assert!(store.replace(Uuid::new_v4(), &fields("Ann")).await.unwrap().is_none());
        assert!(!store.remove(Uuid::new_v4()).await.unwrap());
    }

    #[actix_web::test]
    async fn failing_store_rejects_everything() {
        let store = MemoryEmployeeStore::failing();
        assert!(store.insert(&fields("Ann")).await.is_err());
        assert!(store.list().await.is_err());
    }
}
