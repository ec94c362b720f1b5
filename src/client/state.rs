use log::error;
use uuid::Uuid;
use validator::Validate;

use super::api::DirectoryApi;
use super::error::ClientError;
use super::search::filter_employees;
use crate::models::employee::{position_label, Employee, EmployeeFields, POSITIONS};
use crate::utils::validation::describe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Creating,
    Editing { id: Uuid },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Position,
    EmployeeId,
    Gender,
}

fn logged(context: &str, err: ClientError) -> ClientError {
    error!("{}: {}", context, err);
    err
}

pub struct Directory<A> {
    api: A,
    employees: Vec<Employee>,
    form: EmployeeFields,
    mode: FormMode,
    search_term: String,
    filter: Option<String>,
}

impl<A: DirectoryApi> Directory<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            employees: Vec::new(),
            form: EmployeeFields::default(),
            mode: FormMode::Creating,
            search_term: String::new(),
            filter: None,
        }
    }

    pub async fn mount(api: A) -> Self {
        let mut directory = Self::new(api);
        // load already logs the failure; the list just stays empty
        let _ = directory.load().await;
        directory
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn form(&self) -> &EmployeeFields {
        &self.form
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Values and labels for the position select.
    pub fn position_options(&self) -> &'static [(&'static str, &'static str)] {
        &POSITIONS
    }

    /// Label shown for an employee's position; free text is shown as is.
    pub fn position_display<'a>(&self, employee: &'a Employee) -> &'a str {
        position_label(&employee.position).unwrap_or(&employee.position)
    }

    pub fn visible(&self) -> Vec<&Employee> {
        match &self.filter {
            Some(term) => filter_employees(&self.employees, term),
            None => self.employees.iter().collect(),
        }
    }

    pub async fn load(&mut self) -> Result<(), ClientError> {
        let employees = self
            .api
            .list_employees()
            .await
            .map_err(|err| logged("Error fetching employees", err))?;
        self.employees = employees;
        Ok(())
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.form.name = value,
            FormField::Email => self.form.email = value,
            FormField::Phone => self.form.phone = value,
            FormField::Position => self.form.position = value,
            FormField::EmployeeId => self.form.employee_id = value,
            FormField::Gender => self.form.gender = value,
        }
    }

    pub async fn select_image(&mut self, file_name: &str, bytes: Vec<u8>) -> Result<(), ClientError> {
        let path = self
            .api
            .upload_image(file_name, bytes)
            .await
            .map_err(|err| logged("Error uploading image", err))?;
        self.form.image = Some(path);
        Ok(())
    }

    pub async fn submit(&mut self) -> Result<Employee, ClientError> {
        self.form
            .validate()
            .map_err(|err| ClientError::Validation(describe(&err)))?;

        let saved = match self.mode {
            FormMode::Creating => {
                let created = self
                    .api
                    .create_employee(&self.form)
                    .await
                    .map_err(|err| logged("Error adding employee", err))?;
                self.employees.push(created.clone());
                created
            }
            FormMode::Editing { id } => {
                let updated = self
                    .api
                    .update_employee(id, &self.form)
                    .await
                    .map_err(|err| logged("Error updating employee", err))?;
                match self.employees.iter_mut().find(|e| e.id == id) {
                    Some(slot) => *slot = updated.clone(),
                    None => self.employees.push(updated.clone()),
                }
                updated
            }
        };

        self.reset_form();
        Ok(saved)
    }

    pub fn begin_edit(&mut self, id: Uuid) -> Result<(), ClientError> {
        let employee = self
            .employees
            .iter()
            .find(|e| e.id == id)
            .ok_or(ClientError::UnknownEmployee(id))?;
        self.form = employee.fields();
        self.mode = FormMode::Editing { id };
        Ok(())
    }

    pub fn reset_form(&mut self) {
        self.form = EmployeeFields::default();
        self.mode = FormMode::Creating;
    }

    pub async fn delete(&mut self, id: Uuid) -> Result<(), ClientError> {
        // form mode is left alone
        self.api
            .delete_employee(id)
            .await
            .map_err(|err| logged("Error deleting employee", err))?;
        self.employees.retain(|e| e.id != id);
        Ok(())
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub async fn search(&mut self) -> Result<(), ClientError> {
        if self.search_term.trim().is_empty() {
            self.load().await?;
            self.filter = None;
        } else {
            self.filter = Some(self.search_term.clone());
        }
        Ok(())
    }

    pub async fn reset_search(&mut self) -> Result<(), ClientError> {
        self.search_term.clear();
        self.search().await
    }
}
