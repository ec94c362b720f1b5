use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Position values offered by the form, paired with their display labels.
/// The store keeps `position` as free text.
pub const POSITIONS: [(&str, &str); 4] = [
    ("Technician", "IT technician"),
    ("Specialist", "Support specialist"),
    ("Tester", "Quality assurance tester"),
    ("WebDev", "Web developer"),
];

/// Display label for a position value; `None` for free-text positions.
pub fn position_label(value: &str) -> Option<&'static str> {
    POSITIONS
        .iter()
        .find(|(option, _)| *option == value)
        .map(|(_, label)| *label)
}

/// Everything about an employee except the store-assigned id.
#[derive(Deserialize, Serialize, Validate, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFields {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    pub position: String,
    #[validate(length(min = 1, message = "employeeId is required"))]
    pub employee_id: String,
    #[validate(length(min = 1, message = "gender is required"))]
    pub gender: String,
    /// Path of an uploaded image, e.g. `/uploads/1700000000000.png`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub employee_id: String,
    pub gender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Employee {
    pub fn new(id: Uuid, fields: EmployeeFields) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            position: fields.position,
            employee_id: fields.employee_id,
            gender: fields.gender,
            image: fields.image,
        }
    }

    pub fn fields(&self) -> EmployeeFields {
        EmployeeFields {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            position: self.position.clone(),
            employee_id: self.employee_id.clone(),
            gender: self.gender.clone(),
            image: self.image.clone(),
        }
    }
}
