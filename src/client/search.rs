use crate::models::employee::Employee;

fn matches(employee: &Employee, needle: &str) -> bool {
    [
        &employee.name,
        &employee.email,
        &employee.phone,
        &employee.position,
        &employee.employee_id,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Case-insensitive substring search over name, email, phone, position and
/// employee id. An empty term keeps everything.
pub fn filter_employees<'a>(employees: &'a [Employee], term: &str) -> Vec<&'a Employee> {
    let needle = term.to_lowercase();
    employees.iter().filter(|e| matches(e, &needle)).collect()
}
