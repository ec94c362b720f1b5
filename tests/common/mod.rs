#![allow(dead_code)]

use actix_web::web;
use employee_directory::handlers::file::UploadDir;
use employee_directory::store::{EmployeeStore, MemoryEmployeeStore};
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;

pub const BOUNDARY: &str = "----directory-test-boundary";

pub fn store_data(store: MemoryEmployeeStore) -> web::Data<dyn EmployeeStore> {
    let store: Arc<dyn EmployeeStore> = Arc::new(store);
    web::Data::from(store)
}

pub fn upload_data(dir: &Path) -> web::Data<UploadDir> {
    web::Data::new(UploadDir(dir.to_path_buf()))
}

pub fn jane() -> Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@x.com",
        "phone": "555-1234",
        "position": "Tester",
        "employeeId": "E1",
        "gender": "Female",
    })
}

/// A part is `(field name, file name, bytes)`; parts without a file name are
/// sent as plain text fields.
pub fn multipart_body(parts: &[(&str, Option<&str>, &[u8])]) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    for (name, file_name, data) in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        let headers = match file_name {
            Some(file_name) => format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                name, file_name
            ),
            None => format!(
                "Content-Disposition: form-data; name=\"{}\"\r\nContent-Type: text/plain\r\n\r\n",
                name
            ),
        };
        body.extend_from_slice(headers.as_bytes());
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    (format!("multipart/form-data; boundary={}", BOUNDARY), body)
}

pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("read upload dir")
        .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
