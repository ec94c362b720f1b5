use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Response;
use url::Url;
use uuid::Uuid;

use super::error::ClientError;
use crate::models::employee::{Employee, EmployeeFields};
use crate::models::file::UploadedImage;

/// The calls the directory UI makes against the backend.
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    async fn list_employees(&self) -> Result<Vec<Employee>, ClientError>;
    async fn create_employee(&self, fields: &EmployeeFields) -> Result<Employee, ClientError>;
    async fn update_employee(&self, id: Uuid, fields: &EmployeeFields) -> Result<Employee, ClientError>;
    async fn delete_employee(&self, id: Uuid) -> Result<(), ClientError>;
    /// Uploads an image and returns the path the server stored it under.
    async fn upload_image(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, ClientError>;
}

pub struct HttpDirectoryApi {
    base: Url,
    http: reqwest::Client,
}

impl HttpDirectoryApi {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            base,
            http: reqwest::Client::new(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base.join(path)?)
    }
}

async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl DirectoryApi for HttpDirectoryApi {
    async fn list_employees(&self) -> Result<Vec<Employee>, ClientError> {
        let response = self.http.get(self.endpoint("employees")?).send().await?;
        Ok(check(response).await?.json().await?)
    }

    async fn create_employee(&self, fields: &EmployeeFields) -> Result<Employee, ClientError> {
        let response = self
            .http
            .post(self.endpoint("employees")?)
            .json(fields)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    async fn update_employee(&self, id: Uuid, fields: &EmployeeFields) -> Result<Employee, ClientError> {
        let response = self
            .http
            .put(self.endpoint(&format!("employees/{}", id))?)
            .json(fields)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    async fn delete_employee(&self, id: Uuid) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.endpoint(&format!("employees/{}", id))?)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    async fn upload_image(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, ClientError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("application/octet-stream")?;
        let form = Form::new().part("image", part);
        let response = self
            .http
            .post(self.endpoint("upload")?)
            .multipart(form)
            .send()
            .await?;
        let uploaded: UploadedImage = check(response).await?.json().await?;
        Ok(uploaded.image_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_resolve_under_a_base_path() {
        let api = HttpDirectoryApi::new("http://localhost:5000/api").unwrap();
        assert_eq!(api.endpoint("employees").unwrap().as_str(), "http://localhost:5000/api/employees");

        let api = HttpDirectoryApi::new("http://localhost:5000").unwrap();
        assert_eq!(api.endpoint("upload").unwrap().as_str(), "http://localhost:5000/upload");
    }

    #[test]
    fn garbage_base_url_is_rejected() {
        assert!(matches!(HttpDirectoryApi::new("not a url"), Err(ClientError::InvalidUrl(_))));
    }
}
