//! HTTP/JSON directory client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::{DirectoryError, DirectoryService};
use crate::entities::{Employee, NewEmployee};

/// Directory service reached over HTTP.
///
/// Routes are resolved relative to the configured base URL:
///
/// | operation        | request                          |
/// |------------------|----------------------------------|
/// | all              | `GET employees`                  |
/// | by first name    | `GET employees/firstName/{v}`    |
/// | by last name     | `GET employees/lastName/{v}`     |
/// | by city          | `GET employees/city/{v}`         |
/// | by state         | `GET employees/state/{v}`        |
/// | by zip code      | `GET employees/zipCode/{v}`      |
/// | create           | `POST employees`                 |
/// | update           | `PUT employees/{id}`             |
/// | delete           | `DELETE employees/{id}`          |
pub struct HttpDirectory {
    client: Client,
    base_url: Url,
    api_token: Option<String>,
}

impl HttpDirectory {
    pub fn new(base_url: &str, timeout: Duration, api_token: Option<String>) -> Result<Self, DirectoryError> {
        let base_url =
            Url::parse(base_url).map_err(|e| DirectoryError::Other(format!("Invalid base URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(DirectoryError::Other(format!("Base URL '{}' cannot hold a path", base_url)));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DirectoryError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            api_token,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL; each segment is percent-encoded on its own.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, DirectoryError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| DirectoryError::Other(format!("Base URL '{}' cannot hold a path", self.base_url)))?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, DirectoryError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| DirectoryError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        if status == StatusCode::NOT_FOUND {
            Err(DirectoryError::NotFound(message))
        } else {
            Err(DirectoryError::Status {
                code: status.as_u16(),
                message,
            })
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, DirectoryError> {
        let url = self.endpoint(segments)?;
        log::debug!("GET {}", url);
        let response = self.send(self.client.get(url)).await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, DirectoryError> {
    response
        .json::<T>()
        .await
        .map_err(|e| DirectoryError::InvalidData(e.to_string()))
}

#[async_trait]
impl DirectoryService for HttpDirectory {
    fn kind(&self) -> &str {
        "http"
    }

    async fn fetch_all(&self) -> Result<Vec<Employee>, DirectoryError> {
        self.get_json(&["employees"]).await
    }

    async fn fetch_by_first_name(&self, first_name: &str) -> Result<Vec<Employee>, DirectoryError> {
        self.get_json(&["employees", "firstName", first_name]).await
    }

    async fn fetch_by_last_name(&self, last_name: &str) -> Result<Vec<Employee>, DirectoryError> {
        self.get_json(&["employees", "lastName", last_name]).await
    }

    async fn fetch_by_city(&self, city: &str) -> Result<Vec<Employee>, DirectoryError> {
        self.get_json(&["employees", "city", city]).await
    }

    async fn fetch_by_state(&self, state: &str) -> Result<Vec<Employee>, DirectoryError> {
        self.get_json(&["employees", "state", state]).await
    }

    async fn fetch_by_zip_code(&self, zip_code: &str) -> Result<Vec<Employee>, DirectoryError> {
        self.get_json(&["employees", "zipCode", zip_code]).await
    }

    async fn create_employee(&self, draft: NewEmployee) -> Result<Employee, DirectoryError> {
        let url = self.endpoint(&["employees"])?;
        log::debug!("POST {}", url);
        let response = self.send(self.client.post(url).json(&draft)).await?;
        decode(response).await
    }

    async fn update_employee(&self, employee: &Employee) -> Result<Employee, DirectoryError> {
        let url = self.endpoint(&["employees", &employee.employee_id])?;
        log::debug!("PUT {}", url);
        let response = self.send(self.client.put(url).json(employee)).await?;
        decode(response).await
    }

    async fn delete_employee(&self, employee_id: &str) -> Result<(), DirectoryError> {
        let url = self.endpoint(&["employees", employee_id])?;
        log::debug!("DELETE {}", url);
        self.send(self.client.delete(url)).await.map(|_| ())
    }
}
