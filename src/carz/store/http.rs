use super::CarStore;
use crate::error::{CarzError, Result};
use crate::model::{Car, CarDraft};
use log::debug;
use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;

/// The production backend: five thin wrappers over the collection endpoint.
pub struct HttpStore {
    endpoint: std::result::Result<String, String>,
    client: Client,
}

/// PUT body: the full record, id included. The server takes updates against
/// the collection root rather than `/{id}`.
#[derive(Serialize)]
struct UpdatePayload<'a> {
    id: i64,
    #[serde(flatten)]
    draft: &'a CarDraft,
}

impl HttpStore {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Ok(endpoint.into()),
            client: Client::new(),
        }
    }

    /// A store whose endpoint could not be resolved. Every operation fails
    /// with the given configuration message instead of sending a request,
    /// so commands that never touch the store (config) still work.
    pub fn unconfigured(reason: impl Into<String>) -> Self {
        Self {
            endpoint: Err(reason.into()),
            client: Client::new(),
        }
    }

    fn endpoint(&self) -> Result<&str> {
        match &self.endpoint {
            Ok(endpoint) => Ok(endpoint),
            Err(reason) => Err(CarzError::Config(reason.clone())),
        }
    }

    fn car_url(&self, id: i64) -> Result<String> {
        Ok(format!("{}/{}", self.endpoint()?, id))
    }
}

/// Normalizes a non-2xx response into an error carrying the status and the
/// server's `message` field when the body is JSON, the raw body otherwise.
fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    let message = match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(json) => json
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or(body),
        Err(_) => body,
    };

    debug!("request failed: HTTP {} ({})", status.as_u16(), message);
    Err(CarzError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Reads a JSON body, or `None` when the server answered without one.
fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<Option<T>> {
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false);

    if !is_json {
        return Ok(None);
    }
    Ok(Some(response.json()?))
}

/// Rewrites a 404 into a not-found error for calls that address one id.
fn not_found_as(err: CarzError, id: i64) -> CarzError {
    match err {
        CarzError::Api { status: 404, .. } => CarzError::CarNotFound(id),
        other => other,
    }
}

impl CarStore for HttpStore {
    fn list_cars(&self) -> Result<Vec<Car>> {
        let endpoint = self.endpoint()?;
        debug!("GET {}", endpoint);
        let response = self.client.get(endpoint).send()?;
        let response = check_status(response)?;
        Ok(read_json(response)?.unwrap_or_default())
    }

    fn get_car(&self, id: i64) -> Result<Car> {
        let url = self.car_url(id)?;
        debug!("GET {}", url);
        let response = self.client.get(&url).send()?;
        let response = check_status(response).map_err(|e| not_found_as(e, id))?;

        let status = response.status().as_u16();
        read_json(response)?.ok_or(CarzError::Api {
            status,
            message: "empty response body".to_string(),
        })
    }

    fn create_car(&mut self, draft: &CarDraft) -> Result<Option<Car>> {
        let endpoint = self.endpoint()?;
        debug!("POST {}", endpoint);
        let response = self.client.post(endpoint).json(draft).send()?;
        let response = check_status(response)?;
        read_json(response)
    }

    fn update_car(&mut self, id: i64, draft: &CarDraft) -> Result<Option<Car>> {
        let endpoint = self.endpoint()?;
        debug!("PUT {} (id {})", endpoint, id);
        let payload = UpdatePayload { id, draft };
        let response = self.client.put(endpoint).json(&payload).send()?;
        let response = check_status(response).map_err(|e| not_found_as(e, id))?;
        read_json(response)
    }

    fn delete_car(&mut self, id: i64) -> Result<()> {
        let url = self.car_url(id)?;
        debug!("DELETE {}", url);
        let response = self.client.delete(&url).send()?;
        check_status(response).map_err(|e| not_found_as(e, id))?;
        debug!("car {} deleted", id);
        Ok(())
    }
}
