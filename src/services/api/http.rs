use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::{RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use super::AppointmentApi;
use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::{Appointment, AppointmentCreate, AppointmentStatus, Slot, SlotCreate};

const SLOTS: &str = "availableAppointments";
const APPOINTMENTS: &str = "appointments";

/// `reqwest` client for the `/users/...` scheduling endpoints. Keeps a cookie
/// store so session cookies set by the backend ride along on later calls.
pub struct HttpAppointmentApi {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpAppointmentApi {
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let client = reqwest::Client::builder().cookie_store(true).build()?;
        Self::with_client(base_url, client)
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = &config.api_session_cookie {
            let value = HeaderValue::from_str(cookie)
                .map_err(|e| AppError::Config(format!("invalid API_SESSION_COOKIE: {e}")))?;
            headers.insert(COOKIE, value);
        }

        let mut builder = reqwest::Client::builder()
            .cookie_store(true)
            .default_headers(headers);
        if let Some(timeout) = config.api_timeout {
            builder = builder.timeout(timeout);
        }

        Self::with_client(&config.api_base_url, builder.build()?)
    }

    pub fn with_client(base_url: &str, client: reqwest::Client) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::Config(format!("invalid API_BASE_URL {base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Config(format!("API_BASE_URL {base_url} cannot be a base")));
        }
        Ok(Self { base_url, client })
    }

    /// `{base}/users/{segments...}`, each segment percent-encoded.
    fn url(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Config(format!("API_BASE_URL {} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .push("users")
            .extend(segments);
        Ok(url)
    }

    async fn checked(&self, request: RequestBuilder) -> Result<Response, AppError> {
        let resp = request.send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let url = resp.url().to_string();
        let body = resp.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), %url, "scheduling API returned error");
        Err(AppError::from_response(status.as_u16(), &body))
    }

    async fn json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, AppError> {
        Ok(self.checked(request).await?.json::<T>().await?)
    }

    async fn text(&self, request: RequestBuilder) -> Result<String, AppError> {
        Ok(self.checked(request).await?.text().await?)
    }
}

#[async_trait]
impl AppointmentApi for HttpAppointmentApi {
    async fn list_slots(&self) -> Result<Vec<Slot>, AppError> {
        let url = self.url(&[SLOTS, "getAll"])?;
        self.json(self.client.get(url)).await
    }

    async fn list_available_slots(&self) -> Result<Vec<Slot>, AppError> {
        let url = self.url(&[SLOTS, "available"])?;
        self.json(self.client.get(url)).await
    }

    async fn list_unavailable_slots(&self) -> Result<Vec<Slot>, AppError> {
        let url = self.url(&[SLOTS, "unavailable"])?;
        self.json(self.client.get(url)).await
    }

    async fn get_slot(&self, id: i64) -> Result<Slot, AppError> {
        let url = self.url(&[SLOTS, "getById", &id.to_string()])?;
        self.json(self.client.get(url)).await
    }

    async fn create_slots(&self, body: &SlotCreate) -> Result<String, AppError> {
        let url = self.url(&[SLOTS, "create"])?;
        tracing::info!(date = %body.date, start = %body.start_time, end = %body.end_time, "creating slots");
        self.text(self.client.post(url).json(body)).await
    }

    async fn toggle_availability(&self, id: i64) -> Result<String, AppError> {
        let url = self.url(&[SLOTS, "updateAvailability", &id.to_string()])?;
        self.text(self.client.patch(url)).await
    }

    async fn delete_slot(&self, id: i64) -> Result<String, AppError> {
        let url = self.url(&[SLOTS, "delete", &id.to_string()])?;
        self.text(self.client.delete(url)).await
    }

    async fn list_appointments(&self) -> Result<Vec<Appointment>, AppError> {
        let url = self.url(&[APPOINTMENTS, "getAll"])?;
        self.json(self.client.get(url)).await
    }

    async fn get_appointment(&self, id: i64) -> Result<Appointment, AppError> {
        let url = self.url(&[APPOINTMENTS, "getById", &id.to_string()])?;
        self.json(self.client.get(url)).await
    }

    async fn appointments_by_status(
        &self,
        status: AppointmentStatus,
    ) -> Result<Vec<Appointment>, AppError> {
        let url = self.url(&[APPOINTMENTS, "status"])?;
        self.json(self.client.get(url).query(&[("status", status.as_str())]))
            .await
    }

    async fn appointments_by_user(&self, user_id: &str) -> Result<Vec<Appointment>, AppError> {
        let url = self.url(&[APPOINTMENTS, "user", user_id])?;
        self.json(self.client.get(url)).await
    }

    async fn create_appointment(&self, body: &AppointmentCreate) -> Result<Appointment, AppError> {
        let url = self.url(&[APPOINTMENTS, "create"])?;
        self.json(self.client.post(url).json(body)).await
    }

    async fn update_appointment_status(
        &self,
        id: i64,
        status: AppointmentStatus,
        address: Option<&str>,
    ) -> Result<String, AppError> {
        let url = self.url(&[APPOINTMENTS, "status", &id.to_string()])?;
        let mut query = vec![("status", status.as_str())];
        if let Some(address) = address.filter(|a| !a.is_empty()) {
            query.push(("address", address));
        }
        self.text(self.client.put(url).query(&query)).await
    }

    async fn delete_appointment(&self, id: i64) -> Result<String, AppError> {
        let url = self.url(&[APPOINTMENTS, "delete", &id.to_string()])?;
        self.text(self.client.delete(url)).await
    }
}
