pub mod http;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::{Appointment, AppointmentCreate, AppointmentStatus, Slot, SlotCreate};

/// The upstream scheduling REST API. Mutations return the backend's
/// confirmation message.
#[async_trait]
pub trait AppointmentApi: Send + Sync {
    async fn list_slots(&self) -> Result<Vec<Slot>, AppError>;

    async fn list_available_slots(&self) -> Result<Vec<Slot>, AppError>;

    async fn list_unavailable_slots(&self) -> Result<Vec<Slot>, AppError>;

    async fn get_slot(&self, id: i64) -> Result<Slot, AppError>;

    async fn create_slots(&self, body: &SlotCreate) -> Result<String, AppError>;

    async fn toggle_availability(&self, id: i64) -> Result<String, AppError>;

    async fn delete_slot(&self, id: i64) -> Result<String, AppError>;

    async fn list_appointments(&self) -> Result<Vec<Appointment>, AppError>;

    async fn get_appointment(&self, id: i64) -> Result<Appointment, AppError>;

    async fn appointments_by_status(
        &self,
        status: AppointmentStatus,
    ) -> Result<Vec<Appointment>, AppError>;

    async fn appointments_by_user(&self, user_id: &str) -> Result<Vec<Appointment>, AppError>;

    async fn create_appointment(&self, body: &AppointmentCreate) -> Result<Appointment, AppError>;

    async fn update_appointment_status(
        &self,
        id: i64,
        status: AppointmentStatus,
        address: Option<&str>,
    ) -> Result<String, AppError>;

    async fn delete_appointment(&self, id: i64) -> Result<String, AppError>;
}
