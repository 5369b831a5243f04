pub mod admin;
pub mod api;
pub mod booking;
pub mod generator;
pub mod notifications;
pub mod projection;
