use crate::config::AppConfig;
use crate::services::api::AppointmentApi;
use crate::services::booking::InFlight;
use crate::services::notifications::Notifier;

pub struct AppState {
    pub config: AppConfig,
    pub api: Box<dyn AppointmentApi>,
    pub notifier: Notifier,
    pub bookings: InFlight,
}

impl AppState {
    pub fn new(config: AppConfig, api: Box<dyn AppointmentApi>) -> Self {
        Self {
            config,
            api,
            notifier: Notifier::default(),
            bookings: InFlight::default(),
        }
    }
}
