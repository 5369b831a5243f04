pub mod appointment;
pub mod notice;
pub mod slot;
pub mod status;
pub mod user;

pub use appointment::{Appointment, AppointmentCreate, AppointmentStatus, SlotRef};
pub use notice::{Notice, NoticeLevel};
pub use slot::{Slot, SlotCreate};
pub use status::{AdminAction, SlotStatus, StatusFilter};
pub use user::UserInfo;
