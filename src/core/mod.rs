pub mod guestbook;

pub use crate::domain::model::GuestList;
pub use crate::domain::ports::{ConfigProvider, GuestRegistry, Storage};
pub use crate::utils::error::Result;
