pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig, ListConfig};
pub use core::guestbook::GuestBook;
pub use domain::model::GuestList;
pub use domain::ports::{ConfigProvider, GuestRegistry, Storage};
pub use utils::error::{GuestBookError, Result};
