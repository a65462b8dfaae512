pub mod cli;

use crate::domain::ports::ConfigProvider;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "guestbook")]
#[command(about = "Append a guest to the guest list, then print the list")]
pub struct CliConfig {
    /// Name of the guest to append.
    #[arg(default_value = "Naomi")]
    pub guest: String,

    #[arg(long, default_value = "guest_list.txt")]
    pub guest_file: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "guestbook-list")]
#[command(about = "Print the guest list without modifying it")]
pub struct ListConfig {
    #[arg(long, default_value = "guest_list.txt")]
    pub guest_file: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn guest_file(&self) -> &str {
        &self.guest_file
    }
}

impl ConfigProvider for ListConfig {
    fn guest_file(&self) -> &str {
        &self.guest_file
    }
}
