use clap::Parser;
use guestbook::utils::logger;
use guestbook::{ConfigProvider, GuestBook, GuestRegistry, ListConfig, LocalStorage};

#[tokio::main]
async fn main() {
    let config = ListConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting guestbook-list");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let storage = LocalStorage::new(".".to_string());
    let book = GuestBook::new(storage, config.guest_file().to_string());

    match book.guest_list().await {
        Ok(guests) => {
            println!("Guest List:");
            println!("{}", guests);
        }
        Err(e) => {
            tracing::error!("Reading guest list failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
