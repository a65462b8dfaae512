use clap::Parser;
use guestbook::utils::logger;
use guestbook::{CliConfig, ConfigProvider, GuestBook, GuestRegistry, LocalStorage};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting guestbook");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let storage = LocalStorage::new(".".to_string());
    let book = GuestBook::new(storage, config.guest_file().to_string());

    if let Err(e) = run(&book, &config.guest).await {
        tracing::error!("Guestbook update failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run<R: GuestRegistry>(book: &R, guest: &str) -> guestbook::Result<()> {
    book.add_guest(guest).await?;
    println!("Added new guest: {}", guest);

    let guests = book.guest_list().await?;
    println!("Guest List:");
    println!("{}", guests);

    Ok(())
}
