//! cert-paging: pagination window service for the certification catalog.

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cert_paging::{Args, Config, PagingServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug {
        Level::DEBUG
    } else if args.silent {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::from(args);
    let server = PagingServer::new(config);

    println!(
        r#"
Pagination service is starting at {}

Try: curl '{}/pagination?page=1&radius=3&total_pages=10'

Press Ctrl+C to stop the server.
"#,
        server.bind_address(),
        server.base_url()
    );

    server.run().await
}
