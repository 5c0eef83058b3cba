use tracing::Level;

fn init_logging() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
}

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(error) = hdrcal_rs::run_cli().await {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
