#[tokio::main]
async fn main() {
    if let Err(e) = vimeo_scribe::run().await {
        eprintln!("vimeo-scribe: {}", e);
        std::process::exit(1);
    }
}
