use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = uplink::cli::Cli::parse();
    if let Err(e) = uplink::cmd::dispatch(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
