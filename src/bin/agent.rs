use distributed_calc::agent::service;
use distributed_calc::cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let parsed = match cli::parse_agent_args(&args[1..]) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Usage: {} --bind <addr:port>", args[0]);
            eprintln!("Example: {} --bind 127.0.0.1:8081", args[0]);
            std::process::exit(1);
        }
    };

    let listener = tokio::net::TcpListener::bind(parsed.bind_addr).await?;
    tracing::info!("Agent listening on {}", parsed.bind_addr);

    service::serve(listener).await
}
