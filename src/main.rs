use distributed_calc::agent::client::AgentPool;
use distributed_calc::cli;
use distributed_calc::storage::sqlite::ExpressionStore;
use distributed_calc::tasks::dispatcher::Dispatcher;
use distributed_calc::tasks::handlers::{
    handle_add, handle_get_expression, handle_get_task, handle_list, handle_operations,
    handle_receive_result,
};
use distributed_calc::tasks::store::TaskStore;

use axum::{
    routing::{get, post},
    Extension, Router,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let parsed = match cli::parse_orchestrator_args(&args[1..]) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!(
                "Usage: {} --bind <addr:port> [--agent <addr:port>]... [--db <path>]",
                args[0]
            );
            eprintln!(
                "Example: {} --bind 127.0.0.1:8080 --agent 127.0.0.1:8081",
                args[0]
            );
            std::process::exit(1);
        }
    };

    tracing::info!("Starting orchestrator on {}", parsed.bind_addr);
    if parsed.agents.is_empty() {
        tracing::warn!("No agents configured; tasks can only complete via the poll gateway");
    } else {
        tracing::info!("Agents: {:?}", parsed.agents);
    }

    // 1. Durable expression records:
    let records = ExpressionStore::connect(&parsed.db_url).await?;

    // 2. In-memory task state:
    let task_store = TaskStore::new();

    // 3. Dispatch:
    let agents = AgentPool::new(parsed.agents);
    let dispatcher = Dispatcher::new(task_store.clone(), records.clone(), agents);

    // 4. HTTP Router:
    let app = Router::new()
        .route("/add", get(handle_add))
        .route("/expression", get(handle_get_expression))
        .route("/list", get(handle_list))
        .route("/operations", get(handle_operations))
        .route("/getTask", get(handle_get_task))
        .route("/receiveResult", post(handle_receive_result))
        .layer(Extension(dispatcher))
        .layer(Extension(task_store))
        .layer(Extension(records));

    tracing::info!("Orchestrator listening on {}", parsed.bind_addr);

    let listener = tokio::net::TcpListener::bind(parsed.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
