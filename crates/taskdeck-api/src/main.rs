//! Taskdeck CLI and REST API entry point.
//!
//! Binary name: `tdeck`
//!
//! Parses CLI arguments, initializes the database and task service, then
//! dispatches to the appropriate command handler or starts the REST API
//! server.

use clap::Parser;
use clap_complete::generate;

use taskdeck_api::cli::{self, Cli, Commands};
use taskdeck_api::http;
use taskdeck_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,taskdeck=debug",
        _ => "trace",
    };
    let enable_otel = matches!(&cli.command, Commands::Serve { otel: true, .. });
    if let Err(e) = taskdeck_observe::tracing_setup::init_tracing(filter, enable_otel) {
        eprintln!("Warning: failed to initialize tracing: {e}");
    }

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "tdeck", &mut std::io::stdout());
        return Ok(());
    }

    // Initialize application state (DB, config, service)
    let state = AppState::init().await?;

    match cli.command {
        Commands::Add { title, description } => {
            cli::task::add_task(&state, title, description, cli.json).await?;
        }

        Commands::List {
            completed,
            pending,
            sort,
            order,
            limit,
        } => {
            let completed_filter = match (completed, pending) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            cli::task::list_tasks(&state, completed_filter, &sort, &order, limit, cli.json).await?;
        }

        Commands::Show { id } => {
            cli::task::show_task(&state, &id, cli.json).await?;
        }

        Commands::Done { id } => {
            cli::task::done_task(&state, &id, cli.json).await?;
        }

        Commands::Delete { id, force } => {
            cli::task::delete_task(&state, &id, force, cli.json).await?;
        }

        Commands::Status => {
            cli::status::status(&state, cli.json).await?;
        }

        Commands::Serve { port, host, .. } => {
            let host = host.unwrap_or_else(|| state.config.server.host.clone());
            let port = port.unwrap_or(state.config.server.port);

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!(
                "  {} Taskdeck API listening on {}",
                console::style("⚡").bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    taskdeck_observe::tracing_setup::shutdown_tracing();
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
