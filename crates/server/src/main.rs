use std::process::ExitCode;

use clap::Parser;
use mini_http_server::{Config, Server};
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    let subscriber = FmtSubscriber::builder().with_max_level(config.log_level).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("setting default subscriber failed: {e}");
        return ExitCode::FAILURE;
    }

    let server = match Server::bind(&config).await {
        Ok(server) => server,
        Err(e) => {
            error!(cause = %e, "bind server error");
            return ExitCode::FAILURE;
        }
    };

    tokio::select! {
        () = server.run() => ExitCode::SUCCESS,
        _ = tokio::signal::ctrl_c() => {
            info!("received ctrl-c, shutting down");
            ExitCode::SUCCESS
        }
    }
}
