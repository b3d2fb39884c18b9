use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use mini_http::connection::HttpConnection;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{Instrument, debug, error, info, info_span, warn};

use crate::config::Config;
use crate::router::Router;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("failed to bind {address}: {source}")]
    Bind { address: String, source: io::Error },
}

/// A bound listener plus the router its connections are served with.
#[derive(Debug)]
pub struct Server {
    tcp_listener: TcpListener,
    router: Arc<Router>,
}

impl Server {
    pub async fn bind(config: &Config) -> Result<Self, ServerError> {
        let tcp_listener = TcpListener::bind(config.bind.as_str())
            .await
            .map_err(|source| ServerError::Bind { address: config.bind.clone(), source })?;

        Ok(Self { tcp_listener, router: Arc::new(Router::new(&config.directory)) })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.tcp_listener.local_addr()
    }

    /// Accepts connections forever, serving each one on its own task.
    pub async fn run(self) {
        match self.local_addr() {
            Ok(address) => info!(%address, "start listening"),
            Err(e) => warn!(cause = %e, "start listening on unknown address"),
        }

        let mut conn_id: u64 = 0;
        loop {
            let (tcp_stream, remote_addr) = match self.tcp_listener.accept().await {
                Ok(stream_and_addr) => stream_and_addr,
                Err(e) => {
                    warn!(cause = %e, "failed to accept");
                    continue;
                }
            };

            conn_id += 1;
            let router = Arc::clone(&self.router);
            let span = info_span!("conn", conn_id, %remote_addr);

            tokio::spawn(
                async move {
                    let (reader, writer) = tcp_stream.into_split();
                    let connection = HttpConnection::new(reader, writer);
                    match connection.process(router.as_ref()).await {
                        Ok(()) => debug!("finished serving connection"),
                        Err(e) => error!(cause = %e, "failed to handle conn"),
                    }
                }
                .instrument(span),
            );
        }
    }
}
