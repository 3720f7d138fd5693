//! Shared helpers for in-crate tests: a real HTTP server on an ephemeral
//! port standing in for the backend.

use std::net::SocketAddr;

use axum::Router;
use url::Url;

use crate::backend::BackendClient;
use crate::config::Config;

pub(crate) async fn spawn_backend(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

pub(crate) fn client_for(addr: SocketAddr) -> BackendClient {
    let url = Url::parse(&format!("http://{addr}")).unwrap();
    BackendClient::new(&Config::new(url, "test-key")).unwrap()
}

/// A client pointed at a port that is known to refuse connections.
pub(crate) async fn unreachable_client() -> BackendClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    client_for(addr)
}
