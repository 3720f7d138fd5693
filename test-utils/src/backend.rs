//! Backend plumbing for integration tests: a real HTTP server on an
//! ephemeral port standing in for the remote backend.

use std::net::SocketAddr;

use axum::Router;
use courier_bridge::backend::BackendClient;
use courier_bridge::config::Config;
use url::Url;

/// Serves `router` on an ephemeral loopback port and returns its address.
pub async fn spawn_backend(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// A client pointed at a live backend address.
pub fn client_for(addr: SocketAddr) -> BackendClient {
    let url = Url::parse(&format!("http://{addr}")).unwrap();
    BackendClient::new(&Config::new(url, "test-key")).unwrap()
}

/// A client pointed at a port that is known to refuse connections.
pub async fn unreachable_client() -> BackendClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    client_for(addr)
}
