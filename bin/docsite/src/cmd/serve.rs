//! Serve command - preview rendered chrome in a browser

use std::{net::SocketAddr, path::Path};

use color_eyre::eyre::{Result, WrapErr, bail};
use tokio::net::TcpListener;

use crate::server::create_router;

/// Run the serve command.
///
/// Serves `dir` on localhost until interrupted.
pub async fn run(dir: &Path, port: u16) -> Result<()> {
    if !dir.is_dir() {
        bail!(
            "Output directory {} does not exist, run `docsite render` first",
            dir.display()
        );
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr)
        .await
        .wrap_err_with(|| format!("Failed to bind {addr}"))?;

    tracing::info!(%addr, ?dir, "Serving preview");
    println!();
    println!("  Preview at http://{addr}/");
    println!("  Press Ctrl+C to stop");
    println!();

    axum::serve(listener, create_router(dir))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("Server error")?;

    tracing::info!("Preview server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
    }
}

#[cfg(test)]
mod tests {
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpStream,
    };

    use super::*;

    #[tokio::test]
    async fn test_serve_missing_dir() {
        let result = run(Path::new("/nonexistent/public"), 0).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }

    #[tokio::test]
    async fn test_router_serves_files() {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(dir.path().join("index.html"), "<h1>preview</h1>").expect("write");

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        let router = create_router(dir.path());
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        let mut stream = TcpStream::connect(addr).await.expect("connect");
        stream
            .write_all(b"GET /index.html HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .expect("write request");
        let mut response = String::new();
        stream.read_to_string(&mut response).await.expect("read response");

        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.contains("<h1>preview</h1>"));
    }
}
