// src/fetch/http.rs

use reqwest::Client;
use std::{path::Path, time::Duration};
use tracing::debug;
use url::Url;

use crate::error::LoadError;

/// Build the shared client. `timeout` bounds the whole request, body included.
pub fn build_client(timeout: Option<Duration>) -> reqwest::Result<Client> {
    let mut builder = Client::builder();
    if let Some(t) = timeout {
        builder = builder.timeout(t);
    }
    builder.build()
}

/// GET `url` once and return the body. Non-2xx is a [`LoadError::Fetch`].
pub async fn get_text(client: &Client, url: &Url) -> Result<String, LoadError> {
    debug!(%url, "fetching text");
    let network = |source| LoadError::Network {
        url: url.to_string(),
        source,
    };

    let resp = client.get(url.clone()).send().await.map_err(network)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(LoadError::Fetch {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let text = resp.text().await.map_err(network)?;
    debug!(%url, bytes = text.len(), "fetched");
    Ok(text)
}

pub async fn read_file(path: &Path) -> Result<String, LoadError> {
    debug!(path = %path.display(), "reading text");
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response on an ephemeral port.
    async fn serve_once(status_line: &'static str, body: &'static str) -> Result<Url> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            if let Ok((mut sock, _)) = listener.accept().await {
                let mut buf = [0u8; 2048];
                let _ = sock.read(&mut buf).await;
                let resp = format!(
                    "HTTP/1.1 {}\r\nContent-Type: text/csv; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = sock.write_all(resp.as_bytes()).await;
                let _ = sock.shutdown().await;
            }
        });
        Ok(Url::parse(&format!("http://{}/booths.csv", addr))?)
    }

    #[tokio::test]
    async fn test_get_text_success() -> Result<()> {
        let url = serve_once("200 OK", "攤位名稱,區域\n老王雜貨,A區").await?;
        let text = get_text(&Client::new(), &url).await?;
        assert_eq!(text, "攤位名稱,區域\n老王雜貨,A區");
        Ok(())
    }

    #[tokio::test]
    async fn test_get_text_not_found_carries_status() -> Result<()> {
        let url = serve_once("404 Not Found", "nope").await?;
        let err = get_text(&Client::new(), &url).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("404"));
        Ok(())
    }

    #[tokio::test]
    async fn test_timeout_is_network_error() -> Result<()> {
        // accepts the connection, reads the request, never answers
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            if let Ok((mut sock, _)) = listener.accept().await {
                let mut buf = [0u8; 2048];
                let _ = sock.read(&mut buf).await;
                tokio::time::sleep(Duration::from_secs(30)).await;
                drop(sock);
            }
        });

        let url = Url::parse(&format!("http://{}/booths.csv", addr))?;
        let client = build_client(Some(Duration::from_millis(200)))?;
        match get_text(&client, &url).await {
            Err(LoadError::Network { source, .. }) => assert!(source.is_timeout()),
            other => panic!("expected Network timeout, got {:?}", other),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_get_text_unreachable_is_network_error() -> Result<()> {
        // grab a free port, then close it so nothing is listening
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        drop(listener);

        let url = Url::parse(&format!("http://{}/booths.csv", addr))?;
        let client = build_client(Some(Duration::from_secs(5)))?;
        match get_text(&client, &url).await {
            Err(LoadError::Network { url: failed, .. }) => assert_eq!(failed, url.to_string()),
            other => panic!("expected Network error, got {:?}", other),
        }
        Ok(())
    }
}
