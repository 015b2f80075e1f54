use futures_util::StreamExt;
use reqwest::Client;
use std::io::Write;
use std::path::Path;

use crate::error::{InstallError, Result};
use crate::utils;

/// Downloads a release archive and unpacks it under an install directory.
///
/// Returning `Ok` means the download and unpack finished; it does not promise
/// the unpacked files are already visible to other readers.
#[allow(async_fn_in_trait)]
pub trait BinaryAcquirer {
    async fn install(&self, url: &str, install_dir: &Path) -> Result<()>;
}

/// Fetches `.tar.gz` release assets over HTTP.
pub struct HttpAcquirer {
    http_client: Client,
}

impl HttpAcquirer {
    pub fn new() -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(concat!("roomservice-install/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| InstallError::acquisition("", e))?;

        Ok(Self { http_client })
    }

    /// Stream the response body for `url` into a temporary file
    async fn download(&self, url: &str) -> Result<tempfile::NamedTempFile> {
        tracing::info!("Downloading {}", url);

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| InstallError::acquisition(url, format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(InstallError::acquisition(
                url,
                format!("download failed with status {status}"),
            ));
        }

        let mut temp_file = tempfile::Builder::new()
            .suffix(".tar.gz")
            .tempfile()
            .map_err(|e| InstallError::acquisition(url, format!("failed to create temp file: {e}")))?;

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk =
                chunk.map_err(|e| InstallError::acquisition(url, format!("failed to read chunk: {e}")))?;
            temp_file
                .write_all(&chunk)
                .map_err(|e| InstallError::acquisition(url, format!("failed to write temp file: {e}")))?;
        }
        temp_file
            .flush()
            .map_err(|e| InstallError::acquisition(url, format!("failed to write temp file: {e}")))?;

        Ok(temp_file)
    }
}

impl BinaryAcquirer for HttpAcquirer {
    async fn install(&self, url: &str, install_dir: &Path) -> Result<()> {
        let archive = self.download(url).await?;

        tracing::debug!("Unpacking into {}", install_dir.display());
        std::fs::create_dir_all(install_dir)
            .and_then(|_| utils::extract_tar_gz(archive.path(), install_dir))
            .map_err(|e| InstallError::acquisition(url, format!("extraction failed: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use tempfile::tempdir;

    fn tar_gz_with(path: &str, contents: &[u8]) -> Vec<u8> {
        let encoder = GzEncoder::new(Vec::new(), Compression::default());
        let mut builder = tar::Builder::new(encoder);

        let mut header = tar::Header::new_gnu();
        header.set_size(contents.len() as u64);
        header.set_mode(0o755);
        header.set_cksum();
        builder.append_data(&mut header, path, contents).unwrap();

        builder.into_inner().unwrap().finish().unwrap()
    }

    #[tokio::test]
    async fn test_install_unpacks_archive() {
        let mut server = mockito::Server::new_async().await;
        let body = tar_gz_with("bin/x86_64-unknown-linux-musl/roomservice", b"#!/bin/sh\n");
        let mock = server
            .mock("GET", "/releases/download/v1.2.3/x86_64-unknown-linux-musl.tar.gz")
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let dir = tempdir().unwrap();
        let install_dir = dir.path().join("roomservice");
        let url = format!(
            "{}/releases/download/v1.2.3/x86_64-unknown-linux-musl.tar.gz",
            server.url()
        );

        HttpAcquirer::new()
            .unwrap()
            .install(&url, &install_dir)
            .await
            .unwrap();

        mock.assert_async().await;
        let extracted = install_dir.join("bin/x86_64-unknown-linux-musl/roomservice");
        assert_eq!(std::fs::read(extracted).unwrap(), b"#!/bin/sh\n");
    }

    #[tokio::test]
    async fn test_http_error_is_acquisition_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/missing.tar.gz")
            .with_status(404)
            .create_async()
            .await;

        let dir = tempdir().unwrap();
        let url = format!("{}/missing.tar.gz", server.url());
        let err = HttpAcquirer::new()
            .unwrap()
            .install(&url, dir.path())
            .await
            .unwrap_err();

        mock.assert_async().await;
        match err {
            InstallError::Acquisition { url: failed, message } => {
                assert_eq!(failed, url);
                assert!(message.contains("404"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_corrupt_archive_is_acquisition_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/broken.tar.gz")
            .with_status(200)
            .with_body("definitely not gzip")
            .create_async()
            .await;

        let dir = tempdir().unwrap();
        let url = format!("{}/broken.tar.gz", server.url());
        let err = HttpAcquirer::new()
            .unwrap()
            .install(&url, dir.path())
            .await
            .unwrap_err();

        assert!(matches!(err, InstallError::Acquisition { .. }));
        assert!(err.to_string().contains("extraction failed"));
    }
}
