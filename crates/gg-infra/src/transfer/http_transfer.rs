use std::path::{Path, PathBuf};

use async_trait::async_trait;
use futures_util::StreamExt;
use gg_core::ports::{TransferError, TransferPort, TransferReceipt};
use gg_core::TaskId;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, debug_span, warn, Instrument};

/// Streams a remote resource into a local file over HTTP.
///
/// The body goes to `{target}.{task_id}.part` first and is renamed over the
/// target once complete, so two transfers of the same resource never
/// interleave bytes and the target is never left half-written.
pub struct HttpTransfer {
    http: reqwest::Client,
}

impl HttpTransfer {
    pub fn new() -> Result<Self, TransferError> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("gifgrid/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransferError::Transport(e.to_string()))?;
        Ok(Self { http })
    }

    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

fn part_path(target: &Path, task_id: &TaskId) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(format!(".{task_id}.part"));
    target.with_file_name(name)
}

async fn write_body(
    response: reqwest::Response,
    part: &Path,
) -> Result<u64, TransferError> {
    let mut file = fs::File::create(part)
        .await
        .map_err(|e| TransferError::Storage(e.to_string()))?;

    let mut written: u64 = 0;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| TransferError::Transport(e.to_string()))?;
        file.write_all(&chunk)
            .await
            .map_err(|e| TransferError::Storage(e.to_string()))?;
        written += chunk.len() as u64;
    }
    file.flush()
        .await
        .map_err(|e| TransferError::Storage(e.to_string()))?;
    Ok(written)
}

async fn discard_part(part: &Path) {
    if let Err(cleanup) = fs::remove_file(part).await {
        warn!(error = %cleanup, "failed to remove partial download");
    }
}

#[async_trait]
impl TransferPort for HttpTransfer {
    async fn transfer(
        &self,
        url: &str,
        target: &Path,
        task_id: &TaskId,
    ) -> Result<TransferReceipt, TransferError> {
        let span = debug_span!(
            "infra.transfer.http",
            task_id = %task_id,
            target = %target.display(),
        );

        async {
            let response = self
                .http
                .get(url)
                .send()
                .await
                .map_err(|e| TransferError::Transport(e.to_string()))?;

            let status = response.status().as_u16();
            if status != 200 {
                debug!(status, "server refused transfer; target untouched");
                return Ok(TransferReceipt {
                    status,
                    bytes_written: 0,
                });
            }

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| TransferError::Storage(e.to_string()))?;
            }

            let part = part_path(target, task_id);
            let written = match write_body(response, &part).await {
                Ok(written) => written,
                Err(err) => {
                    discard_part(&part).await;
                    return Err(err);
                }
            };

            if let Err(err) = fs::rename(&part, target).await {
                discard_part(&part).await;
                return Err(TransferError::Storage(err.to_string()));
            }
            debug!(bytes = written, "transfer complete");

            Ok(TransferReceipt {
                status,
                bytes_written: written,
            })
        }
        .instrument(span)
        .await
    }
}
