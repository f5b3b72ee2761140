//! Unix-socket connection to the privileged background process.
//!
//! One task owns the stream. Requests are serialized through a channel,
//! responses are correlated back to callers by `id`, and unsolicited
//! visibility signals are forwarded on their own channel.

use crate::domain::browser::{BrowserFacade, PaletteSignal};
use crate::domain::models::CommandEntry;
use crate::infrastructure::wire::{self, InboundFrame, OutboundFrame};
use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::unix::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::UnixStream;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

enum ConnectionRequest {
    /// Fire-and-forget frame.
    Send(OutboundFrame),
    /// Frame that expects a response with the same `id`.
    Call(OutboundFrame, oneshot::Sender<InboundFrame>),
}

pub struct BackgroundProcess {
    requests: mpsc::Sender<ConnectionRequest>,
    next_id: AtomicU64,
}

impl BackgroundProcess {
    /// Connect to the background process socket. Returns the facade plus the
    /// stream of visibility signals it pushes.
    pub async fn connect(path: &Path) -> Result<(Self, mpsc::Receiver<PaletteSignal>)> {
        let stream = UnixStream::connect(path)
            .await
            .with_context(|| format!("connecting to background socket {}", path.display()))?;
        let (reader, writer) = stream.into_split();
        let (request_tx, request_rx) = mpsc::channel(32);
        let (signal_tx, signal_rx) = mpsc::channel(16);
        tokio::spawn(connection_task(reader, writer, request_rx, signal_tx));
        Ok((
            Self {
                requests: request_tx,
                next_id: AtomicU64::new(1),
            },
            signal_rx,
        ))
    }
}

async fn connection_task(
    reader: OwnedReadHalf,
    mut writer: OwnedWriteHalf,
    mut requests: mpsc::Receiver<ConnectionRequest>,
    signal_tx: mpsc::Sender<PaletteSignal>,
) {
    let mut lines = BufReader::new(reader).lines();
    // In-flight calls. An entry is removed on the first response with its
    // id, so a duplicate response cannot be delivered twice.
    let mut pending: HashMap<u64, oneshot::Sender<InboundFrame>> = HashMap::new();

    loop {
        tokio::select! {
            request = requests.recv() => {
                let Some(request) = request else { break };
                let frame = match request {
                    ConnectionRequest::Send(frame) => frame,
                    ConnectionRequest::Call(frame, reply) => {
                        if let Some(id) = frame.id {
                            pending.insert(id, reply);
                        }
                        frame
                    }
                };
                if write_frame(&mut writer, &frame).await.is_err() {
                    break;
                }
            }
            line = lines.next_line() => {
                match line {
                    Ok(Some(text)) => route_inbound(&text, &mut pending, &signal_tx).await,
                    Ok(None) => {
                        debug!("background process closed the connection");
                        break;
                    }
                    Err(error) => {
                        warn!(%error, "background socket read failed");
                        break;
                    }
                }
            }
        }
    }
    // Dropping `pending` wakes every in-flight caller with an error.
}

async fn write_frame(writer: &mut OwnedWriteHalf, frame: &OutboundFrame) -> Result<()> {
    let mut line = serde_json::to_string(frame)?;
    line.push('\n');
    writer.write_all(line.as_bytes()).await?;
    Ok(())
}

async fn route_inbound(
    text: &str,
    pending: &mut HashMap<u64, oneshot::Sender<InboundFrame>>,
    signal_tx: &mpsc::Sender<PaletteSignal>,
) {
    let frame: InboundFrame = match serde_json::from_str(text) {
        Ok(frame) => frame,
        Err(error) => {
            warn!(%error, "unparseable frame from background process");
            return;
        }
    };

    if let Some(id) = frame.id {
        match pending.remove(&id) {
            Some(reply) => {
                let _ = reply.send(frame);
            }
            None => debug!(id, "response for an unknown or already answered call"),
        }
        return;
    }

    match frame.action.as_deref() {
        Some("open-warp") => {
            let _ = signal_tx.send(PaletteSignal::Open).await;
        }
        Some("close-warp") => {
            let _ = signal_tx.send(PaletteSignal::Close).await;
        }
        other => debug!(action = ?other, "ignoring unknown background frame"),
    }
}

#[async_trait]
impl BrowserFacade for BackgroundProcess {
    async fn get_tabs(&self) -> Result<Vec<CommandEntry>> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (reply_tx, reply_rx) = oneshot::channel();
        self.requests
            .send(ConnectionRequest::Call(
                OutboundFrame::request(id, "get-tabs"),
                reply_tx,
            ))
            .await
            .map_err(|_| anyhow!("background connection is closed"))?;
        let frame = reply_rx
            .await
            .context("connection dropped before the get-tabs response")?;
        wire::parse_tabs(frame.tabs)
    }

    async fn relay(&self, action: &str, entry: &CommandEntry, query: &str) -> Result<()> {
        self.requests
            .send(ConnectionRequest::Send(OutboundFrame::relay(
                action, entry, query,
            )))
            .await
            .map_err(|_| anyhow!("background connection is closed"))
    }
}

/// Stand-in facade when no background process is reachable. Remote work
/// fails loudly in the log; the palette itself keeps working.
pub struct Disconnected;

#[async_trait]
impl BrowserFacade for Disconnected {
    async fn get_tabs(&self) -> Result<Vec<CommandEntry>> {
        bail!("no background process connected")
    }

    async fn relay(&self, _action: &str, _entry: &CommandEntry, _query: &str) -> Result<()> {
        bail!("no background process connected")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
    use tokio::net::UnixListener;

    struct Harness {
        _dir: tempfile::TempDir,
        listener: UnixListener,
        path: std::path::PathBuf,
    }

    fn bind() -> Harness {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("warp.sock");
        let listener = UnixListener::bind(&path).unwrap();
        Harness {
            _dir: dir,
            listener,
            path,
        }
    }

    #[tokio::test]
    async fn get_tabs_round_trips_over_the_socket() {
        let harness = bind();

        let server = tokio::spawn(async move {
            let (stream, _) = harness.listener.accept().await.unwrap();
            let (reader, mut writer) = stream.into_split();
            let mut lines = BufReader::new(reader).lines();

            let request: serde_json::Value =
                serde_json::from_str(&lines.next_line().await.unwrap().unwrap()).unwrap();
            assert_eq!(request["action"], "get-tabs");
            let id = request["id"].as_u64().unwrap();

            let response = json!({
                "id": id,
                "tabs": [
                    { "title": "Example", "url": "https://example.com", "id": 5, "windowId": 1 }
                ]
            });
            let mut line = response.to_string();
            line.push('\n');
            writer.write_all(line.as_bytes()).await.unwrap();
        });

        let (process, _signals) = BackgroundProcess::connect(&harness.path).await.unwrap();
        let tabs = process.get_tabs().await.unwrap();
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].title, "Example");
        assert!(tabs[0].is_dynamic);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn null_tabs_payload_is_an_error() {
        let harness = bind();

        let server = tokio::spawn(async move {
            let (stream, _) = harness.listener.accept().await.unwrap();
            let (reader, mut writer) = stream.into_split();
            let mut lines = BufReader::new(reader).lines();

            let request: serde_json::Value =
                serde_json::from_str(&lines.next_line().await.unwrap().unwrap()).unwrap();
            let response = json!({ "id": request["id"], "tabs": null });
            let mut line = response.to_string();
            line.push('\n');
            writer.write_all(line.as_bytes()).await.unwrap();
        });

        let (process, _signals) = BackgroundProcess::connect(&harness.path).await.unwrap();
        assert!(process.get_tabs().await.is_err());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn relay_writes_a_frame_without_an_id() {
        let harness = bind();

        let server = tokio::spawn(async move {
            let (stream, _) = harness.listener.accept().await.unwrap();
            let (reader, _writer) = stream.into_split();
            let mut lines = BufReader::new(reader).lines();
            let frame: serde_json::Value =
                serde_json::from_str(&lines.next_line().await.unwrap().unwrap()).unwrap();
            assert!(frame.get("id").is_none());
            assert_eq!(frame["action"], "close-tab");
            assert_eq!(frame["query"], "close");
            assert_eq!(frame["command"]["tab"]["id"], 5);
        });

        let (process, _signals) = BackgroundProcess::connect(&harness.path).await.unwrap();
        let mut entry = CommandEntry::builtin(
            "Example",
            "https://example.com",
            "🌐",
            crate::domain::models::CommandAction::Remote("show-tab".to_string()),
        );
        entry.tab = Some(crate::domain::models::TabMeta {
            id: 5,
            window_id: 1,
            index: 0,
            pinned: false,
        });
        process.relay("close-tab", &entry, "close").await.unwrap();
        server.await.unwrap();
    }

    #[tokio::test]
    async fn visibility_signals_are_forwarded() {
        let harness = bind();

        let server = tokio::spawn(async move {
            let (stream, _) = harness.listener.accept().await.unwrap();
            let (_reader, mut writer) = stream.into_split();
            writer
                .write_all(b"{\"action\":\"open-warp\"}\n")
                .await
                .unwrap();
            writer
                .write_all(b"not json at all\n")
                .await
                .unwrap();
            writer
                .write_all(b"{\"action\":\"close-warp\"}\n")
                .await
                .unwrap();
            // Keep the server end alive until the client has read everything.
            tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        });

        let (_process, mut signals) = BackgroundProcess::connect(&harness.path).await.unwrap();
        assert_eq!(signals.recv().await, Some(PaletteSignal::Open));
        // The garbage line in between is logged and skipped.
        assert_eq!(signals.recv().await, Some(PaletteSignal::Close));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn disconnected_facade_fails_every_remote_call() {
        let facade = Disconnected;
        assert!(facade.get_tabs().await.is_err());
        let entry = &crate::app::catalog::builtin_commands()[1];
        assert!(facade.relay("new-tab", entry, "").await.is_err());
    }
}
