use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use viewer_logging::{viewer_info, viewer_warn};

use crate::client::ScrapeClient;
use crate::{EngineEvent, RequestId};

enum EngineCommand {
    Scrape { request_id: RequestId, url: String },
}

/// Runs scrape requests on a background tokio runtime.
///
/// Commands go in through `scrape`; results come back as `EngineEvent`s that
/// the UI thread polls without blocking.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(client: Arc<dyn ScrapeClient>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("scrape-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let client = client.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(client.as_ref(), command, event_tx).await;
                    });
                }
                viewer_info!("Engine command channel closed; shutting down");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn scrape(&self, request_id: RequestId, url: impl Into<String>) {
        let url = url.into();
        if self
            .cmd_tx
            .send(EngineCommand::Scrape { request_id, url })
            .is_err()
        {
            viewer_warn!("Engine thread is gone; dropping request {}", request_id);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    client: &dyn ScrapeClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Scrape { request_id, url } => {
            let result = client.scrape(&url).await;
            match &result {
                Ok(payload) => viewer_info!(
                    "Scrape {} finished with status {}",
                    request_id,
                    payload.status
                ),
                Err(err) => viewer_warn!("Scrape {} failed: {}", request_id, err),
            }
            let _ = event_tx.send(EngineEvent::ScrapeCompleted { request_id, result });
        }
    }
}
