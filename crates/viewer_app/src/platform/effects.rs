use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use eframe::egui;
use viewer_core::{Effect, Msg};
use viewer_engine::{export_result, EngineEvent, EngineHandle};
use viewer_logging::{viewer_debug, viewer_error, viewer_info, viewer_warn};

/// Executes effects produced by `update` and turns engine output back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
    msg_tx: mpsc::Sender<Msg>,
    repaint: egui::Context,
    export_dir: PathBuf,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        msg_tx: mpsc::Sender<Msg>,
        repaint: egui::Context,
        export_dir: PathBuf,
    ) -> Self {
        Self {
            engine,
            msg_tx,
            repaint,
            export_dir,
        }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Scrape { request_id, url } => {
                    viewer_info!("Scrape request_id={} url={}", request_id, url);
                    self.engine.scrape(request_id, url);
                }
                Effect::ScheduleNotificationClear { id, after } => {
                    let msg_tx = self.msg_tx.clone();
                    let repaint = self.repaint.clone();
                    let spawned = thread::Builder::new()
                        .name("notification-timer".to_string())
                        .spawn(move || {
                            thread::sleep(after);
                            if msg_tx.send(Msg::NotificationExpired { id }).is_ok() {
                                repaint.request_repaint();
                            }
                        });
                    if let Err(err) = spawned {
                        viewer_warn!("Could not start notification timer: {}", err);
                    }
                }
                Effect::ExportResult { result } => {
                    let outcome = match export_result(&self.export_dir, &result) {
                        Ok(path) => {
                            viewer_info!("Exported result to {:?}", path);
                            Ok(path.display().to_string())
                        }
                        Err(err) => {
                            viewer_error!("Export to {:?} failed: {}", self.export_dir, err);
                            Err(err.to_string())
                        }
                    };
                    let _ = self.msg_tx.send(Msg::ExportFinished(outcome));
                }
            }
        }
    }

    /// Drains finished engine work without blocking.
    pub fn poll_engine(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            match event {
                EngineEvent::ScrapeCompleted { request_id, result } => {
                    viewer_debug!(
                        "Engine completed request_id={} ok={}",
                        request_id,
                        result.is_ok()
                    );
                    msgs.push(Msg::ScrapeCompleted {
                        request_id,
                        result: result
                            .map(|payload| payload.result)
                            .map_err(|err| err.message),
                    });
                }
            }
        }
        msgs
    }
}
