use std::sync::{mpsc, Arc};

use anyhow::{anyhow, Context as _};
use eframe::egui;
use viewer_core::{update, AppState, AppViewModel, Msg};
use viewer_engine::{EngineHandle, ReqwestScrapeClient};
use viewer_logging::viewer_info;

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::{logging, ui};

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::load();
    logging::initialize(&config.logging);
    if let Some(path) = &config.env_file {
        viewer_info!("Loaded environment from {:?}", path);
    }
    viewer_info!(
        "Backend endpoint {} (export dir {:?})",
        config.client.scrape_endpoint(),
        config.export_dir
    );

    let client =
        ReqwestScrapeClient::new(config.client.clone()).context("building backend client")?;
    let engine = EngineHandle::new(Arc::new(client)).context("starting scrape engine")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(ui::constants::WINDOW_TITLE)
            .with_inner_size([ui::constants::WINDOW_WIDTH, ui::constants::WINDOW_HEIGHT]),
        ..Default::default()
    };

    let export_dir = config.export_dir;
    eframe::run_native(
        ui::constants::WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
            let effects = EffectRunner::new(engine, msg_tx, cc.egui_ctx.clone(), export_dir);
            Ok(Box::new(ViewerApp::new(effects, msg_rx)))
        }),
    )
    .map_err(|err| anyhow!("UI failed: {err}"))
}

struct ViewerApp {
    state: AppState,
    view: AppViewModel,
    effects: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
}

impl ViewerApp {
    fn new(effects: EffectRunner, msg_rx: mpsc::Receiver<Msg>) -> Self {
        let state = AppState::new();
        let view = state.view();
        Self {
            state,
            view,
            effects,
            msg_rx,
        }
    }

    fn process_pending_messages(&mut self) {
        let mut inbox = self.effects.poll_engine();
        while let Ok(msg) = self.msg_rx.try_recv() {
            inbox.push(msg);
        }
        for msg in inbox {
            self.dispatch_msg(msg);
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.run(effects);
    }

    /// Rebuilds the cached view model only when state actually changed.
    fn refresh_view(&mut self) {
        if self.state.consume_dirty() {
            self.view = self.state.view();
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_pending_messages();
        self.refresh_view();

        let msgs = ui::render::render(ctx, &self.view);
        if !msgs.is_empty() {
            for msg in msgs {
                self.dispatch_msg(msg);
            }
            ctx.request_repaint();
        }

        // Engine completions do not wake the UI on their own.
        if self.view.loading {
            ctx.request_repaint_after(ui::constants::ENGINE_POLL_INTERVAL);
        }
    }
}
