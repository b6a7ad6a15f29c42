use {
    chrono::NaiveDateTime,
    eframe::{
        Frame, Storage,
        egui::{Context, Visuals},
    },
    serde::{Deserialize, Serialize},
    std::{
        sync::{mpsc, mpsc::Receiver},
        thread,
        time::Duration,
    },
    tokio::runtime::Runtime,
};

use crate::{
    Cli,
    app::{FetchState, can_submit},
    config::ANALYTICS,
    data::{AnalyticsProvider, FetchError, HttpAnalyticsClient, normalize_symbol},
    models::{AnalysisMode, AnalyticsEnvelope, OptionRecord, PlotField},
    ui::UI_CONFIG,
};

/// Success-path footer: the backend's own message plus when it answered.
#[derive(Clone)]
pub(crate) struct StatusLine {
    pub(crate) message: String,
    pub(crate) timestamp: Option<NaiveDateTime>,
}

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    // Selections persist across sessions.
    pub(crate) mode: AnalysisMode,
    pub(crate) symbol: String,
    pub(crate) x_field: PlotField,
    pub(crate) y_field: PlotField,

    #[serde(skip)]
    pub(crate) fetch_state: FetchState,
    #[serde(skip)]
    pub(crate) records: Vec<OptionRecord>,
    #[serde(skip)]
    pub(crate) status: Option<StatusLine>,
    #[serde(skip)]
    fetch_rx: Option<Receiver<anyhow::Result<AnalyticsEnvelope>>>,
    #[serde(skip)]
    base_url: String,
    #[serde(skip)]
    auto_fetch_pending: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            mode: AnalysisMode::default(),
            symbol: ANALYTICS.default_symbol.to_string(),
            x_field: PlotField::StrikePrice,
            y_field: PlotField::ImpliedVolatility,
            fetch_state: FetchState::Idle,
            records: Vec::new(),
            status: None,
            fetch_rx: None,
            base_url: ANALYTICS.base_url.to_string(),
            auto_fetch_pending: true,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        app.base_url = args
            .api_base
            .unwrap_or_else(|| ANALYTICS.base_url.to_string());
        if let Some(symbol) = args.symbol {
            app.symbol = normalize_symbol(&symbol);
        }
        app.auto_fetch_pending = true;

        app
    }

    pub(crate) fn submittable(&self) -> bool {
        can_submit(self.mode, &self.symbol, self.fetch_state.is_loading())
    }

    /// Kick off one request on a background thread. Previous records stay on
    /// screen until the response lands so the chart never flashes empty
    /// during a reload.
    pub(crate) fn start_fetch(&mut self) {
        if !self.submittable() {
            return;
        }

        let (tx, rx) = mpsc::channel();
        self.fetch_rx = Some(rx);
        self.fetch_state = FetchState::Loading;

        let mode = self.mode;
        let symbol = mode
            .requires_symbol()
            .then(|| normalize_symbol(&self.symbol));
        let base_url = self.base_url.clone();

        thread::spawn(move || {
            let rt = Runtime::new().expect("Failed to create runtime");
            let result = rt.block_on(async move {
                let client = HttpAnalyticsClient::new(base_url)?;
                client.fetch_records(mode, symbol.as_deref()).await
            });
            let _ = tx.send(result);
        });
    }

    fn poll_fetch(&mut self) {
        let Some(rx) = &self.fetch_rx else { return };
        let Ok(result) = rx.try_recv() else { return };
        self.fetch_rx = None;

        match result {
            Ok(envelope) => {
                self.records = envelope.data;
                self.status = Some(StatusLine {
                    message: envelope.message,
                    timestamp: envelope.timestamp,
                });
                self.fetch_state = FetchState::Success;
            }
            Err(err) => {
                log::error!("Fetch failed: {:#}", err);
                self.records = Vec::new();
                self.status = None;
                self.fetch_state = FetchState::Failure(error_message(&err));
            }
        }
    }
}

/// Prefer the server's own wording (the typed root cause) over the anyhow
/// context chain.
fn error_message(err: &anyhow::Error) -> String {
    err.downcast_ref::<FetchError>()
        .map(FetchError::user_message)
        .unwrap_or_else(|| format!("{:#}", err))
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        self.poll_fetch();

        // Auto-fetch on first frame when the restored selection is already
        // submittable (default symbol set, or a symbol-less mode).
        if self.auto_fetch_pending {
            self.auto_fetch_pending = false;
            if self.submittable() {
                self.start_fetch();
            }
        }

        self.render_controls_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);

        if self.fetch_state.is_loading() {
            // Keep polling the channel while a request is in flight
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
