use super::*;
use crate::dispatch;
use crate::error::ValidationError;
use crate::export;
use crate::render::render;
use std::sync::mpsc::{self, TryRecvError};

impl EduApp {
    /// Submits the active tab's form. Refused while another submission is
    /// still in flight.
    pub fn submit_active(&mut self, ctx: &egui::Context) {
        if self.pending.is_some() {
            self.message = "⏳ A request is already in progress. Please wait.".into();
            return;
        }

        let request = self.forms.request_for(self.ui);
        if let Err(err) = request.validate() {
            self.show_validation(err);
            return;
        }

        self.message.clear();
        self.start_submission(ctx, request);
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn start_submission(&mut self, ctx: &egui::Context, request: SubmissionRequest) {
        use crate::api::native::HttpTransport;

        let (tx, rx) = mpsc::channel::<SubmissionResult>();
        self.pending = Some(PendingSubmission {
            mode: request.mode(),
            rx,
        });

        let transport = HttpTransport::new(self.api.clone());
        let busy = self.busy.clone();
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            let result = dispatch::submit(&transport, &busy, &request);
            let _ = tx.send(result);
            ctx.request_repaint();
        });
    }

    #[cfg(target_arch = "wasm32")]
    fn start_submission(&mut self, ctx: &egui::Context, request: SubmissionRequest) {
        use crate::api::fetch::FetchTransport;

        let (tx, rx) = mpsc::channel::<SubmissionResult>();
        self.pending = Some(PendingSubmission {
            mode: request.mode(),
            rx,
        });

        let transport = FetchTransport::new(self.api.clone());
        let busy = self.busy.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = dispatch::submit_async(&transport, &busy, &request).await;
            let _ = tx.send(result);
            ctx.request_repaint();
        });
    }

    /// Picks up a finished submission, if any. Called every frame.
    pub fn poll_submission(&mut self) {
        let Some(pending) = &self.pending else {
            return;
        };
        let mode = pending.mode;

        match pending.rx.try_recv() {
            Ok(result) => {
                self.pending = None;
                self.apply_outcome(mode, result);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                log::error!("Submission worker ended without a result");
                self.pending = None;
                self.show_error("An error occurred. Please try again.".into());
            }
        }
    }

    /// Success replaces the response panel and scrolls to it. Failure leaves
    /// the previous panel alone and raises a notice.
    pub fn apply_outcome(&mut self, mode: Mode, result: SubmissionResult) {
        match result {
            Ok(raw) => {
                let markup = render(&raw.text);
                log::info!(
                    "Rendering {} response as {}",
                    mode.tab_id(),
                    if markup.is_quiz() { "quiz" } else { "text" }
                );
                self.response = Some(ResponsePanel {
                    mode,
                    markup,
                    metadata: raw.metadata,
                    scroll_pending: true,
                });
            }
            Err(SubmitError::Validation(err)) => self.show_validation(err),
            Err(err) => self.show_error(err.user_message()),
        }
    }

    fn show_validation(&mut self, err: ValidationError) {
        self.notice = Some(Notice {
            title: "Missing topic".into(),
            message: err.to_string(),
        });
    }

    fn show_error(&mut self, message: String) {
        self.notice = Some(Notice {
            title: "Error".into(),
            message,
        });
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn displayed_text(&self) -> Option<String> {
        self.response.as_ref().map(|r| r.markup.plain_text())
    }

    /// Best effort: failures are logged, never shown as a notice.
    pub fn copy_response(&mut self, ctx: &egui::Context) {
        let Some(text) = self.displayed_text() else {
            return;
        };
        match export::copy_to_clipboard(ctx, &text) {
            Ok(()) => self.message = "📋 Content copied to clipboard!".into(),
            Err(err) => log::error!("Failed to copy: {err}"),
        }
    }

    pub fn download_response(&mut self) {
        let Some(text) = self.displayed_text() else {
            return;
        };
        let file_name = export::download_file_name(self.ui.active_tab, export::today());
        match export::download(&file_name, &text) {
            Ok(Some(path)) => self.message = format!("💾 Saved to {}", path.display()),
            Ok(None) => {}
            Err(err) => {
                log::error!("Download failed: {err}");
                self.show_error(format!("Could not save {file_name}."));
            }
        }
    }
}
