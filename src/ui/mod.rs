mod helpers;
pub mod layout;
pub mod views;

use crate::app::EduApp;
use crate::model::Mode;
use eframe::{App, Frame};
use egui::{CentralPanel, Context, ScrollArea};
use layout::{bottom_panel, top_panel};

impl App for EduApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.poll_submission();

        // TAB BAR
        top_panel(self, ctx);

        // THEME SWITCH
        bottom_panel(ctx);

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    let max_width = 760.0;
                    ui.set_max_width(max_width);

                    // One form per tab
                    match self.ui.active_tab {
                        Mode::Explanation => views::explain::ui_explain(self, ctx, ui),
                        Mode::Quiz => views::quiz::ui_quiz_form(self, ctx, ui),
                        Mode::TeachingNotes => views::notes::ui_notes(self, ctx, ui),
                    }

                    if self.is_busy() {
                        helpers::busy_indicator(ui);
                    }

                    if !self.message.is_empty() {
                        ui.add_space(6.0);
                        ui.label(&self.message);
                    }

                    views::response::ui_response(self, ctx, ui);
                });
        });

        if self.notice.is_some() {
            views::notice::ui_notice(self, ctx);
        }

        // The busy flag is flipped by the worker; keep repainting until it settles.
        if self.is_busy() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
