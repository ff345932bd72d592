use crate::app::EduApp;
use egui::{Context, Id, Modal};

/// Blocking notification; the page behind it is inert until OK.
pub fn ui_notice(app: &mut EduApp, ctx: &Context) {
    let Some(notice) = app.notice.clone() else {
        return;
    };

    let mut dismissed = false;
    let modal = Modal::new(Id::new("notice_modal")).show(ctx, |ui| {
        ui.set_width(320.0);
        ui.heading(&notice.title);
        ui.add_space(6.0);
        ui.label(&notice.message);
        ui.add_space(10.0);
        if ui.button("OK").clicked() {
            dismissed = true;
        }
    });

    if dismissed || modal.should_close() {
        app.dismiss_notice();
    }
}
