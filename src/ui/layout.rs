use crate::app::EduApp;
use crate::model::Mode;
use egui::{Button, Context, Ui, Visuals};

pub fn top_panel(app: &mut EduApp, ctx: &Context) {
    egui::TopBottomPanel::top("tab_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.heading("🎓 EduGenius");
            ui.separator();
            for mode in Mode::ALL {
                let active = app.ui.is_tab_active(mode.tab_id());
                if ui.selectable_label(active, mode.label()).clicked() {
                    app.switch_tab(mode);
                }
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light mode").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Two same-size buttons in a row. Returns (left clicked, right clicked).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = ((panel_width - 8.0) / 2.0).max(80.0);
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_sized([btn_w, 32.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_sized([btn_w, 32.0], Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}
