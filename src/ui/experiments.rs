use eframe::egui::{Rect, RichText, Sense, Ui, Vec2};

use crate::{
    models::Experiment,
    ui::{ICON_FLASK, UI_CONFIG, UI_TEXT, UiStyleExt, styles::card_title},
};

/// R&D tracker: name, blurb and a progress track per experiment.
pub fn experiments_list(ui: &mut Ui, experiments: &[Experiment]) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(card_title(&UI_TEXT.card_experiments));
        ui.add_space(4.0);
        for experiment in experiments {
            ui.horizontal(|ui| {
                ui.label(RichText::new(ICON_FLASK).color(UI_CONFIG.colors.experiment));
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(experiment.name)
                            .strong()
                            .color(UI_CONFIG.colors.text_strong),
                    );
                    ui.label_subdued(experiment.description);
                    progress_track(ui, experiment.fill_fraction());
                });
            });
            ui.add_space(8.0);
        }
    });
}

// Painted by hand; fill width is fraction * track width with no clamp,
// so a fraction above 1.0 runs past the end of the track
fn progress_track(ui: &mut Ui, fill_fraction: f64) {
    let size = Vec2::new(ui.available_width(), UI_CONFIG.progress_height);
    let (rect, _response) = ui.allocate_exact_size(size, Sense::hover());
    if ui.is_rect_visible(rect) {
        let radius = UI_CONFIG.progress_height / 2.0;
        ui.painter()
            .rect_filled(rect, radius, UI_CONFIG.colors.progress_track);
        let fill_width = rect.width() * fill_fraction as f32;
        if fill_width > 0.0 {
            let fill = Rect::from_min_size(rect.min, Vec2::new(fill_width, rect.height()));
            ui.painter()
                .rect_filled(fill, radius, UI_CONFIG.colors.progress_fill);
        }
    }
}
