use eframe::{
    Frame,
    egui::{CentralPanel, Color32, Context, RichText, ScrollArea, Ui, Visuals},
};

use crate::{
    data::{
        EXPERIMENT_TOKENS, EXPERIMENTS_IN_PROGRESS, HOLDINGS, MARKET_CAP, MARKET_CAP_HISTORY,
        PAGE_META, PORTFOLIO_PERFORMANCE, RECENT_TRADES,
    },
    ui::{
        UI_CONFIG, UiStyleExt, experiments_list, holdings_table, market_cap_card,
        market_cap_chart, portfolio_performance_chart, portfolio_value_card, token_table,
        trades_table,
    },
};

/// The whole dashboard. Stateless: every frame re-renders the fixture
/// tables, and nothing the user does is remembered.
#[derive(Default)]
pub struct DashboardApp;

impl DashboardApp {
    pub(crate) fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        log::info!(
            "Dashboard ready: {} holdings, {} trades, {} experiments, {} tokens",
            HOLDINGS.len(),
            RECENT_TRADES.len(),
            EXPERIMENTS_IN_PROGRESS.len(),
            EXPERIMENT_TOKENS.len()
        );
        Self
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        CentralPanel::default()
            .frame(UI_CONFIG.page_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        render_page(ui);
                    });
            });
    }
}

/// Full page: header, metric cards, charts, experiment panels, tables.
pub(crate) fn render_page(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(PAGE_META.title)
                .size(UI_CONFIG.title_size)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
        ui.label_subdued(PAGE_META.description);
    });
    ui.add_space(UI_CONFIG.section_gap);

    split_row(
        ui,
        |ui| market_cap_card(ui, MARKET_CAP),
        |ui| portfolio_value_card(ui, HOLDINGS),
    );
    ui.add_space(UI_CONFIG.section_gap);
    split_row(
        ui,
        |ui| market_cap_chart(ui, MARKET_CAP_HISTORY),
        |ui| portfolio_performance_chart(ui, PORTFOLIO_PERFORMANCE),
    );
    ui.add_space(UI_CONFIG.section_gap);
    split_row(
        ui,
        |ui| experiments_list(ui, EXPERIMENTS_IN_PROGRESS),
        |ui| token_table(ui, EXPERIMENT_TOKENS),
    );
    ui.add_space(UI_CONFIG.section_gap);
    split_row(
        ui,
        |ui| holdings_table(ui, HOLDINGS),
        |ui| trades_table(ui, RECENT_TRADES),
    );
}

fn split_row(ui: &mut Ui, left: impl FnOnce(&mut Ui), right: impl FnOnce(&mut Ui)) {
    ui.columns(2, |columns| {
        left(&mut columns[0]);
        right(&mut columns[1]);
    });
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.page;
    visuals.panel_fill = UI_CONFIG.colors.page;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.text;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.text;
    visuals.widgets.hovered.fg_stroke.color = Color32::WHITE;
    visuals.widgets.active.fg_stroke.color = Color32::WHITE;
    visuals.hyperlink_color = UI_CONFIG.colors.link;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::RawInput;

    fn run_headless(render: impl FnOnce(&mut Ui)) {
        let ctx = Context::default();
        let mut render = Some(render);
        let _ = ctx.run(RawInput::default(), |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                if let Some(render) = render.take() {
                    render(ui);
                }
            });
        });
    }

    #[test]
    fn full_page_renders_without_panicking() {
        run_headless(render_page);
    }

    #[test]
    fn components_accept_empty_inputs() {
        run_headless(|ui| {
            portfolio_value_card(ui, &[]);
            market_cap_chart(ui, &[]);
            portfolio_performance_chart(ui, &[]);
            experiments_list(ui, &[]);
            token_table(ui, &[]);
            holdings_table(ui, &[]);
            trades_table(ui, &[]);
        });
    }

    #[test]
    fn non_finite_metric_still_renders() {
        run_headless(|ui| market_cap_card(ui, f64::NAN));
    }
}
