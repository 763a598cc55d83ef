use eframe::egui::{Align, Button, Color32, Layout, RichText, Ui};

use crate::{
    models::{Holding, portfolio_value},
    ui::{ICON_BRIEFCASE, ICON_DOLLAR, UI_CONFIG, UI_TEXT, UiStyleExt, styles::card_title},
    utils::format_usd,
};

/// Headline number for the whole fund.
pub fn market_cap_card(ui: &mut Ui, market_cap: f64) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        card_header(ui, &UI_TEXT.card_market_cap, ICON_DOLLAR, UI_CONFIG.colors.market_cap);
        ui.metric(&format_usd(market_cap), UI_CONFIG.colors.market_cap);
    });
}

/// Sum of all holdings, next to a buy button nothing is wired to.
pub fn portfolio_value_card(ui: &mut Ui, holdings: &[Holding]) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        card_header(ui, &UI_TEXT.card_portfolio_value, ICON_BRIEFCASE, UI_CONFIG.colors.portfolio);
        ui.horizontal(|ui| {
            ui.metric(&format_usd(portfolio_value(holdings)), UI_CONFIG.colors.portfolio);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.add(
                    Button::new(RichText::new(&UI_TEXT.btn_buy_more).color(Color32::WHITE))
                        .fill(UI_CONFIG.colors.button_fill),
                );
            });
        });
    });
}

fn card_header(ui: &mut Ui, title: &str, icon: &str, icon_color: Color32) {
    ui.horizontal(|ui| {
        ui.label(card_title(title));
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(RichText::new(icon).color(icon_color));
        });
    });
}
