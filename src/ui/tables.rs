use eframe::egui::{Grid, OpenUrl, RichText, Ui};

use crate::{
    models::{Holding, Token, Trade},
    ui::{
        ICON_LINK, UI_CONFIG, UI_TEXT, UiStyleExt,
        styles::{action_style, card_title},
    },
    utils::{format_grouped, format_usd},
};

/// Name / Symbol / Link rows. The link opens the token URL, as given, in
/// a new browser tab.
pub fn token_table(ui: &mut Ui, tokens: &[Token]) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(card_title(&UI_TEXT.card_tokens));
        ui.add_space(4.0);
        Grid::new("token_table")
            .striped(true)
            .num_columns(3)
            .show(ui, |ui| {
                header(ui, &UI_TEXT.th_name);
                header(ui, &UI_TEXT.th_symbol);
                header(ui, &UI_TEXT.th_link);
                ui.end_row();

                for token in tokens {
                    ui.label(RichText::new(token.name).strong().color(UI_CONFIG.colors.text));
                    ui.label_cell(token.symbol);
                    let link = ui
                        .link(RichText::new(ICON_LINK).color(UI_CONFIG.colors.link))
                        .on_hover_text(token.link);
                    if link.clicked() {
                        ui.ctx().open_url(OpenUrl::new_tab(token.link));
                    }
                    ui.end_row();
                }
            });
    });
}

/// Asset / Amount / Value rows for the current positions.
pub fn holdings_table(ui: &mut Ui, holdings: &[Holding]) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(card_title(&UI_TEXT.card_holdings));
        ui.add_space(4.0);
        Grid::new("holdings_table")
            .striped(true)
            .num_columns(3)
            .show(ui, |ui| {
                header(ui, &UI_TEXT.th_asset);
                header(ui, &UI_TEXT.th_amount);
                header(ui, &UI_TEXT.th_value_usd);
                ui.end_row();

                for holding in holdings {
                    ui.label(RichText::new(holding.asset).strong().color(UI_CONFIG.colors.text));
                    ui.label_cell(format_grouped(holding.amount));
                    ui.label_cell(format_usd(holding.value));
                    ui.end_row();
                }
            });
    });
}

/// Date / Action / Asset / Amount / Price for the latest fills. Amount is
/// the raw number; Price is "$" + grouping, no cents.
pub fn trades_table(ui: &mut Ui, trades: &[Trade]) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(card_title(&UI_TEXT.card_trades));
        ui.add_space(4.0);
        Grid::new("trades_table")
            .striped(true)
            .num_columns(5)
            .show(ui, |ui| {
                header(ui, &UI_TEXT.th_date);
                header(ui, &UI_TEXT.th_action);
                header(ui, &UI_TEXT.th_asset);
                header(ui, &UI_TEXT.th_amount);
                header(ui, &UI_TEXT.th_price);
                ui.end_row();

                for trade in trades {
                    ui.label_cell(trade.date);
                    let (glyph, color) = action_style(trade.action.as_ref());
                    ui.label(RichText::new(format!("{} {}", glyph, trade.action)).color(color));
                    ui.label_cell(trade.asset);
                    ui.label_cell(trade.amount.to_string());
                    ui.label_cell(format!("${}", format_grouped(trade.price)));
                    ui.end_row();
                }
            });
    });
}

fn header(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).strong().color(UI_CONFIG.colors.label));
}
