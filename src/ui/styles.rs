use eframe::egui::{Color32, RichText, Ui};

use crate::ui::{ICON_TRADE_DOWN, ICON_TRADE_UP, UI_CONFIG};

pub(crate) fn card_title(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.label)
}

/// Glyph and tint for a trade action cell. Only the exact string "BUY"
/// counts as a buy; every other action renders sell-style.
pub fn action_style(action: &str) -> (&'static str, Color32) {
    if action == "BUY" {
        (ICON_TRADE_UP, UI_CONFIG.colors.trade_up)
    } else {
        (ICON_TRADE_DOWN, UI_CONFIG.colors.trade_down)
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn label_cell(&mut self, text: impl Into<String>);
    /// Big colored card number
    fn metric(&mut self, value: &str, color: Color32);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.label));
    }

    fn label_cell(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.text));
    }

    fn metric(&mut self, value: &str, color: Color32) {
        self.label(
            RichText::new(value)
                .size(UI_CONFIG.metric_size)
                .strong()
                .color(color),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_buy_styles_up() {
        let (glyph, color) = action_style("BUY");
        assert_eq!(glyph, ICON_TRADE_UP);
        assert_eq!(color, UI_CONFIG.colors.trade_up);
    }

    #[test]
    fn every_other_action_styles_down() {
        for action in ["SELL", "HODL", "buy", "Buy", ""] {
            let (glyph, color) = action_style(action);
            assert_eq!(glyph, ICON_TRADE_DOWN, "action {:?}", action);
            assert_eq!(color, UI_CONFIG.colors.trade_down, "action {:?}", action);
        }
    }
}
