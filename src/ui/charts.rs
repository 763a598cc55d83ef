use eframe::egui::{Color32, Ui};
use egui_plot::{Axis, AxisHints, Line, Plot, PlotPoints};

use crate::{
    models::PricePoint,
    ui::{UI_CONFIG, UI_TEXT, styles::card_title},
    utils::{axis_currency_label, format_usd},
};

/// Market cap over time, y ticks in billions.
pub fn market_cap_chart(ui: &mut Ui, history: &[PricePoint]) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(card_title(&UI_TEXT.card_market_cap_history));
        ui.add_space(4.0);
        let color = UI_CONFIG.colors.market_cap;
        price_history_plot(ui, "market_cap_history", history, color, 1e9, "B");
    });
}

/// Portfolio value over time, y ticks in millions.
pub fn portfolio_performance_chart(ui: &mut Ui, history: &[PricePoint]) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(card_title(&UI_TEXT.card_portfolio_performance));
        ui.add_space(4.0);
        let color = UI_CONFIG.colors.portfolio;
        price_history_plot(ui, "portfolio_performance", history, color, 1e6, "M");
    });
}

/// One series as a static picture: x is the point index, interactions off,
/// the series drawn point-for-point in given order.
fn price_history_plot(
    ui: &mut Ui,
    id: &str,
    history: &[PricePoint],
    color: Color32,
    divisor: f64,
    suffix: &'static str,
) {
    let dates: Vec<String> = history.iter().map(|p| p.date.to_string()).collect();
    let hover_dates = dates.clone();
    let points: Vec<[f64; 2]> = history
        .iter()
        .enumerate()
        .map(|(i, p)| [i as f64, p.value])
        .collect();
    let y_max = history.iter().map(|p| p.value).fold(f64::NAN, f64::max);

    Plot::new(id)
        .height(UI_CONFIG.chart_height)
        .custom_x_axes(vec![create_date_axis(dates)])
        .custom_y_axes(vec![create_currency_axis(divisor, suffix)])
        .label_formatter(move |_, point| hover_label(&hover_dates, point.x, point.y))
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_double_click_reset(false)
        .show(ui, |plot_ui| {
            if points.is_empty() {
                return;
            }
            let last_idx = (points.len() - 1) as f64;
            plot_ui.line(
                Line::new("", PlotPoints::new(points))
                    .color(color)
                    .width(UI_CONFIG.chart_line_width),
            );
            plot_ui.set_plot_bounds_x(
                -UI_CONFIG.plot_x_padding..=last_idx + UI_CONFIG.plot_x_padding,
            );
            plot_ui.set_plot_bounds_y(0.0..=y_max * (1.0 + UI_CONFIG.plot_y_padding_pct));
        });
}

// Helper to build the date axis: ticks land on whole indices and label
// them with the matching date string
fn create_date_axis(dates: Vec<String>) -> AxisHints<'static> {
    AxisHints::new(Axis::X).formatter(move |mark, _range| date_tick_label(&dates, mark.value))
}

fn create_currency_axis(divisor: f64, suffix: &'static str) -> AxisHints<'static> {
    AxisHints::new(Axis::Y)
        .formatter(move |mark, _range| axis_currency_label(mark.value, divisor, suffix))
}

fn date_tick_label(dates: &[String], value: f64) -> String {
    let idx = value.round();
    if idx < 0.0 || (value - idx).abs() > 0.01 {
        return String::new();
    }
    dates.get(idx as usize).cloned().unwrap_or_default()
}

fn hover_label(dates: &[String], x: f64, y: f64) -> String {
    let idx = x.round();
    match dates.get(idx as usize) {
        Some(date) if idx >= 0.0 => format!("{}\n{}", date, format_usd(y)),
        _ => format_usd(y),
    }
}
