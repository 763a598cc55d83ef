use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub page: Color32,
    pub card_fill: Color32,
    pub card_border: Color32,
    /// Page title
    pub heading: Color32,
    /// Card titles, descriptions, table headers
    pub label: Color32,
    /// Table cells
    pub text: Color32,
    /// Row names that the page bolds
    pub text_strong: Color32,
    pub market_cap: Color32,
    pub portfolio: Color32,
    pub trade_up: Color32,
    pub trade_down: Color32,
    pub experiment: Color32,
    pub progress_fill: Color32,
    pub progress_track: Color32,
    pub link: Color32,
    pub button_fill: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub title_size: f32,
    pub metric_size: f32,
    pub chart_height: f32,
    pub chart_line_width: f32,
    /// Extra x-range beyond the first/last point index
    pub plot_x_padding: f64,
    /// Headroom above the series maximum, as a fraction
    pub plot_y_padding_pct: f64,
    pub progress_height: f32,
    pub section_gap: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        page: Color32::from_rgb(10, 11, 14),
        card_fill: Color32::from_rgb(19, 21, 26),   // #13151a
        card_border: Color32::from_rgb(42, 45, 53), // #2a2d35
        heading: Color32::from_rgb(96, 165, 250),
        label: Color32::from_rgb(156, 163, 175),
        text: Color32::from_rgb(209, 213, 219),
        text_strong: Color32::from_rgb(229, 231, 235),
        market_cap: Color32::from_rgb(74, 222, 128), // #4ade80
        portfolio: Color32::from_rgb(96, 165, 250),  // #60a5fa
        trade_up: Color32::from_rgb(74, 222, 128),
        trade_down: Color32::from_rgb(248, 113, 113),
        experiment: Color32::from_rgb(192, 132, 252),
        progress_fill: Color32::from_rgb(147, 51, 234),
        progress_track: Color32::from_rgb(55, 65, 81),
        link: Color32::from_rgb(96, 165, 250),
        button_fill: Color32::from_rgb(59, 130, 246),
    },
    title_size: 30.0,
    metric_size: 24.0,
    chart_height: 200.0,
    chart_line_width: 2.0,
    plot_x_padding: 0.25,
    plot_y_padding_pct: 0.05,
    progress_height: 10.0,
    section_gap: 16.0,
};

impl UiConfig {
    /// Frame for every dashboard card (dark fill, thin border, rounded)
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card_fill,
            stroke: Stroke::new(1.0, self.colors.card_border),
            corner_radius: CornerRadius::same(6),
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    /// Frame for the page behind the cards
    pub fn page_frame(&self) -> Frame {
        Frame {
            fill: self.colors.page,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(16, 12),
            ..Default::default()
        }
    }
}
