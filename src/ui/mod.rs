mod cards;
mod charts;
mod experiments;
mod styles;
mod tables;
mod ui_config;
mod ui_text;

pub use cards::{market_cap_card, portfolio_value_card};
pub use charts::{market_cap_chart, portfolio_performance_chart};
pub use experiments::experiments_list;
pub use styles::action_style;
pub use tables::{holdings_table, token_table, trades_table};
pub use ui_config::{UI_CONFIG, UiConfig};
pub use ui_text::{
    ICON_BRIEFCASE, ICON_DOLLAR, ICON_FLASK, ICON_LINK, ICON_TRADE_DOWN, ICON_TRADE_UP, UI_TEXT,
    UiText,
};

pub(crate) use styles::UiStyleExt;
