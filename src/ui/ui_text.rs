use std::sync::LazyLock;

// Glyphs from the emoji fonts egui ships with
pub const ICON_DOLLAR: &str = "💲";
pub const ICON_BRIEFCASE: &str = "💼";
pub const ICON_FLASK: &str = "⚗";
pub const ICON_LINK: &str = "🔗";
pub const ICON_TRADE_UP: &str = "⬆";
pub const ICON_TRADE_DOWN: &str = "⬇";

pub struct UiText {
    // --- Card titles ---
    pub card_market_cap: String,
    pub card_portfolio_value: String,
    pub card_market_cap_history: String,
    pub card_portfolio_performance: String,
    pub card_experiments: String,
    pub card_tokens: String,
    pub card_holdings: String,
    pub card_trades: String,

    // --- Table headers ---
    pub th_name: String,
    pub th_symbol: String,
    pub th_link: String,
    pub th_asset: String,
    pub th_amount: String,
    pub th_value_usd: String,
    pub th_date: String,
    pub th_action: String,
    pub th_price: String,

    pub btn_buy_more: String,
}

// THE SINGLETON
pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    card_market_cap: "Market Cap".to_string(),
    card_portfolio_value: "Portfolio Value".to_string(),
    card_market_cap_history: "Market Cap History".to_string(),
    card_portfolio_performance: "Portfolio Performance".to_string(),
    card_experiments: "Experiments In Progress".to_string(),
    card_tokens: "Experiment Tokens".to_string(),
    card_holdings: "Current Holdings".to_string(),
    card_trades: "Recent Trades".to_string(),

    th_name: "Name".to_string(),
    th_symbol: "Symbol".to_string(),
    th_link: "Link".to_string(),
    th_asset: "Asset".to_string(),
    th_amount: "Amount".to_string(),
    th_value_usd: "Value (USD)".to_string(),
    th_date: "Date".to_string(),
    th_action: "Action".to_string(),
    th_price: "Price".to_string(),

    btn_buy_more: "Buy More".to_string(),
});
