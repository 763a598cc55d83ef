mod format;

pub use format::{axis_currency_label, format_grouped, format_usd};
