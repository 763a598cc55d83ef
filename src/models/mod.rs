mod records;

pub use records::{
    Experiment, Holding, PageMeta, PricePoint, Token, Trade, TradeAction, portfolio_value,
};
