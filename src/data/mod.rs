mod fixtures;

pub use fixtures::{
    EXPERIMENT_TOKENS, EXPERIMENTS_IN_PROGRESS, HOLDINGS, MARKET_CAP, MARKET_CAP_HISTORY,
    PAGE_META, PORTFOLIO_PERFORMANCE, RECENT_TRADES,
};
