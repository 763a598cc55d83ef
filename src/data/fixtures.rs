//! Hardcoded dashboard data. Every number on the page comes from these
//! tables; nothing is fetched and nothing is recomputed except the
//! portfolio total.

use crate::models::{Experiment, Holding, PageMeta, PricePoint, Token, Trade, TradeAction};

pub const PAGE_META: PageMeta = PageMeta {
    title: "DAO Fund Dashboard",
    description: "Empowering decentralized innovation through collaborative fund management",
};

pub const MARKET_CAP: f64 = 1_234_567_890.0;

pub const HOLDINGS: &[Holding] = &[
    Holding { asset: "ETH", amount: 1_000.0, value: 2_000_000.0 },
    Holding { asset: "BTC", amount: 100.0, value: 3_000_000.0 },
    Holding { asset: "USDC", amount: 5_000_000.0, value: 5_000_000.0 },
    Holding { asset: "AAVE", amount: 10_000.0, value: 1_000_000.0 },
];

pub const RECENT_TRADES: &[Trade] = &[
    Trade {
        date: "2023-05-01",
        action: TradeAction::Buy,
        asset: "ETH",
        amount: 50.0,
        price: 1_800.0,
    },
    Trade {
        date: "2023-05-02",
        action: TradeAction::Sell,
        asset: "BTC",
        amount: 2.0,
        price: 28_000.0,
    },
    Trade {
        date: "2023-05-03",
        action: TradeAction::Buy,
        asset: "AAVE",
        amount: 1_000.0,
        price: 80.0,
    },
    Trade {
        date: "2023-05-04",
        action: TradeAction::Sell,
        asset: "USDC",
        amount: 100_000.0,
        price: 1.0,
    },
];

// Weekly samples; the last one matches MARKET_CAP.
pub const MARKET_CAP_HISTORY: &[PricePoint] = &[
    PricePoint { date: "2023-04-01", value: 1_000_000_000.0 },
    PricePoint { date: "2023-04-08", value: 1_050_000_000.0 },
    PricePoint { date: "2023-04-15", value: 1_150_000_000.0 },
    PricePoint { date: "2023-04-22", value: 1_100_000_000.0 },
    PricePoint { date: "2023-04-29", value: 1_200_000_000.0 },
    PricePoint { date: "2023-05-06", value: 1_234_567_890.0 },
];

pub const PORTFOLIO_PERFORMANCE: &[PricePoint] = &[
    PricePoint { date: "2023-04-01", value: 10_000_000.0 },
    PricePoint { date: "2023-04-08", value: 10_500_000.0 },
    PricePoint { date: "2023-04-15", value: 11_000_000.0 },
    PricePoint { date: "2023-04-22", value: 10_800_000.0 },
    PricePoint { date: "2023-04-29", value: 11_500_000.0 },
    PricePoint { date: "2023-05-06", value: 11_000_000.0 },
];

pub const EXPERIMENTS_IN_PROGRESS: &[Experiment] = &[
    Experiment {
        name: "DeFi Yield Optimizer",
        description: "Automated yield farming strategy",
        progress: 75.0,
    },
    Experiment {
        name: "NFT Marketplace",
        description: "Decentralized NFT trading platform",
        progress: 40.0,
    },
    Experiment {
        name: "Cross-chain Bridge",
        description: "Interoperability solution for multiple blockchains",
        progress: 60.0,
    },
];

pub const EXPERIMENT_TOKENS: &[Token] = &[
    Token { name: "Yield Token", symbol: "YLD", link: "https://example.com/yld" },
    Token { name: "NFT Token", symbol: "NFT", link: "https://example.com/nft" },
    Token { name: "Bridge Token", symbol: "BRG", link: "https://example.com/brg" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::portfolio_value, utils::format_usd};

    #[test]
    fn holdings_total_eleven_million() {
        assert_eq!(portfolio_value(HOLDINGS), 11_000_000.0);
        assert_eq!(format_usd(portfolio_value(HOLDINGS)), "$11,000,000.00");
    }

    #[test]
    fn tables_have_expected_row_counts() {
        assert_eq!(HOLDINGS.len(), 4);
        assert_eq!(RECENT_TRADES.len(), 4);
        assert_eq!(MARKET_CAP_HISTORY.len(), 6);
        assert_eq!(PORTFOLIO_PERFORMANCE.len(), 6);
        assert_eq!(EXPERIMENTS_IN_PROGRESS.len(), 3);
        assert_eq!(EXPERIMENT_TOKENS.len(), 3);
    }

    #[test]
    fn history_rows_keep_listed_order() {
        let dates: Vec<_> = MARKET_CAP_HISTORY.iter().map(|p| p.date).collect();
        assert_eq!(
            dates,
            ["2023-04-01", "2023-04-08", "2023-04-15", "2023-04-22", "2023-04-29", "2023-05-06"]
        );
        let portfolio_dates: Vec<_> = PORTFOLIO_PERFORMANCE.iter().map(|p| p.date).collect();
        assert_eq!(portfolio_dates, dates);
        assert_eq!(MARKET_CAP_HISTORY.last().map(|p| p.value), Some(MARKET_CAP));
    }

    #[test]
    fn token_links_stay_verbatim() {
        let links: Vec<_> = EXPERIMENT_TOKENS.iter().map(|t| t.link).collect();
        assert_eq!(
            links,
            ["https://example.com/yld", "https://example.com/nft", "https://example.com/brg"]
        );
    }
}
