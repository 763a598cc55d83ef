//! Row types behind the dashboard. Serde pins the field names so a real
//! data source can later feed the same shapes (asserted in tests).

use serde::Serialize;
use strum_macros::{AsRefStr, Display};

/// One asset position held by the fund. `value` is the position's USD
/// worth as given; no price * amount relationship is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Holding {
    pub asset: &'static str,
    pub amount: f64,
    pub value: f64,
}

/// Sum of `value` across holdings. The only derived number on the page.
pub fn portfolio_value(holdings: &[Holding]) -> f64 {
    holdings.iter().map(|h| h.value).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, AsRefStr)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum TradeAction {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trade {
    pub date: &'static str,
    pub action: TradeAction,
    pub asset: &'static str,
    pub amount: f64,
    pub price: f64,
}

/// A dated sample in a value series. Series render in given order; dates
/// are opaque labels, never parsed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    pub date: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Experiment {
    pub name: &'static str,
    pub description: &'static str,
    pub progress: f64,
}

impl Experiment {
    /// Track fill as a fraction of full width. Unclamped: 150 fills one
    /// and a half tracks.
    pub fn fill_fraction(&self) -> f64 {
        self.progress / 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Token {
    pub name: &'static str,
    pub symbol: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portfolio_value_sums_holding_values() {
        let holdings = [
            Holding { asset: "ETH", amount: 1.0, value: 2.5 },
            Holding { asset: "BTC", amount: 2.0, value: 7.5 },
        ];
        assert_eq!(portfolio_value(&holdings), 10.0);
        assert_eq!(portfolio_value(&[]), 0.0);
    }

    #[test]
    fn fill_fraction_is_unclamped() {
        let base = Experiment { name: "x", description: "y", progress: 150.0 };
        assert_eq!(base.fill_fraction(), 1.5);
        assert_eq!(Experiment { progress: 75.0, ..base }.fill_fraction(), 0.75);
        assert_eq!(Experiment { progress: 0.0, ..base }.fill_fraction(), 0.0);
    }

    #[test]
    fn trade_action_reads_uppercase() {
        assert_eq!(TradeAction::Buy.to_string(), "BUY");
        assert_eq!(TradeAction::Sell.to_string(), "SELL");
        let as_str: &str = TradeAction::Buy.as_ref();
        assert_eq!(as_str, "BUY");
    }

    #[test]
    fn serialized_field_names_are_stable() {
        let holding = serde_json::to_value(Holding {
            asset: "ETH",
            amount: 1000.0,
            value: 2_000_000.0,
        })
        .unwrap();
        assert_eq!(holding["asset"], "ETH");
        assert_eq!(holding["amount"], 1000.0);
        assert_eq!(holding["value"], 2_000_000.0);

        let trade = serde_json::to_value(Trade {
            date: "2023-05-01",
            action: TradeAction::Buy,
            asset: "ETH",
            amount: 50.0,
            price: 1800.0,
        })
        .unwrap();
        assert_eq!(trade["date"], "2023-05-01");
        assert_eq!(trade["action"], "BUY");
        assert_eq!(trade["amount"], 50.0);
        assert_eq!(trade["price"], 1800.0);

        let token = serde_json::to_value(Token {
            name: "Yield Token",
            symbol: "YLD",
            link: "https://example.com/yld",
        })
        .unwrap();
        assert_eq!(token["symbol"], "YLD");
        assert_eq!(token["link"], "https://example.com/yld");

        let point = serde_json::to_value(PricePoint { date: "2023-04-01", value: 1.0 }).unwrap();
        assert_eq!(point["date"], "2023-04-01");
        assert_eq!(point["value"], 1.0);

        let experiment = serde_json::to_value(Experiment {
            name: "Cross-chain Bridge",
            description: "Interoperability solution for multiple blockchains",
            progress: 60.0,
        })
        .unwrap();
        assert_eq!(experiment["name"], "Cross-chain Bridge");
        assert_eq!(experiment["progress"], 60.0);
    }
}
