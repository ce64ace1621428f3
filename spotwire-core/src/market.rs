/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Market data records.
//!
//! Prices and quantities are decimal strings, as in the exchange's JSON
//! responses. Timestamps are milliseconds since the Unix epoch.

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

/// A single order book level.
///
/// Serialized as a `[price, quantity]` pair to match the JSON depth payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct PriceLevel {
    /// Level price.
    pub price: String,
    /// Quantity resting at the level.
    pub quantity: String,
}

impl PriceLevel {
    /// Creates a new price level.
    #[must_use]
    pub fn new(price: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            price: price.into(),
            quantity: quantity.into(),
        }
    }
}

impl From<(String, String)> for PriceLevel {
    fn from((price, quantity): (String, String)) -> Self {
        Self { price, quantity }
    }
}

impl From<PriceLevel> for (String, String) {
    fn from(level: PriceLevel) -> Self {
        (level.price, level.quantity)
    }
}

/// Order book snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DepthResponse {
    /// Last update id included in the snapshot.
    pub last_update_id: i64,
    /// Bid levels, in wire order.
    pub bids: Vec<PriceLevel>,
    /// Ask levels, in wire order.
    pub asks: Vec<PriceLevel>,
}

/// Recent trade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Trade {
    /// Trade id.
    pub id: i64,
    /// Trade price.
    pub price: String,
    /// Base asset quantity.
    #[serde(rename = "qty")]
    pub quantity: String,
    /// Quote asset quantity.
    #[serde(rename = "quoteQty")]
    pub quote_quantity: String,
    /// Trade time.
    pub time: i64,
    /// True if the buyer was the maker.
    pub is_buyer_maker: bool,
    /// True if the trade was the best price match.
    pub is_best_match: bool,
}

/// Aggregated trade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggTrade {
    /// Aggregate trade id.
    #[serde(rename = "a")]
    pub agg_trade_id: i64,
    /// Price.
    #[serde(rename = "p")]
    pub price: String,
    /// Quantity.
    #[serde(rename = "q")]
    pub quantity: String,
    /// First trade id.
    #[serde(rename = "f")]
    pub first_trade_id: i64,
    /// Last trade id.
    #[serde(rename = "l")]
    pub last_trade_id: i64,
    /// Trade time.
    #[serde(rename = "T")]
    pub timestamp: i64,
    /// True if the buyer was the maker.
    #[serde(rename = "m")]
    pub is_buyer_maker: bool,
    /// True if the trade was the best price match.
    #[serde(rename = "M")]
    pub is_best_price_match: bool,
}

/// Candlestick.
///
/// The exchange sends each candle as a 12-element array whose last element
/// is unused; that row form and the object form it serializes to both
/// deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "KlineRepr")]
pub struct Kline {
    pub open_time: i64,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
    pub close_time: i64,
    pub quote_asset_volume: String,
    pub trade_num: i64,
    pub taker_buy_base_asset_volume: String,
    pub taker_buy_quote_asset_volume: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum KlineRepr {
    Row(
        i64,
        String,
        String,
        String,
        String,
        String,
        i64,
        String,
        i64,
        String,
        String,
        IgnoredAny,
    ),
    Object(KlineObject),
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct KlineObject {
    open_time: i64,
    open: String,
    high: String,
    low: String,
    close: String,
    volume: String,
    close_time: i64,
    quote_asset_volume: String,
    trade_num: i64,
    taker_buy_base_asset_volume: String,
    taker_buy_quote_asset_volume: String,
}

impl From<KlineRepr> for Kline {
    fn from(repr: KlineRepr) -> Self {
        match repr {
            KlineRepr::Row(
                open_time,
                open,
                high,
                low,
                close,
                volume,
                close_time,
                quote_asset_volume,
                trade_num,
                taker_buy_base_asset_volume,
                taker_buy_quote_asset_volume,
                _,
            ) => Self {
                open_time,
                open,
                high,
                low,
                close,
                volume,
                close_time,
                quote_asset_volume,
                trade_num,
                taker_buy_base_asset_volume,
                taker_buy_quote_asset_volume,
            },
            KlineRepr::Object(k) => Self {
                open_time: k.open_time,
                open: k.open,
                high: k.high,
                low: k.low,
                close: k.close,
                volume: k.volume,
                close_time: k.close_time,
                quote_asset_volume: k.quote_asset_volume,
                trade_num: k.trade_num,
                taker_buy_base_asset_volume: k.taker_buy_base_asset_volume,
                taker_buy_quote_asset_volume: k.taker_buy_quote_asset_volume,
            },
        }
    }
}

/// Current average price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvgPrice {
    /// Averaging window in minutes.
    pub mins: i64,
    /// Average price.
    pub price: String,
}

/// 24 hour rolling window statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceChangeStats {
    pub symbol: String,
    pub price_change: String,
    pub price_change_percent: String,
    pub weighted_avg_price: String,
    pub prev_close_price: String,
    pub last_price: String,
    pub last_qty: String,
    pub bid_price: String,
    pub bid_qty: String,
    pub ask_price: String,
    pub ask_qty: String,
    pub open_price: String,
    pub high_price: String,
    pub low_price: String,
    pub volume: String,
    pub quote_volume: String,
    pub open_time: i64,
    pub close_time: i64,
    pub first_id: i64,
    pub last_id: i64,
    pub count: i64,
}

/// Latest price for a symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolPrice {
    pub symbol: String,
    pub price: String,
}

/// Best bid and ask for a symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookTicker {
    pub symbol: String,
    pub bid_price: String,
    #[serde(rename = "bidQty")]
    pub bid_quantity: String,
    pub ask_price: String,
    #[serde(rename = "askQty")]
    pub ask_quantity: String,
}

/// Rolling window ticker, full or mini.
///
/// The mini variant leaves `price_change`, `price_change_percent` and
/// `weighted_avg_price` empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SymbolTicker {
    pub symbol: String,
    pub price_change: String,
    pub price_change_percent: String,
    pub weighted_avg_price: String,
    pub open_price: String,
    pub high_price: String,
    pub low_price: String,
    pub last_price: String,
    pub volume: String,
    pub quote_volume: String,
    pub open_time: i64,
    pub close_time: i64,
    pub first_id: i64,
    pub last_id: i64,
    pub count: i64,
}
