/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Domain enumerations shared by the binary and text decoding paths.
//!
//! Every enumeration has a `#[default]` variant. It is the value an
//! unrecognized wire code or JSON string resolves to, so enum drift on the
//! exchange side never aborts an otherwise valid decode:
//! - [`OrderStatus`]: defaults to `UNKNOWN`
//! - [`TimeInForce`]: defaults to `GTC`
//! - [`OrderType`]: defaults to `LIMIT`
//! - [`Side`]: defaults to `BUY`
//! - [`SelfTradePreventionMode`]: defaults to `NONE`
//! - [`AccountType`]: defaults to `SPOT`

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum OrderStatus {
    /// Accepted by the engine.
    New,
    /// Partially filled.
    PartiallyFilled,
    /// Fully filled.
    Filled,
    /// Canceled by the user.
    Canceled,
    /// Cancel in progress.
    PendingCancel,
    /// Rejected by the engine.
    Rejected,
    /// Expired per time-in-force rules.
    Expired,
    /// Expired by self-trade prevention.
    ExpiredInMatch,
    /// Status the decoder does not know.
    #[default]
    Unknown,
}

impl OrderStatus {
    /// Returns the exchange text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::PartiallyFilled => "PARTIALLY_FILLED",
            Self::Filled => "FILLED",
            Self::Canceled => "CANCELED",
            Self::PendingCancel => "PENDING_CANCEL",
            Self::Rejected => "REJECTED",
            Self::Expired => "EXPIRED",
            Self::ExpiredInMatch => "EXPIRED_IN_MATCH",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Parses the exchange text representation, falling back to `Unknown`.
    #[must_use]
    pub fn from_text(s: &str) -> Self {
        match s {
            "NEW" => Self::New,
            "PARTIALLY_FILLED" => Self::PartiallyFilled,
            "FILLED" => Self::Filled,
            "CANCELED" => Self::Canceled,
            "PENDING_CANCEL" => Self::PendingCancel,
            "REJECTED" => Self::Rejected,
            "EXPIRED" => Self::Expired,
            "EXPIRED_IN_MATCH" => Self::ExpiredInMatch,
            _ => Self::Unknown,
        }
    }

    /// Returns true if the order can no longer trade.
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(
            self,
            Self::Filled | Self::Canceled | Self::Rejected | Self::Expired | Self::ExpiredInMatch
        )
    }
}

/// Time in force.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum TimeInForce {
    /// Good till canceled.
    #[default]
    Gtc,
    /// Immediate or cancel.
    Ioc,
    /// Fill or kill.
    Fok,
}

impl TimeInForce {
    /// Returns the exchange text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gtc => "GTC",
            Self::Ioc => "IOC",
            Self::Fok => "FOK",
        }
    }

    /// Parses the exchange text representation, falling back to `Gtc`.
    #[must_use]
    pub fn from_text(s: &str) -> Self {
        match s {
            "IOC" => Self::Ioc,
            "FOK" => Self::Fok,
            _ => Self::Gtc,
        }
    }
}

/// Order type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum OrderType {
    /// Market order.
    Market,
    /// Limit order.
    #[default]
    Limit,
    /// Stop loss.
    StopLoss,
    /// Stop loss limit.
    StopLossLimit,
    /// Take profit.
    TakeProfit,
    /// Take profit limit.
    TakeProfitLimit,
    /// Post-only limit order.
    LimitMaker,
}

impl OrderType {
    /// Returns the exchange text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Market => "MARKET",
            Self::Limit => "LIMIT",
            Self::StopLoss => "STOP_LOSS",
            Self::StopLossLimit => "STOP_LOSS_LIMIT",
            Self::TakeProfit => "TAKE_PROFIT",
            Self::TakeProfitLimit => "TAKE_PROFIT_LIMIT",
            Self::LimitMaker => "LIMIT_MAKER",
        }
    }

    /// Parses the exchange text representation, falling back to `Limit`.
    #[must_use]
    pub fn from_text(s: &str) -> Self {
        match s {
            "MARKET" => Self::Market,
            "STOP_LOSS" => Self::StopLoss,
            "STOP_LOSS_LIMIT" => Self::StopLossLimit,
            "TAKE_PROFIT" => Self::TakeProfit,
            "TAKE_PROFIT_LIMIT" => Self::TakeProfitLimit,
            "LIMIT_MAKER" => Self::LimitMaker,
            _ => Self::Limit,
        }
    }
}

/// Order side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum Side {
    /// Buy order.
    #[default]
    Buy,
    /// Sell order.
    Sell,
}

impl Side {
    /// Returns the exchange text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }

    /// Parses the exchange text representation, falling back to `Buy`.
    #[must_use]
    pub fn from_text(s: &str) -> Self {
        match s {
            "SELL" => Self::Sell,
            _ => Self::Buy,
        }
    }

    /// Returns true if this is a buy order.
    #[must_use]
    pub const fn is_buy(self) -> bool {
        matches!(self, Self::Buy)
    }
}

/// Self-trade prevention mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum SelfTradePreventionMode {
    /// No self-trade prevention.
    #[default]
    None,
    /// Expire the taker order.
    ExpireTaker,
    /// Expire the maker order.
    ExpireMaker,
    /// Expire both orders.
    ExpireBoth,
}

impl SelfTradePreventionMode {
    /// Returns the exchange text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::ExpireTaker => "EXPIRE_TAKER",
            Self::ExpireMaker => "EXPIRE_MAKER",
            Self::ExpireBoth => "EXPIRE_BOTH",
        }
    }

    /// Parses the exchange text representation, falling back to `None`.
    #[must_use]
    pub fn from_text(s: &str) -> Self {
        match s {
            "EXPIRE_TAKER" => Self::ExpireTaker,
            "EXPIRE_MAKER" => Self::ExpireMaker,
            "EXPIRE_BOTH" => Self::ExpireBoth,
            _ => Self::None,
        }
    }
}

/// Account type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum AccountType {
    /// Spot account.
    #[default]
    Spot,
}

impl AccountType {
    /// Returns the exchange text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spot => "SPOT",
        }
    }

    /// Parses the exchange text representation, falling back to `Spot`.
    #[must_use]
    pub fn from_text(_s: &str) -> Self {
        Self::Spot
    }
}

impl From<String> for OrderStatus {
    fn from(s: String) -> Self {
        Self::from_text(&s)
    }
}

impl From<String> for TimeInForce {
    fn from(s: String) -> Self {
        Self::from_text(&s)
    }
}

impl From<String> for OrderType {
    fn from(s: String) -> Self {
        Self::from_text(&s)
    }
}

impl From<String> for Side {
    fn from(s: String) -> Self {
        Self::from_text(&s)
    }
}

impl From<String> for SelfTradePreventionMode {
    fn from(s: String) -> Self {
        Self::from_text(&s)
    }
}

impl From<String> for AccountType {
    fn from(s: String) -> Self {
        Self::from_text(&s)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SelfTradePreventionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_text_round_trip() {
        for status in [
            OrderStatus::New,
            OrderStatus::PartiallyFilled,
            OrderStatus::Filled,
            OrderStatus::Canceled,
            OrderStatus::PendingCancel,
            OrderStatus::Rejected,
            OrderStatus::Expired,
            OrderStatus::ExpiredInMatch,
        ] {
            assert_eq!(OrderStatus::from_text(status.as_str()), status);
        }
        assert_eq!(OrderStatus::from_text("PENDING_NEW"), OrderStatus::Unknown);
    }

    #[test]
    fn test_defaults_match_fallbacks() {
        assert_eq!(OrderStatus::default(), OrderStatus::Unknown);
        assert_eq!(TimeInForce::default(), TimeInForce::Gtc);
        assert_eq!(OrderType::default(), OrderType::Limit);
        assert_eq!(Side::default(), Side::Buy);
        assert_eq!(
            SelfTradePreventionMode::default(),
            SelfTradePreventionMode::None
        );
        assert_eq!(AccountType::default(), AccountType::Spot);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&OrderType::StopLossLimit).unwrap(),
            "\"STOP_LOSS_LIMIT\""
        );
        assert_eq!(
            serde_json::to_string(&SelfTradePreventionMode::ExpireBoth).unwrap(),
            "\"EXPIRE_BOTH\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::ExpiredInMatch).unwrap(),
            "\"EXPIRED_IN_MATCH\""
        );
    }

    #[test]
    fn test_unknown_json_value_uses_default() {
        let tif: TimeInForce = serde_json::from_str("\"GTD\"").unwrap();
        assert_eq!(tif, TimeInForce::Gtc);
        let side: Side = serde_json::from_str("\"SELL\"").unwrap();
        assert_eq!(side, Side::Sell);
        let stp: SelfTradePreventionMode = serde_json::from_str("\"DECREMENT\"").unwrap();
        assert_eq!(stp, SelfTradePreventionMode::None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Side::Sell.to_string(), "SELL");
        assert_eq!(TimeInForce::Fok.to_string(), "FOK");
        assert_eq!(AccountType::Spot.to_string(), "SPOT");
    }

    #[test]
    fn test_is_final() {
        assert!(OrderStatus::Filled.is_final());
        assert!(!OrderStatus::PartiallyFilled.is_final());
        assert!(!OrderStatus::Unknown.is_final());
    }
}
