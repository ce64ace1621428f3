/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Wire enumeration codes to domain enumerations.
//!
//! Each mapping is a closed match with one fallback arm. An unknown code is
//! logged and mapped to the fallback; it never fails the decode.

use spotwire_core::types::{
    AccountType, OrderStatus, OrderType, SelfTradePreventionMode, Side, TimeInForce,
};
use tracing::warn;

/// Maps an `OrderStatus` wire code.
#[must_use]
pub fn order_status(code: u8) -> OrderStatus {
    match code {
        0 => OrderStatus::New,
        1 => OrderStatus::PartiallyFilled,
        2 => OrderStatus::Filled,
        3 => OrderStatus::Canceled,
        4 => OrderStatus::PendingCancel,
        5 => OrderStatus::Rejected,
        6 => OrderStatus::Expired,
        9 => OrderStatus::ExpiredInMatch,
        _ => unknown("OrderStatus", code, OrderStatus::Unknown),
    }
}

/// Maps a `TimeInForce` wire code.
#[must_use]
pub fn time_in_force(code: u8) -> TimeInForce {
    match code {
        0 => TimeInForce::Gtc,
        1 => TimeInForce::Ioc,
        2 => TimeInForce::Fok,
        _ => unknown("TimeInForce", code, TimeInForce::Gtc),
    }
}

/// Maps an `OrderType` wire code.
#[must_use]
pub fn order_type(code: u8) -> OrderType {
    match code {
        0 => OrderType::Market,
        1 => OrderType::Limit,
        2 => OrderType::StopLoss,
        3 => OrderType::StopLossLimit,
        4 => OrderType::TakeProfit,
        5 => OrderType::TakeProfitLimit,
        6 => OrderType::LimitMaker,
        _ => unknown("OrderType", code, OrderType::Limit),
    }
}

/// Maps an `OrderSide` wire code.
#[must_use]
pub fn side(code: u8) -> Side {
    match code {
        0 => Side::Buy,
        1 => Side::Sell,
        _ => unknown("OrderSide", code, Side::Buy),
    }
}

/// Maps a `SelfTradePreventionMode` wire code.
#[must_use]
pub fn self_trade_prevention_mode(code: u8) -> SelfTradePreventionMode {
    match code {
        1 => SelfTradePreventionMode::None,
        2 => SelfTradePreventionMode::ExpireTaker,
        3 => SelfTradePreventionMode::ExpireMaker,
        4 => SelfTradePreventionMode::ExpireBoth,
        _ => unknown(
            "SelfTradePreventionMode",
            code,
            SelfTradePreventionMode::None,
        ),
    }
}

/// Maps an `AccountType` wire code.
#[must_use]
pub fn account_type(code: u8) -> AccountType {
    match code {
        0 => AccountType::Spot,
        _ => unknown("AccountType", code, AccountType::Spot),
    }
}

#[inline]
fn unknown<T>(enumeration: &'static str, code: u8, fallback: T) -> T {
    warn!(enumeration, code, "unknown enum code, using default");
    fallback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_codes() {
        assert_eq!(order_status(0), OrderStatus::New);
        assert_eq!(order_status(3), OrderStatus::Canceled);
        assert_eq!(order_status(6), OrderStatus::Expired);
        assert_eq!(order_status(9), OrderStatus::ExpiredInMatch);
    }

    #[test]
    fn test_order_status_gaps_are_unknown() {
        for code in [7, 8, 10, 254, 255] {
            assert_eq!(order_status(code), OrderStatus::Unknown, "code {code}");
        }
    }

    #[test]
    fn test_time_in_force_fallback() {
        assert_eq!(time_in_force(1), TimeInForce::Ioc);
        assert_eq!(time_in_force(2), TimeInForce::Fok);
        assert_eq!(time_in_force(77), TimeInForce::Gtc);
    }

    #[test]
    fn test_order_type_fallback() {
        assert_eq!(order_type(0), OrderType::Market);
        assert_eq!(order_type(6), OrderType::LimitMaker);
        assert_eq!(order_type(7), OrderType::Limit);
    }

    #[test]
    fn test_side_fallback() {
        assert_eq!(side(1), Side::Sell);
        assert_eq!(side(2), Side::Buy);
    }

    #[test]
    fn test_self_trade_prevention_starts_at_one() {
        assert_eq!(self_trade_prevention_mode(0), SelfTradePreventionMode::None);
        assert_eq!(self_trade_prevention_mode(1), SelfTradePreventionMode::None);
        assert_eq!(
            self_trade_prevention_mode(4),
            SelfTradePreventionMode::ExpireBoth
        );
    }

    #[test]
    fn test_account_type() {
        assert_eq!(account_type(0), AccountType::Spot);
        assert_eq!(account_type(3), AccountType::Spot);
    }
}
