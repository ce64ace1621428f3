/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Decoded message union.
//!
//! A [`SpotMessage`] holds the domain record produced by one template
//! decoder. Callers that know which response they asked for can extract it
//! directly through [`DecodeTarget`].

use serde::Serialize;
use spotwire_core::{
    Account, AccountTrade, AggTrade, AvgPrice, BookTicker, CancelOrderResponse,
    CreateOrderResponse, DecodeError, DepthResponse, Kline, Order, PriceChangeStats,
    SymbolPrice, SymbolTicker, Trade,
};
use std::fmt;

/// Result of decoding one SBE response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SpotMessage {
    /// Order book snapshot (200).
    Depth(DepthResponse),
    /// Recent trades (201).
    Trades(Vec<Trade>),
    /// Aggregated trades (202).
    AggTrades(Vec<AggTrade>),
    /// Candlesticks (203).
    Klines(Vec<Kline>),
    /// Average price (204).
    AvgPrice(AvgPrice),
    /// 24h tickers (205, 206); single-symbol responses hold one entry.
    PriceChangeStats(Vec<PriceChangeStats>),
    /// Price tickers (209, 210).
    SymbolPrices(Vec<SymbolPrice>),
    /// Book tickers (211, 212).
    BookTickers(Vec<BookTicker>),
    /// Rolling window tickers, full or mini (213-216).
    SymbolTickers(Vec<SymbolTicker>),
    /// Order placement (300, 301, 302).
    NewOrder(CreateOrderResponse),
    /// Order query (304).
    Order(Order),
    /// Order cancellation (305).
    CancelOrder(CancelOrderResponse),
    /// Cancel all open orders (306).
    CancelOpenOrders(Vec<CancelOrderResponse>),
    /// Order listing (308).
    Orders(Vec<Order>),
    /// Account snapshot (400).
    Account(Account),
    /// Account trades (401).
    AccountTrades(Vec<AccountTrade>),
}

/// Variant tag of a [`SpotMessage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Depth,
    Trades,
    AggTrades,
    Klines,
    AvgPrice,
    PriceChangeStats,
    SymbolPrices,
    BookTickers,
    SymbolTickers,
    NewOrder,
    Order,
    CancelOrder,
    CancelOpenOrders,
    Orders,
    Account,
    AccountTrades,
}

impl MessageKind {
    /// Returns the variant name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Depth => "Depth",
            Self::Trades => "Trades",
            Self::AggTrades => "AggTrades",
            Self::Klines => "Klines",
            Self::AvgPrice => "AvgPrice",
            Self::PriceChangeStats => "PriceChangeStats",
            Self::SymbolPrices => "SymbolPrices",
            Self::BookTickers => "BookTickers",
            Self::SymbolTickers => "SymbolTickers",
            Self::NewOrder => "NewOrder",
            Self::Order => "Order",
            Self::CancelOrder => "CancelOrder",
            Self::CancelOpenOrders => "CancelOpenOrders",
            Self::Orders => "Orders",
            Self::Account => "Account",
            Self::AccountTrades => "AccountTrades",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SpotMessage {
    /// Returns the variant tag.
    #[must_use]
    pub const fn kind(&self) -> MessageKind {
        match self {
            Self::Depth(_) => MessageKind::Depth,
            Self::Trades(_) => MessageKind::Trades,
            Self::AggTrades(_) => MessageKind::AggTrades,
            Self::Klines(_) => MessageKind::Klines,
            Self::AvgPrice(_) => MessageKind::AvgPrice,
            Self::PriceChangeStats(_) => MessageKind::PriceChangeStats,
            Self::SymbolPrices(_) => MessageKind::SymbolPrices,
            Self::BookTickers(_) => MessageKind::BookTickers,
            Self::SymbolTickers(_) => MessageKind::SymbolTickers,
            Self::NewOrder(_) => MessageKind::NewOrder,
            Self::Order(_) => MessageKind::Order,
            Self::CancelOrder(_) => MessageKind::CancelOrder,
            Self::CancelOpenOrders(_) => MessageKind::CancelOpenOrders,
            Self::Orders(_) => MessageKind::Orders,
            Self::Account(_) => MessageKind::Account,
            Self::AccountTrades(_) => MessageKind::AccountTrades,
        }
    }

    /// Extracts the record as `T`.
    ///
    /// # Errors
    /// Returns `DecodeError::MappingFailure` if the message holds another kind.
    pub fn into_target<T: DecodeTarget>(self) -> Result<T, DecodeError> {
        let actual = self.kind();
        T::from_message(self).ok_or_else(|| {
            DecodeError::mapping(format!("expected {}, decoded {actual}", T::KIND))
        })
    }
}

/// A record type that can be extracted from a [`SpotMessage`].
pub trait DecodeTarget: Sized {
    /// Kind of message that carries this record.
    const KIND: MessageKind;

    /// Returns the record if `message` is of kind [`Self::KIND`].
    fn from_message(message: SpotMessage) -> Option<Self>;
}

macro_rules! decode_target {
    ($($target:ty => $variant:ident),+ $(,)?) => {
        $(
            impl DecodeTarget for $target {
                const KIND: MessageKind = MessageKind::$variant;

                fn from_message(message: SpotMessage) -> Option<Self> {
                    match message {
                        SpotMessage::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )+
    };
}

decode_target! {
    DepthResponse => Depth,
    Vec<Trade> => Trades,
    Vec<AggTrade> => AggTrades,
    Vec<Kline> => Klines,
    AvgPrice => AvgPrice,
    Vec<PriceChangeStats> => PriceChangeStats,
    Vec<SymbolPrice> => SymbolPrices,
    Vec<BookTicker> => BookTickers,
    Vec<SymbolTicker> => SymbolTickers,
    CreateOrderResponse => NewOrder,
    Order => Order,
    CancelOrderResponse => CancelOrder,
    Vec<CancelOrderResponse> => CancelOpenOrders,
    Vec<Order> => Orders,
    Account => Account,
    Vec<AccountTrade> => AccountTrades,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        let message = SpotMessage::AvgPrice(AvgPrice {
            mins: 5,
            price: "9.35".to_string(),
        });
        assert_eq!(message.kind(), MessageKind::AvgPrice);
        assert_eq!(message.kind().to_string(), "AvgPrice");
    }

    #[test]
    fn test_into_target() {
        let message = SpotMessage::Trades(vec![Trade::default()]);
        let trades: Vec<Trade> = message.into_target().unwrap();
        assert_eq!(trades.len(), 1);
    }

    #[test]
    fn test_into_target_mismatch() {
        let message = SpotMessage::Orders(Vec::new());
        let err = message.into_target::<Vec<AggTrade>>().unwrap_err();
        assert_eq!(
            err,
            DecodeError::mapping("expected AggTrades, decoded Orders")
        );
    }

    #[test]
    fn test_serializes_untagged() {
        let message = SpotMessage::SymbolPrices(vec![SymbolPrice {
            symbol: "BNBUSDT".to_string(),
            price: "612.30".to_string(),
        }]);
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json[0]["symbol"], "BNBUSDT");
        assert_eq!(json[0]["price"], "612.30");
    }
}
