/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Template catalog for the spot SBE schema.
//!
//! This module defines the closed set of message templates the decoder
//! understands, together with the widths of their known fixed blocks:
//! - [`TemplateId`]: the template id enumeration
//! - [`MessageDef`]: root block width and repeating groups of a template
//! - [`GroupDef`]: element block width of a repeating group

use serde::Serialize;
use std::fmt;

/// Schema id of the spot SBE schema.
pub const SCHEMA_ID: u16 = 3;

/// Schema version the layouts in this catalog describe.
pub const SCHEMA_VERSION: u16 = 1;

/// Width of the message header in bytes.
pub const MESSAGE_HEADER_LENGTH: usize = 8;

/// Width of a `groupSizeEncoding` dimension header in bytes.
pub const GROUP_HEADER_LENGTH: usize = 6;

/// Message template id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u16)]
pub enum TemplateId {
    /// Order book snapshot.
    Depth = 200,
    /// Recent trades.
    Trades = 201,
    /// Aggregated trades.
    AggTrades = 202,
    /// Candlesticks.
    Klines = 203,
    /// Current average price.
    AveragePrice = 204,
    /// 24h ticker, single symbol.
    Ticker24hSymbolFull = 205,
    /// 24h ticker, symbol list.
    Ticker24hFull = 206,
    /// Price ticker, single symbol.
    PriceTickerSymbol = 209,
    /// Price ticker, symbol list.
    PriceTicker = 210,
    /// Book ticker, single symbol.
    BookTickerSymbol = 211,
    /// Book ticker, symbol list.
    BookTicker = 212,
    /// Rolling window ticker (full), single symbol.
    TickerSymbolFull = 213,
    /// Rolling window ticker (full), symbol list.
    TickerFull = 214,
    /// Rolling window ticker (mini), single symbol.
    TickerSymbolMini = 215,
    /// Rolling window ticker (mini), symbol list.
    TickerMini = 216,
    /// New order, ACK response type.
    NewOrderAck = 300,
    /// New order, RESULT response type.
    NewOrderResult = 301,
    /// New order, FULL response type.
    NewOrderFull = 302,
    /// Order query.
    Order = 304,
    /// Order cancellation.
    CancelOrder = 305,
    /// Cancel all open orders on a symbol.
    CancelOpenOrders = 306,
    /// Order listing.
    Orders = 308,
    /// Account snapshot.
    Account = 400,
    /// Account trade list.
    AccountTrades = 401,
}

impl TemplateId {
    /// Every template in the catalog, in id order.
    pub const ALL: [Self; 24] = [
        Self::Depth,
        Self::Trades,
        Self::AggTrades,
        Self::Klines,
        Self::AveragePrice,
        Self::Ticker24hSymbolFull,
        Self::Ticker24hFull,
        Self::PriceTickerSymbol,
        Self::PriceTicker,
        Self::BookTickerSymbol,
        Self::BookTicker,
        Self::TickerSymbolFull,
        Self::TickerFull,
        Self::TickerSymbolMini,
        Self::TickerMini,
        Self::NewOrderAck,
        Self::NewOrderResult,
        Self::NewOrderFull,
        Self::Order,
        Self::CancelOrder,
        Self::CancelOpenOrders,
        Self::Orders,
        Self::Account,
        Self::AccountTrades,
    ];

    /// Resolves a wire template id.
    ///
    /// # Returns
    /// `Some(TemplateId)` for ids in the catalog, `None` otherwise.
    #[must_use]
    pub const fn from_u16(id: u16) -> Option<Self> {
        Some(match id {
            200 => Self::Depth,
            201 => Self::Trades,
            202 => Self::AggTrades,
            203 => Self::Klines,
            204 => Self::AveragePrice,
            205 => Self::Ticker24hSymbolFull,
            206 => Self::Ticker24hFull,
            209 => Self::PriceTickerSymbol,
            210 => Self::PriceTicker,
            211 => Self::BookTickerSymbol,
            212 => Self::BookTicker,
            213 => Self::TickerSymbolFull,
            214 => Self::TickerFull,
            215 => Self::TickerSymbolMini,
            216 => Self::TickerMini,
            300 => Self::NewOrderAck,
            301 => Self::NewOrderResult,
            302 => Self::NewOrderFull,
            304 => Self::Order,
            305 => Self::CancelOrder,
            306 => Self::CancelOpenOrders,
            308 => Self::Orders,
            400 => Self::Account,
            401 => Self::AccountTrades,
            _ => return None,
        })
    }

    /// Returns the wire template id.
    #[inline]
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Returns the schema message name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.definition().name
    }

    /// Returns the width of the known root block fields.
    #[must_use]
    pub const fn root_block_length(self) -> usize {
        self.definition().root_block_length
    }

    /// Returns the catalog entry for this template.
    #[must_use]
    pub const fn definition(self) -> &'static MessageDef {
        match self {
            Self::Depth => &DEPTH,
            Self::Trades => &TRADES,
            Self::AggTrades => &AGG_TRADES,
            Self::Klines => &KLINES,
            Self::AveragePrice => &AVERAGE_PRICE,
            Self::Ticker24hSymbolFull => &TICKER_24H_SYMBOL_FULL,
            Self::Ticker24hFull => &TICKER_24H_FULL,
            Self::PriceTickerSymbol => &PRICE_TICKER_SYMBOL,
            Self::PriceTicker => &PRICE_TICKER,
            Self::BookTickerSymbol => &BOOK_TICKER_SYMBOL,
            Self::BookTicker => &BOOK_TICKER,
            Self::TickerSymbolFull => &TICKER_SYMBOL_FULL,
            Self::TickerFull => &TICKER_FULL,
            Self::TickerSymbolMini => &TICKER_SYMBOL_MINI,
            Self::TickerMini => &TICKER_MINI,
            Self::NewOrderAck => &NEW_ORDER_ACK,
            Self::NewOrderResult => &NEW_ORDER_RESULT,
            Self::NewOrderFull => &NEW_ORDER_FULL,
            Self::Order => &ORDER,
            Self::CancelOrder => &CANCEL_ORDER,
            Self::CancelOpenOrders => &CANCEL_OPEN_ORDERS,
            Self::Orders => &ORDERS,
            Self::Account => &ACCOUNT,
            Self::AccountTrades => &ACCOUNT_TRADES,
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.as_u16())
    }
}

impl TryFrom<u16> for TemplateId {
    type Error = u16;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::from_u16(value).ok_or(value)
    }
}

/// Definition of a message template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MessageDef {
    /// Schema message name.
    pub name: &'static str,
    /// Width of the known root block fields for [`SCHEMA_VERSION`].
    pub root_block_length: usize,
    /// Repeating groups, in wire order.
    pub groups: &'static [GroupDef],
}

/// Definition of a repeating group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupDef {
    /// Group name.
    pub name: &'static str,
    /// Width of the known fixed fields of one element.
    pub block_length: usize,
}

/// Fixed widths of the shared blocks reused by several templates.
pub mod block {
    /// 24h ticker block (templates 205, 206).
    pub const TICKER_24H: usize = 182;
    /// Full rolling window ticker block (templates 213, 214).
    pub const TICKER_FULL: usize = 126;
    /// Mini rolling window ticker block (templates 215, 216).
    pub const TICKER_MINI: usize = 106;
    /// Price ticker block (templates 209, 210).
    pub const PRICE_TICKER: usize = 9;
    /// Book ticker block (templates 211, 212).
    pub const BOOK_TICKER: usize = 34;
    /// Order result block (templates 301, 302).
    pub const ORDER_RESULT: usize = 63;
    /// Order query block (templates 304, 308).
    pub const ORDER_QUERY: usize = 70;
    /// Cancel order block (template 305).
    pub const CANCEL_ORDER: usize = 63;
}

/// Bid group of [`TemplateId::Depth`].
pub const DEPTH_BIDS: GroupDef = GroupDef {
    name: "bids",
    block_length: 16,
};

/// Ask group of [`TemplateId::Depth`].
pub const DEPTH_ASKS: GroupDef = GroupDef {
    name: "asks",
    block_length: 16,
};

/// Trade group of [`TemplateId::Trades`].
pub const TRADES_TRADES: GroupDef = GroupDef {
    name: "trades",
    block_length: 42,
};

/// Trade group of [`TemplateId::AggTrades`].
pub const AGG_TRADES_TRADES: GroupDef = GroupDef {
    name: "aggTrades",
    block_length: 50,
};

/// Kline group of [`TemplateId::Klines`].
pub const KLINES_KLINES: GroupDef = GroupDef {
    name: "klines",
    block_length: 120,
};

/// Ticker group of [`TemplateId::Ticker24hFull`].
pub const TICKER_24H_TICKERS: GroupDef = GroupDef {
    name: "tickers",
    block_length: block::TICKER_24H,
};

/// Ticker group of [`TemplateId::PriceTicker`].
pub const PRICE_TICKER_TICKERS: GroupDef = GroupDef {
    name: "tickers",
    block_length: block::PRICE_TICKER,
};

/// Ticker group of [`TemplateId::BookTicker`].
pub const BOOK_TICKER_TICKERS: GroupDef = GroupDef {
    name: "tickers",
    block_length: block::BOOK_TICKER,
};

/// Ticker group of [`TemplateId::TickerFull`].
pub const TICKER_FULL_TICKERS: GroupDef = GroupDef {
    name: "tickers",
    block_length: block::TICKER_FULL,
};

/// Ticker group of [`TemplateId::TickerMini`].
pub const TICKER_MINI_TICKERS: GroupDef = GroupDef {
    name: "tickers",
    block_length: block::TICKER_MINI,
};

/// Fill group of [`TemplateId::NewOrderFull`].
pub const NEW_ORDER_FULL_FILLS: GroupDef = GroupDef {
    name: "fills",
    block_length: 33,
};

/// Response group of [`TemplateId::CancelOpenOrders`].
pub const CANCEL_OPEN_ORDERS_RESPONSES: GroupDef = GroupDef {
    name: "responses",
    block_length: 0,
};

/// Order group of [`TemplateId::Orders`].
pub const ORDERS_ORDERS: GroupDef = GroupDef {
    name: "orders",
    block_length: block::ORDER_QUERY,
};

/// Balance group of [`TemplateId::Account`].
pub const ACCOUNT_BALANCES: GroupDef = GroupDef {
    name: "balances",
    block_length: 17,
};

/// Permission group of [`TemplateId::Account`].
pub const ACCOUNT_PERMISSIONS: GroupDef = GroupDef {
    name: "permissions",
    block_length: 0,
};

/// Trade group of [`TemplateId::AccountTrades`].
pub const ACCOUNT_TRADES_TRADES: GroupDef = GroupDef {
    name: "trades",
    block_length: 70,
};

const DEPTH: MessageDef = MessageDef {
    name: "DepthResponse",
    root_block_length: 10,
    groups: &[DEPTH_BIDS, DEPTH_ASKS],
};

const TRADES: MessageDef = MessageDef {
    name: "TradesResponse",
    root_block_length: 2,
    groups: &[TRADES_TRADES],
};

const AGG_TRADES: MessageDef = MessageDef {
    name: "AggTradesResponse",
    root_block_length: 2,
    groups: &[AGG_TRADES_TRADES],
};

const KLINES: MessageDef = MessageDef {
    name: "KlinesResponse",
    root_block_length: 2,
    groups: &[KLINES_KLINES],
};

const AVERAGE_PRICE: MessageDef = MessageDef {
    name: "AveragePriceResponse",
    root_block_length: 17,
    groups: &[],
};

const TICKER_24H_SYMBOL_FULL: MessageDef = MessageDef {
    name: "Ticker24hSymbolFullResponse",
    root_block_length: block::TICKER_24H,
    groups: &[],
};

const TICKER_24H_FULL: MessageDef = MessageDef {
    name: "Ticker24hFullResponse",
    root_block_length: 0,
    groups: &[TICKER_24H_TICKERS],
};

const PRICE_TICKER_SYMBOL: MessageDef = MessageDef {
    name: "PriceTickerSymbolResponse",
    root_block_length: block::PRICE_TICKER,
    groups: &[],
};

const PRICE_TICKER: MessageDef = MessageDef {
    name: "PriceTickerResponse",
    root_block_length: 0,
    groups: &[PRICE_TICKER_TICKERS],
};

const BOOK_TICKER_SYMBOL: MessageDef = MessageDef {
    name: "BookTickerSymbolResponse",
    root_block_length: block::BOOK_TICKER,
    groups: &[],
};

const BOOK_TICKER: MessageDef = MessageDef {
    name: "BookTickerResponse",
    root_block_length: 0,
    groups: &[BOOK_TICKER_TICKERS],
};

const TICKER_SYMBOL_FULL: MessageDef = MessageDef {
    name: "TickerSymbolFullResponse",
    root_block_length: block::TICKER_FULL,
    groups: &[],
};

const TICKER_FULL: MessageDef = MessageDef {
    name: "TickerFullResponse",
    root_block_length: 0,
    groups: &[TICKER_FULL_TICKERS],
};

const TICKER_SYMBOL_MINI: MessageDef = MessageDef {
    name: "TickerSymbolMiniResponse",
    root_block_length: block::TICKER_MINI,
    groups: &[],
};

const TICKER_MINI: MessageDef = MessageDef {
    name: "TickerMiniResponse",
    root_block_length: 0,
    groups: &[TICKER_MINI_TICKERS],
};

const NEW_ORDER_ACK: MessageDef = MessageDef {
    name: "NewOrderAckResponse",
    root_block_length: 24,
    groups: &[],
};

const NEW_ORDER_RESULT: MessageDef = MessageDef {
    name: "NewOrderResultResponse",
    root_block_length: block::ORDER_RESULT,
    groups: &[],
};

const NEW_ORDER_FULL: MessageDef = MessageDef {
    name: "NewOrderFullResponse",
    root_block_length: block::ORDER_RESULT,
    groups: &[NEW_ORDER_FULL_FILLS],
};

const ORDER: MessageDef = MessageDef {
    name: "OrderResponse",
    root_block_length: block::ORDER_QUERY,
    groups: &[],
};

const CANCEL_ORDER: MessageDef = MessageDef {
    name: "CancelOrderResponse",
    root_block_length: block::CANCEL_ORDER,
    groups: &[],
};

const CANCEL_OPEN_ORDERS: MessageDef = MessageDef {
    name: "CancelOpenOrdersResponse",
    root_block_length: 0,
    groups: &[CANCEL_OPEN_ORDERS_RESPONSES],
};

const ORDERS: MessageDef = MessageDef {
    name: "OrdersResponse",
    root_block_length: 0,
    groups: &[ORDERS_ORDERS],
};

const ACCOUNT: MessageDef = MessageDef {
    name: "AccountResponse",
    root_block_length: 56,
    groups: &[ACCOUNT_BALANCES, ACCOUNT_PERMISSIONS],
};

const ACCOUNT_TRADES: MessageDef = MessageDef {
    name: "AccountTradesResponse",
    root_block_length: 0,
    groups: &[ACCOUNT_TRADES_TRADES],
};
