/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # SpotWire Core
//!
//! Core types and error definitions for the SpotWire SBE decoder.
//!
//! This crate provides the building blocks shared by the other SpotWire crates:
//! - **Error types**: `DecodeError` and `SpotError` built with `thiserror`
//! - **Enumerations**: `OrderStatus`, `TimeInForce`, `OrderType`, `Side`, ...
//! - **Records**: market data, trading and account records
//!
//! ## Encoding Transparency
//!
//! The records derive `serde` with the exchange's JSON field names, so a
//! response decoded from SBE compares equal to the same response parsed from
//! JSON.

pub mod account;
pub mod error;
pub mod market;
pub mod trading;
pub mod types;

pub use account::{Account, AccountTrade, Balance, CommissionRates};
pub use error::{DecodeError, Result, SpotError};
pub use market::{
    AggTrade, AvgPrice, BookTicker, DepthResponse, Kline, PriceChangeStats, PriceLevel,
    SymbolPrice, SymbolTicker, Trade,
};
pub use trading::{CancelOrderResponse, CreateOrderResponse, Fill, Order};
pub use types::{AccountType, OrderStatus, OrderType, SelfTradePreventionMode, Side, TimeInForce};
