/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # SpotWire
//!
//! A decoder for spot exchange responses encoded with SBE (Simple Binary
//! Encoding, schema 3 version 1).
//!
//! SpotWire turns a binary response buffer into the same records the
//! exchange's JSON responses deserialize to, so callers can switch encodings
//! without touching their domain code.
//!
//! ## Features
//!
//! - **Closed template catalog**: 24 response templates, dispatched by an
//!   exhaustive match
//! - **Forward compatible**: unknown trailing block bytes are skipped
//! - **Bounded**: message size and group counts are checked before allocating
//! - **Shareable**: the decoder is immutable, `Send` and `Sync`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use spotwire::prelude::*;
//!
//! let decoder = SpotDecoder::new(DecoderConfig::new().with_expected_schema_id(3));
//! let depth: DepthResponse = decoder.decode_as(&buffer)?;
//! for level in &depth.bids {
//!     println!("{} @ {}", level.quantity, level.price);
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Error types, enumerations and domain records
//! - [`schema`]: Template catalog and schema constants
//! - [`codec`]: Cursor, primitive codecs, group reader and message writer
//! - [`decoder`]: Decoder, configuration and message union

pub mod core {
    //! Error types, enumerations and domain records.
    pub use spotwire_core::*;
}

pub mod schema {
    //! Template catalog and schema constants.
    pub use spotwire_schema::*;
}

pub mod codec {
    //! Cursor, primitive codecs, group reader and message writer.
    pub use spotwire_codec::*;
}

pub mod decoder {
    //! Decoder, configuration and message union.
    pub use spotwire_decoder::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use spotwire_core::{
        Account, AccountTrade, AccountType, AggTrade, AvgPrice, Balance, BookTicker,
        CancelOrderResponse, CommissionRates, CreateOrderResponse, DecodeError, DepthResponse,
        Fill, Kline, Order, OrderStatus, OrderType, PriceChangeStats, PriceLevel, Result,
        SelfTradePreventionMode, Side, SpotError, SymbolPrice, SymbolTicker, TimeInForce, Trade,
    };

    // Schema
    pub use spotwire_schema::{SCHEMA_ID, SCHEMA_VERSION, TemplateId};

    // Codec
    pub use spotwire_codec::{FixedPointDecimal, MessageHeader, MessageWriter};

    // Decoder
    pub use spotwire_decoder::{
        DecodeTarget, DecoderConfig, DecoderConfigBuilder, MessageKind, SpotDecoder, SpotMessage,
    };
}
