/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Ticker templates (205-216).
//!
//! Every ticker family has a single-symbol template, where the ticker block
//! is the root block and the symbol follows it, and a list template, where
//! each group element is a ticker block followed by its symbol. Both decode
//! to a list so callers see one shape.

use super::{Payload, STR16, decimal, timestamp};
use spotwire_codec::Cursor;
use spotwire_core::{BookTicker, DecodeError, PriceChangeStats, SymbolPrice, SymbolTicker};
use spotwire_schema::GroupDef;
use spotwire_schema::catalog::{
    BOOK_TICKER_TICKERS, PRICE_TICKER_TICKERS, TICKER_24H_TICKERS, TICKER_FULL_TICKERS,
    TICKER_MINI_TICKERS,
};

type BlockReader<T> = fn(&mut Cursor<'_>) -> Result<T, DecodeError>;

/// Records that carry a symbol read after their fixed block.
trait WithSymbol {
    fn set_symbol(&mut self, symbol: String);
}

impl WithSymbol for PriceChangeStats {
    fn set_symbol(&mut self, symbol: String) {
        self.symbol = symbol;
    }
}

impl WithSymbol for SymbolPrice {
    fn set_symbol(&mut self, symbol: String) {
        self.symbol = symbol;
    }
}

impl WithSymbol for BookTicker {
    fn set_symbol(&mut self, symbol: String) {
        self.symbol = symbol;
    }
}

impl WithSymbol for SymbolTicker {
    fn set_symbol(&mut self, symbol: String) {
        self.symbol = symbol;
    }
}

fn single<T: WithSymbol>(mut p: Payload<'_>, block: BlockReader<T>) -> Result<Vec<T>, DecodeError> {
    let mut ticker = block(&mut p.root)?;
    ticker.set_symbol(p.body.var_string8()?);
    Ok(vec![ticker])
}

fn list<T: WithSymbol>(
    mut p: Payload<'_>,
    group: &GroupDef,
    block: BlockReader<T>,
) -> Result<Vec<T>, DecodeError> {
    p.groups.read(&mut p.body, group, |fixed, tail| {
        let mut ticker = block(fixed)?;
        ticker.set_symbol(tail.var_string8()?);
        Ok(ticker)
    })
}

/// Template 205.
pub(crate) fn ticker_24h_symbol(p: Payload<'_>) -> Result<Vec<PriceChangeStats>, DecodeError> {
    single(p, ticker_24h_block)
}

/// Template 206.
pub(crate) fn ticker_24h_list(p: Payload<'_>) -> Result<Vec<PriceChangeStats>, DecodeError> {
    list(p, &TICKER_24H_TICKERS, ticker_24h_block)
}

/// Template 209.
pub(crate) fn price_ticker_symbol(p: Payload<'_>) -> Result<Vec<SymbolPrice>, DecodeError> {
    single(p, price_ticker_block)
}

/// Template 210.
pub(crate) fn price_ticker_list(p: Payload<'_>) -> Result<Vec<SymbolPrice>, DecodeError> {
    list(p, &PRICE_TICKER_TICKERS, price_ticker_block)
}

/// Template 211.
pub(crate) fn book_ticker_symbol(p: Payload<'_>) -> Result<Vec<BookTicker>, DecodeError> {
    single(p, book_ticker_block)
}

/// Template 212.
pub(crate) fn book_ticker_list(p: Payload<'_>) -> Result<Vec<BookTicker>, DecodeError> {
    list(p, &BOOK_TICKER_TICKERS, book_ticker_block)
}

/// Template 213.
pub(crate) fn ticker_full_symbol(p: Payload<'_>) -> Result<Vec<SymbolTicker>, DecodeError> {
    single(p, ticker_full_block)
}

/// Template 214.
pub(crate) fn ticker_full_list(p: Payload<'_>) -> Result<Vec<SymbolTicker>, DecodeError> {
    list(p, &TICKER_FULL_TICKERS, ticker_full_block)
}

/// Template 215.
pub(crate) fn ticker_mini_symbol(p: Payload<'_>) -> Result<Vec<SymbolTicker>, DecodeError> {
    single(p, ticker_mini_block)
}

/// Template 216.
pub(crate) fn ticker_mini_list(p: Payload<'_>) -> Result<Vec<SymbolTicker>, DecodeError> {
    list(p, &TICKER_MINI_TICKERS, ticker_mini_block)
}

fn price_change_percent(cursor: &mut Cursor<'_>) -> Result<String, DecodeError> {
    Ok(format!("{:.3}", cursor.f32_le()?))
}

fn ticker_24h_block(b: &mut Cursor<'_>) -> Result<PriceChangeStats, DecodeError> {
    let price_exponent = b.i8()?;
    let qty_exponent = b.i8()?;
    Ok(PriceChangeStats {
        symbol: String::new(),
        price_change: decimal(b, price_exponent)?,
        price_change_percent: price_change_percent(b)?,
        weighted_avg_price: decimal(b, price_exponent)?,
        prev_close_price: decimal(b, price_exponent)?,
        last_price: decimal(b, price_exponent)?,
        last_qty: b.fixed_string(STR16)?,
        bid_price: decimal(b, price_exponent)?,
        bid_qty: decimal(b, qty_exponent)?,
        ask_price: decimal(b, price_exponent)?,
        ask_qty: decimal(b, qty_exponent)?,
        open_price: decimal(b, price_exponent)?,
        high_price: decimal(b, price_exponent)?,
        low_price: decimal(b, price_exponent)?,
        volume: b.fixed_string(STR16)?,
        quote_volume: b.fixed_string(STR16)?,
        open_time: timestamp(b)?,
        close_time: timestamp(b)?,
        first_id: b.i64_le()?,
        last_id: b.i64_le()?,
        count: b.i64_le()?,
    })
}

fn price_ticker_block(b: &mut Cursor<'_>) -> Result<SymbolPrice, DecodeError> {
    let price_exponent = b.i8()?;
    Ok(SymbolPrice {
        symbol: String::new(),
        price: decimal(b, price_exponent)?,
    })
}

fn book_ticker_block(b: &mut Cursor<'_>) -> Result<BookTicker, DecodeError> {
    let price_exponent = b.i8()?;
    let qty_exponent = b.i8()?;
    Ok(BookTicker {
        symbol: String::new(),
        bid_price: decimal(b, price_exponent)?,
        bid_quantity: decimal(b, qty_exponent)?,
        ask_price: decimal(b, price_exponent)?,
        ask_quantity: decimal(b, qty_exponent)?,
    })
}

fn ticker_full_block(b: &mut Cursor<'_>) -> Result<SymbolTicker, DecodeError> {
    let price_exponent = b.i8()?;
    let _qty_exponent = b.i8()?;
    Ok(SymbolTicker {
        symbol: String::new(),
        price_change: decimal(b, price_exponent)?,
        price_change_percent: price_change_percent(b)?,
        weighted_avg_price: decimal(b, price_exponent)?,
        open_price: decimal(b, price_exponent)?,
        high_price: decimal(b, price_exponent)?,
        low_price: decimal(b, price_exponent)?,
        last_price: decimal(b, price_exponent)?,
        volume: b.fixed_string(STR16)?,
        quote_volume: b.fixed_string(STR16)?,
        open_time: timestamp(b)?,
        close_time: timestamp(b)?,
        first_id: b.i64_le()?,
        last_id: b.i64_le()?,
        count: b.i64_le()?,
    })
}

fn ticker_mini_block(b: &mut Cursor<'_>) -> Result<SymbolTicker, DecodeError> {
    let price_exponent = b.i8()?;
    let _qty_exponent = b.i8()?;
    Ok(SymbolTicker {
        open_price: decimal(b, price_exponent)?,
        high_price: decimal(b, price_exponent)?,
        low_price: decimal(b, price_exponent)?,
        last_price: decimal(b, price_exponent)?,
        volume: b.fixed_string(STR16)?,
        quote_volume: b.fixed_string(STR16)?,
        open_time: timestamp(b)?,
        close_time: timestamp(b)?,
        first_id: b.i64_le()?,
        last_id: b.i64_le()?,
        count: b.i64_le()?,
        ..SymbolTicker::default()
    })
}
