/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Market data templates: depth, trades, aggregated trades, klines and
//! average price (200-204).

use super::{Payload, STR16, decimal, timestamp};
use spotwire_core::{AggTrade, AvgPrice, DecodeError, DepthResponse, Kline, PriceLevel, Trade};
use spotwire_schema::catalog::{
    AGG_TRADES_TRADES, DEPTH_ASKS, DEPTH_BIDS, KLINES_KLINES, TRADES_TRADES,
};

/// Template 200.
pub(crate) fn depth(mut p: Payload<'_>) -> Result<DepthResponse, DecodeError> {
    let last_update_id = p.root.i64_le()?;
    let price_exponent = p.root.i8()?;
    let qty_exponent = p.root.i8()?;

    let bids = p.groups.read(&mut p.body, &DEPTH_BIDS, |level, _| {
        Ok(PriceLevel::new(
            decimal(level, price_exponent)?,
            decimal(level, qty_exponent)?,
        ))
    })?;
    let asks = p.groups.read(&mut p.body, &DEPTH_ASKS, |level, _| {
        Ok(PriceLevel::new(
            decimal(level, price_exponent)?,
            decimal(level, qty_exponent)?,
        ))
    })?;

    Ok(DepthResponse {
        last_update_id,
        bids,
        asks,
    })
}

/// Template 201.
pub(crate) fn trades(mut p: Payload<'_>) -> Result<Vec<Trade>, DecodeError> {
    let price_exponent = p.root.i8()?;
    let qty_exponent = p.root.i8()?;

    p.groups.read(&mut p.body, &TRADES_TRADES, |trade, _| {
        Ok(Trade {
            id: trade.i64_le()?,
            price: decimal(trade, price_exponent)?,
            quantity: decimal(trade, qty_exponent)?,
            // Quote quantity is carried with the quantity exponent.
            quote_quantity: decimal(trade, qty_exponent)?,
            time: timestamp(trade)?,
            is_buyer_maker: trade.bool()?,
            is_best_match: trade.bool()?,
        })
    })
}

/// Template 202.
pub(crate) fn agg_trades(mut p: Payload<'_>) -> Result<Vec<AggTrade>, DecodeError> {
    let price_exponent = p.root.i8()?;
    let qty_exponent = p.root.i8()?;

    p.groups.read(&mut p.body, &AGG_TRADES_TRADES, |trade, _| {
        Ok(AggTrade {
            agg_trade_id: trade.i64_le()?,
            price: decimal(trade, price_exponent)?,
            quantity: decimal(trade, qty_exponent)?,
            first_trade_id: trade.i64_le()?,
            last_trade_id: trade.i64_le()?,
            timestamp: timestamp(trade)?,
            is_buyer_maker: trade.bool()?,
            is_best_price_match: trade.bool()?,
        })
    })
}

/// Template 203.
pub(crate) fn klines(mut p: Payload<'_>) -> Result<Vec<Kline>, DecodeError> {
    let price_exponent = p.root.i8()?;
    // Kline volumes are fixed-width strings; the quantity exponent is unused.
    let _qty_exponent = p.root.i8()?;

    p.groups.read(&mut p.body, &KLINES_KLINES, |kline, _| {
        Ok(Kline {
            open_time: timestamp(kline)?,
            open: decimal(kline, price_exponent)?,
            high: decimal(kline, price_exponent)?,
            low: decimal(kline, price_exponent)?,
            close: decimal(kline, price_exponent)?,
            volume: kline.fixed_string(STR16)?,
            close_time: timestamp(kline)?,
            quote_asset_volume: kline.fixed_string(STR16)?,
            trade_num: kline.i64_le()?,
            taker_buy_base_asset_volume: kline.fixed_string(STR16)?,
            taker_buy_quote_asset_volume: kline.fixed_string(STR16)?,
        })
    })
}

/// Template 204.
pub(crate) fn avg_price(mut p: Payload<'_>) -> Result<AvgPrice, DecodeError> {
    let mins = p.root.i64_le()?;
    let price_exponent = p.root.i8()?;
    Ok(AvgPrice {
        mins,
        price: decimal(&mut p.root, price_exponent)?,
    })
}
