//! Trading response decoding example.
//!
//! Decodes a FULL order placement response and a cancel-all response, then
//! dispatches on the decoded message kind.

mod common;

use common::init_logging;
use spotwire::prelude::*;
use tracing::{info, warn};

fn build_new_order_full() -> Vec<u8> {
    let mut w = MessageWriter::new();
    w.header(TemplateId::NewOrderFull, 63);
    w.put_i8(-2).put_i8(-8);
    w.put_i64(28).put_i64(-1).put_i64(1_507_725_176_595_000);
    w.decimal(400_000)
        .decimal(1_000_000_000)
        .decimal(1_000_000_000)
        .decimal(4_000_000_000_000);
    w.put_u8(2).put_u8(0).put_u8(1).put_u8(0).put_u8(1);
    w.group_header(33, 1);
    w.put_i8(-8)
        .decimal(400_000)
        .decimal(1_000_000_000)
        .decimal(4_000_000)
        .put_i64(56);
    w.var_string8("BNB");
    w.var_string8("BTCUSDT").var_string8("6gCrw2kRUAF9CvJDGP16IP");
    w.finish().to_vec()
}

fn build_cancel_open_orders() -> Vec<u8> {
    let mut w = MessageWriter::new();
    w.header(TemplateId::CancelOpenOrders, 0);
    w.group_header(0, 2);
    w.var_data16(br#"{"symbol":"BTCUSDT","orderId":11,"status":"CANCELED","side":"BUY"}"#);
    w.var_data16(br#"{"symbol":"BTCUSDT","orderId":12,"status":"CANCELED","side":"SELL"}"#);
    w.finish().to_vec()
}

fn report(message: SpotMessage) {
    match message {
        SpotMessage::NewOrder(order) => {
            info!(
                "Order {} {} status={:?} fills={}",
                order.order_id,
                order.symbol,
                order.status,
                order.fills.len()
            );
            for fill in &order.fills {
                info!(
                    "  fill {}: {} @ {} fee {} {}",
                    fill.trade_id, fill.quantity, fill.price, fill.commission, fill.commission_asset
                );
            }
        }
        SpotMessage::CancelOpenOrders(responses) => {
            for response in responses {
                info!(
                    "Canceled {} {} ({})",
                    response.order_id, response.side, response.status
                );
            }
        }
        other => warn!("Unhandled message kind: {}", other.kind()),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let decoder = SpotDecoder::try_new(DecoderConfig::new().with_max_group_entries(10_000))?;

    for buffer in [build_new_order_full(), build_cancel_open_orders()] {
        report(decoder.decode(&buffer)?);
    }

    let order: CreateOrderResponse = decoder.decode_as(&build_new_order_full())?;
    println!("{}", serde_json::to_string_pretty(&order)?);

    Ok(())
}
