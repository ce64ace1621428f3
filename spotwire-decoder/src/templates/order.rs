/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Trading templates: order placement, query, cancellation and listing
//! (300-308).

use super::{Payload, decimal, timestamp};
use crate::mapping;
use spotwire_codec::Cursor;
use spotwire_core::{CancelOrderResponse, CreateOrderResponse, DecodeError, Fill, Order};
use spotwire_schema::catalog::{CANCEL_OPEN_ORDERS_RESPONSES, NEW_ORDER_FULL_FILLS, ORDERS_ORDERS};

/// Template 300.
pub(crate) fn new_order_ack(mut p: Payload<'_>) -> Result<CreateOrderResponse, DecodeError> {
    let order_id = p.root.i64_le()?;
    let order_list_id = p.root.i64_le()?;
    let transact_time = timestamp(&mut p.root)?;
    Ok(CreateOrderResponse {
        symbol: p.body.var_string8()?,
        order_id,
        order_list_id,
        client_order_id: p.body.var_string8()?,
        transact_time,
        ..CreateOrderResponse::default()
    })
}

/// Template 301.
pub(crate) fn new_order_result(mut p: Payload<'_>) -> Result<CreateOrderResponse, DecodeError> {
    let price_exponent = p.root.i8()?;
    let qty_exponent = p.root.i8()?;
    let mut response = order_result(&mut p.root, price_exponent, qty_exponent)?;
    response.symbol = p.body.var_string8()?;
    response.client_order_id = p.body.var_string8()?;
    Ok(response)
}

/// Template 302.
///
/// Fill prices and quantities use the message exponents; each fill carries
/// its own commission exponent.
pub(crate) fn new_order_full(mut p: Payload<'_>) -> Result<CreateOrderResponse, DecodeError> {
    let price_exponent = p.root.i8()?;
    let qty_exponent = p.root.i8()?;
    let mut response = order_result(&mut p.root, price_exponent, qty_exponent)?;

    response.fills = p.groups.read(&mut p.body, &NEW_ORDER_FULL_FILLS, |fill, tail| {
        let commission_exponent = fill.i8()?;
        let price = decimal(fill, price_exponent)?;
        let quantity = decimal(fill, qty_exponent)?;
        let commission = decimal(fill, commission_exponent)?;
        Ok(Fill {
            trade_id: fill.i64_le()?,
            price,
            quantity,
            commission,
            commission_asset: tail.var_string8()?,
        })
    })?;
    response.symbol = p.body.var_string8()?;
    response.client_order_id = p.body.var_string8()?;
    Ok(response)
}

/// Template 304.
pub(crate) fn order(mut p: Payload<'_>) -> Result<Order, DecodeError> {
    let mut order = order_query(&mut p.root)?;
    order.symbol = p.body.var_string8()?;
    order.client_order_id = p.body.var_string8()?;
    Ok(order)
}

/// Template 305.
pub(crate) fn cancel_order(mut p: Payload<'_>) -> Result<CancelOrderResponse, DecodeError> {
    let b = &mut p.root;
    let price_exponent = b.i8()?;
    let qty_exponent = b.i8()?;
    let mut response = CancelOrderResponse {
        order_id: b.i64_le()?,
        order_list_id: b.i64_le()?,
        transact_time: timestamp(b)?,
        price: decimal(b, price_exponent)?,
        orig_qty: decimal(b, qty_exponent)?,
        executed_qty: decimal(b, qty_exponent)?,
        cummulative_quote_qty: decimal(b, qty_exponent)?,
        status: mapping::order_status(b.u8()?),
        time_in_force: mapping::time_in_force(b.u8()?),
        order_type: mapping::order_type(b.u8()?),
        side: mapping::side(b.u8()?),
        self_trade_prevention_mode: mapping::self_trade_prevention_mode(b.u8()?),
        ..CancelOrderResponse::default()
    };
    response.symbol = p.body.var_string8()?;
    response.orig_client_order_id = p.body.var_string8()?;
    response.client_order_id = p.body.var_string8()?;
    Ok(response)
}

/// Template 306.
///
/// Each group element holds one cancel response as exchange JSON.
pub(crate) fn cancel_open_orders(
    mut p: Payload<'_>,
) -> Result<Vec<CancelOrderResponse>, DecodeError> {
    let mut index = 0usize;
    p.groups
        .read(&mut p.body, &CANCEL_OPEN_ORDERS_RESPONSES, |_, tail| {
            let json = tail.var_data16()?;
            let response = serde_json::from_slice::<CancelOrderResponse>(json).map_err(|err| {
                DecodeError::mapping(format!("cancel response {index}: {err}"))
            });
            index += 1;
            response
        })
}

/// Template 308.
pub(crate) fn orders(mut p: Payload<'_>) -> Result<Vec<Order>, DecodeError> {
    p.groups.read(&mut p.body, &ORDERS_ORDERS, |fixed, tail| {
        let mut order = order_query(fixed)?;
        order.symbol = tail.var_string8()?;
        order.client_order_id = tail.var_string8()?;
        Ok(order)
    })
}

/// Reads the order result block past its two exponents.
fn order_result(
    b: &mut Cursor<'_>,
    price_exponent: i8,
    qty_exponent: i8,
) -> Result<CreateOrderResponse, DecodeError> {
    Ok(CreateOrderResponse {
        order_id: b.i64_le()?,
        order_list_id: b.i64_le()?,
        transact_time: timestamp(b)?,
        price: decimal(b, price_exponent)?,
        orig_qty: decimal(b, qty_exponent)?,
        executed_qty: decimal(b, qty_exponent)?,
        cummulative_quote_qty: decimal(b, qty_exponent)?,
        status: Some(mapping::order_status(b.u8()?)),
        time_in_force: Some(mapping::time_in_force(b.u8()?)),
        order_type: Some(mapping::order_type(b.u8()?)),
        side: Some(mapping::side(b.u8()?)),
        self_trade_prevention_mode: Some(mapping::self_trade_prevention_mode(b.u8()?)),
        ..CreateOrderResponse::default()
    })
}

/// Reads the order query block.
fn order_query(b: &mut Cursor<'_>) -> Result<Order, DecodeError> {
    let price_exponent = b.i8()?;
    let qty_exponent = b.i8()?;
    Ok(Order {
        order_id: b.i64_le()?,
        order_list_id: b.i64_le()?,
        price: decimal(b, price_exponent)?,
        orig_qty: decimal(b, qty_exponent)?,
        executed_qty: decimal(b, qty_exponent)?,
        cummulative_quote_qty: decimal(b, qty_exponent)?,
        status: mapping::order_status(b.u8()?),
        time_in_force: mapping::time_in_force(b.u8()?),
        order_type: mapping::order_type(b.u8()?),
        side: mapping::side(b.u8()?),
        time: timestamp(b)?,
        update_time: timestamp(b)?,
        ..Order::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::fixtures::{order_result as write_order_result, payload};
    use spotwire_codec::MessageWriter;
    use spotwire_core::{OrderStatus, OrderType, SelfTradePreventionMode, Side, TimeInForce};
    use spotwire_schema::catalog::block;

    #[test]
    fn test_new_order_ack() {
        let mut w = MessageWriter::new();
        w.put_i64(28).put_i64(-1).put_i64(1_507_725_176_595_123);
        w.var_string8("BTCUSDT").var_string8("6gCrw2kRUAF9CvJDGP16IP");
        let data = w.finish();

        let ack = new_order_ack(payload(&data, 24)).unwrap();
        assert_eq!(ack.symbol, "BTCUSDT");
        assert_eq!(ack.order_id, 28);
        assert_eq!(ack.order_list_id, -1);
        assert_eq!(ack.client_order_id, "6gCrw2kRUAF9CvJDGP16IP");
        assert_eq!(ack.transact_time, 1_507_725_176_595);
        assert!(ack.status.is_none());
        assert!(ack.fills.is_empty());
    }

    #[test]
    fn test_new_order_result() {
        let mut w = MessageWriter::new();
        write_order_result(&mut w, 28, 1_507_725_176_595_000, 100_000, 1_000_000_000, 2, 1);
        assert_eq!(w.len(), block::ORDER_RESULT);
        w.var_string8("BTCUSDT").var_string8("abc");
        let data = w.finish();

        let result = new_order_result(payload(&data, block::ORDER_RESULT)).unwrap();
        assert_eq!(result.price, "1000.00");
        assert_eq!(result.orig_qty, "10.00000000");
        assert_eq!(result.executed_qty, "0.00000000");
        assert_eq!(result.status, Some(OrderStatus::Filled));
        assert_eq!(result.time_in_force, Some(TimeInForce::Gtc));
        assert_eq!(result.order_type, Some(OrderType::Limit));
        assert_eq!(result.side, Some(Side::Sell));
        assert_eq!(
            result.self_trade_prevention_mode,
            Some(SelfTradePreventionMode::None)
        );
        assert_eq!(result.client_order_id, "abc");
    }

    #[test]
    fn test_new_order_full_fill_exponents() {
        let mut w = MessageWriter::new();
        write_order_result(&mut w, 28, 0, 400_000, 1_000_000_000, 2, 0);
        w.group_header(33, 2);
        w.put_i8(-6).decimal(399_900).decimal(500_000_000).decimal(4_000).put_i64(56);
        w.var_string8("USDT");
        w.put_i8(-4).decimal(400_000).decimal(500_000_000).decimal(19).put_i64(57);
        w.var_string8("BNB");
        w.var_string8("BTCUSDT").var_string8("full");
        let data = w.finish();

        let full = new_order_full(payload(&data, block::ORDER_RESULT)).unwrap();
        assert_eq!(
            full.fills,
            vec![
                Fill {
                    trade_id: 56,
                    price: "3999.00".into(),
                    quantity: "5.00000000".into(),
                    commission: "0.004000".into(),
                    commission_asset: "USDT".into(),
                },
                Fill {
                    trade_id: 57,
                    price: "4000.00".into(),
                    quantity: "5.00000000".into(),
                    commission: "0.0019".into(),
                    commission_asset: "BNB".into(),
                },
            ]
        );
        assert_eq!(full.symbol, "BTCUSDT");
        assert_eq!(full.client_order_id, "full");
    }

    fn write_order_query(w: &mut MessageWriter, status: u8, order_type: u8) {
        w.put_i8(-8).put_i8(-8);
        w.put_i64(1).put_i64(-1);
        w.decimal(10_000_000).decimal(100_000_000).decimal(0).decimal(0);
        w.put_u8(status).put_u8(0).put_u8(order_type).put_u8(0);
        w.put_i64(1_499_827_319_559_000).put_i64(1_499_827_319_559_999);
    }

    #[test]
    fn test_order() {
        let mut w = MessageWriter::new();
        write_order_query(&mut w, 0, 1);
        assert_eq!(w.len(), block::ORDER_QUERY);
        w.var_string8("LTCBTC").var_string8("myOrder1");
        let data = w.finish();

        let order = order(payload(&data, block::ORDER_QUERY)).unwrap();
        assert_eq!(order.symbol, "LTCBTC");
        assert_eq!(order.client_order_id, "myOrder1");
        assert_eq!(order.price, "0.10000000");
        assert_eq!(order.status, OrderStatus::New);
        assert_eq!(order.time, 1_499_827_319_559);
        assert_eq!(order.update_time, 1_499_827_319_559);
    }

    #[test]
    fn test_order_unknown_codes_fall_back() {
        let mut w = MessageWriter::new();
        write_order_query(&mut w, 42, 200);
        w.var_string8("LTCBTC").var_string8("x");
        let data = w.finish();

        let order = order(payload(&data, block::ORDER_QUERY)).unwrap();
        assert_eq!(order.status, OrderStatus::Unknown);
        assert_eq!(order.order_type, OrderType::Limit);
    }

    #[test]
    fn test_orders_list() {
        let mut w = MessageWriter::new();
        w.group_header(block::ORDER_QUERY as u16, 2);
        write_order_query(&mut w, 1, 0);
        w.var_string8("LTCBTC").var_string8("first");
        write_order_query(&mut w, 4, 6);
        w.var_string8("ETHBTC").var_string8("second");
        let data = w.finish();

        let orders = orders(payload(&data, 0)).unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].status, OrderStatus::PartiallyFilled);
        assert_eq!(orders[0].order_type, OrderType::Market);
        assert_eq!(orders[1].symbol, "ETHBTC");
        assert_eq!(orders[1].client_order_id, "second");
        assert_eq!(orders[1].order_type, OrderType::LimitMaker);
    }

    #[test]
    fn test_cancel_order_matches_json() {
        let json = r#"{
            "symbol": "LTCBTC",
            "origClientOrderId": "myOrder1",
            "orderId": 4,
            "orderListId": -1,
            "clientOrderId": "cancelMyOrder1",
            "transactTime": 1684804350068,
            "price": "2.00000000",
            "origQty": "1.00000000",
            "executedQty": "0.00000000",
            "cummulativeQuoteQty": "0.00000000",
            "status": "CANCELED",
            "timeInForce": "GTC",
            "type": "LIMIT",
            "side": "BUY",
            "selfTradePreventionMode": "NONE"
        }"#;
        let expected: CancelOrderResponse = serde_json::from_str(json).unwrap();

        let mut w = MessageWriter::new();
        w.put_i8(-8).put_i8(-8);
        w.put_i64(4).put_i64(-1).put_i64(1_684_804_350_068_000);
        w.decimal(200_000_000).decimal(100_000_000).decimal(0).decimal(0);
        w.put_u8(3).put_u8(0).put_u8(1).put_u8(0).put_u8(1);
        assert_eq!(w.len(), block::CANCEL_ORDER);
        w.var_string8("LTCBTC")
            .var_string8("myOrder1")
            .var_string8("cancelMyOrder1");
        let data = w.finish();

        let decoded = cancel_order(payload(&data, block::CANCEL_ORDER)).unwrap();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn test_cancel_open_orders() {
        let mut w = MessageWriter::new();
        w.group_header(0, 2);
        w.var_data16(br#"{"symbol":"BTCUSDT","orderId":11,"status":"CANCELED"}"#);
        w.var_data16(br#"{"symbol":"BTCUSDT","orderId":12,"status":"SOMETHING_NEW"}"#);
        let data = w.finish();

        let responses = cancel_open_orders(payload(&data, 0)).unwrap();
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0].order_id, 11);
        assert_eq!(responses[0].status, OrderStatus::Canceled);
        assert_eq!(responses[1].status, OrderStatus::Unknown);
    }

    #[test]
    fn test_cancel_open_orders_invalid_json() {
        let mut w = MessageWriter::new();
        w.group_header(0, 2);
        w.var_data16(br#"{"orderId":1}"#);
        w.var_data16(b"{not json");
        let data = w.finish();

        let err = cancel_open_orders(payload(&data, 0)).unwrap_err();
        match err {
            DecodeError::MappingFailure { reason } => {
                assert!(reason.starts_with("cancel response 1:"), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
