/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Account templates (400, 401).

use super::{Payload, decimal, timestamp};
use crate::mapping;
use spotwire_codec::convert;
use spotwire_core::{Account, AccountTrade, Balance, CommissionRates, DecodeError};
use spotwire_schema::catalog::{ACCOUNT_BALANCES, ACCOUNT_PERMISSIONS, ACCOUNT_TRADES_TRADES};

/// Template 400.
///
/// The integer commission fields carry the raw mantissas; `commission_rates`
/// holds the same values rendered with the commission exponent.
pub(crate) fn account(mut p: Payload<'_>) -> Result<Account, DecodeError> {
    let b = &mut p.root;
    let commission_exponent = b.i8()?;
    let maker = b.i64_le()?;
    let taker = b.i64_le()?;
    let buyer = b.i64_le()?;
    let seller = b.i64_le()?;
    let can_trade = b.bool()?;
    let can_withdraw = b.bool()?;
    let can_deposit = b.bool()?;
    let brokered = b.bool()?;
    let require_self_trade_prevention = b.bool()?;
    let prevent_sor = b.bool()?;
    let update_time = timestamp(b)?;
    let account_type = mapping::account_type(b.u8()?);
    let uid = b.i64_le()?;

    let balances = p.groups.read(&mut p.body, &ACCOUNT_BALANCES, |fixed, tail| {
        let exponent = fixed.i8()?;
        let free = decimal(fixed, exponent)?;
        let locked = decimal(fixed, exponent)?;
        Ok(Balance {
            asset: tail.var_string8()?,
            free,
            locked,
        })
    })?;
    let permissions = p
        .groups
        .read(&mut p.body, &ACCOUNT_PERMISSIONS, |_, tail| tail.var_string8())?;

    Ok(Account {
        maker_commission: maker,
        taker_commission: taker,
        buyer_commission: buyer,
        seller_commission: seller,
        commission_rates: CommissionRates {
            maker: convert(maker, commission_exponent),
            taker: convert(taker, commission_exponent),
            buyer: convert(buyer, commission_exponent),
            seller: convert(seller, commission_exponent),
        },
        can_trade,
        can_withdraw,
        can_deposit,
        brokered,
        require_self_trade_prevention,
        prevent_sor,
        update_time,
        account_type,
        balances,
        permissions,
        uid,
    })
}

/// Template 401.
pub(crate) fn account_trades(mut p: Payload<'_>) -> Result<Vec<AccountTrade>, DecodeError> {
    p.groups.read(&mut p.body, &ACCOUNT_TRADES_TRADES, |t, tail| {
        let price_exponent = t.i8()?;
        let qty_exponent = t.i8()?;
        let commission_exponent = t.i8()?;
        let id = t.i64_le()?;
        let order_id = t.i64_le()?;
        let order_list_id = t.i64_le()?;
        let price = decimal(t, price_exponent)?;
        let quantity = decimal(t, qty_exponent)?;
        let quote_quantity = decimal(t, qty_exponent)?;
        let commission = decimal(t, commission_exponent)?;
        let time = timestamp(t)?;
        let is_buyer = t.bool()?;
        let is_maker = t.bool()?;
        let is_best_match = t.bool()?;
        Ok(AccountTrade {
            id,
            symbol: tail.var_string8()?,
            order_id,
            order_list_id,
            price,
            quantity,
            quote_quantity,
            commission,
            commission_asset: tail.var_string8()?,
            time,
            is_buyer,
            is_maker,
            is_best_match,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::fixtures::payload;
    use spotwire_codec::MessageWriter;
    use spotwire_core::AccountType;

    fn write_account_block(w: &mut MessageWriter) {
        w.put_i8(-4);
        w.put_i64(15).put_i64(15).put_i64(0).put_i64(0);
        w.put_bool(true).put_bool(true).put_bool(true);
        w.put_bool(false).put_bool(false).put_bool(false);
        w.put_i64(123_456_789_000).put_u8(0).put_i64(354_937_868);
    }

    #[test]
    fn test_account() {
        let mut w = MessageWriter::new();
        write_account_block(&mut w);
        assert_eq!(w.len(), 56);
        w.group_header(17, 2);
        w.put_i8(-8).decimal(483_000).decimal(0).var_string8("BTC");
        w.put_i8(-8).decimal(414_410_000).decimal(0).var_string8("LTC");
        w.group_header(0, 1);
        w.var_string8("SPOT");
        let data = w.finish();

        let account = account(payload(&data, 56)).unwrap();
        assert_eq!(account.maker_commission, 15);
        assert_eq!(account.seller_commission, 0);
        assert_eq!(account.commission_rates.maker, "0.0015");
        assert_eq!(account.commission_rates.buyer, "0.0000");
        assert!(account.can_trade);
        assert!(!account.brokered);
        assert_eq!(account.update_time, 123_456_789);
        assert_eq!(account.account_type, AccountType::Spot);
        assert_eq!(account.uid, 354_937_868);
        assert_eq!(
            account.balances,
            vec![
                Balance {
                    asset: "BTC".into(),
                    free: "0.00483000".into(),
                    locked: "0.00000000".into(),
                },
                Balance {
                    asset: "LTC".into(),
                    free: "4.14410000".into(),
                    locked: "0.00000000".into(),
                },
            ]
        );
        assert_eq!(account.permissions, vec!["SPOT".to_string()]);
    }

    #[test]
    fn test_account_groups_empty() {
        let mut w = MessageWriter::new();
        write_account_block(&mut w);
        w.group_header(17, 0).group_header(0, 0);
        let data = w.finish();
        let account = account(payload(&data, 56)).unwrap();
        assert!(account.balances.is_empty());
        assert!(account.permissions.is_empty());
    }

    #[test]
    fn test_account_trades() {
        let mut w = MessageWriter::new();
        w.group_header(70, 1);
        w.put_i8(-8).put_i8(-8).put_i8(-8);
        w.put_i64(28457).put_i64(100_234).put_i64(-1);
        w.decimal(410_000).decimal(1_200_000_000).decimal(4_920_000);
        w.decimal(1_000_000);
        w.put_i64(1_499_865_549_590_000);
        w.put_bool(true).put_bool(false).put_bool(true);
        w.var_string8("BNBBTC").var_string8("BNB");
        let data = w.finish();

        let trades = account_trades(payload(&data, 0)).unwrap();
        assert_eq!(
            trades,
            vec![AccountTrade {
                id: 28457,
                symbol: "BNBBTC".into(),
                order_id: 100_234,
                order_list_id: -1,
                price: "0.00410000".into(),
                quantity: "12.00000000".into(),
                quote_quantity: "0.04920000".into(),
                commission: "0.01000000".into(),
                commission_asset: "BNB".into(),
                time: 1_499_865_549_590,
                is_buyer: true,
                is_maker: false,
                is_best_match: true,
            }]
        );
    }
}
