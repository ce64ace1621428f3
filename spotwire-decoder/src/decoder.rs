/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! SBE response decoder.
//!
//! [`SpotDecoder`] reads the message header, selects the template decoder
//! with an exhaustive match over [`TemplateId`] and returns the domain
//! record. It holds only its configuration, so one instance can be shared
//! by any number of threads.

use crate::config::DecoderConfig;
use crate::message::{DecodeTarget, SpotMessage};
use crate::templates::{Payload, account, market, order, ticker};
use spotwire_codec::{Cursor, GroupReader, MessageHeader};
use spotwire_core::{DecodeError, Result, SpotError};
use spotwire_schema::TemplateId;
use tracing::trace;

/// Decoder for spot SBE responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpotDecoder {
    config: DecoderConfig,
}

impl SpotDecoder {
    /// Creates a decoder with the given configuration.
    ///
    /// # Arguments
    /// * `config` - Limits and checks applied to every buffer
    #[must_use]
    pub const fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Creates a decoder after validating the configuration.
    ///
    /// # Errors
    /// Returns `SpotError::Configuration` if the configuration is unusable.
    pub fn try_new(config: DecoderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decodes one SBE response.
    ///
    /// # Arguments
    /// * `buffer` - A complete message, starting with its header
    ///
    /// # Errors
    /// Returns `SpotError::Decode` for failures in the header or dispatch
    /// (truncated header, unknown template, schema mismatch, oversized
    /// buffer) and `SpotError::Template` for failures inside a template
    /// decoder. No partial result is returned.
    pub fn decode(&self, buffer: &[u8]) -> Result<SpotMessage> {
        self.decode_message(buffer).map(|(_, message)| message)
    }

    /// Decodes one SBE response and extracts the expected record.
    ///
    /// # Errors
    /// Same as [`decode`](Self::decode), plus a `MappingFailure` inside
    /// `SpotError::Template` if the message holds another record type.
    pub fn decode_as<T: DecodeTarget>(&self, buffer: &[u8]) -> Result<T> {
        let (template, message) = self.decode_message(buffer)?;
        message
            .into_target()
            .map_err(|source| SpotError::in_template(template.as_u16(), source))
    }

    /// Reads and checks the message header without decoding the body.
    ///
    /// # Errors
    /// Returns `SpotError::Decode` if the buffer is too large, too short for
    /// a header, or carries an unexpected schema id.
    pub fn decode_header(&self, buffer: &[u8]) -> Result<MessageHeader> {
        if buffer.len() > self.config.max_message_size {
            return Err(DecodeError::MessageTooLarge {
                size: buffer.len(),
                max_size: self.config.max_message_size,
            }
            .into());
        }
        let mut cursor = Cursor::new(buffer);
        let header = MessageHeader::decode(&mut cursor)?;
        if let Some(expected) = self.config.expected_schema_id {
            if header.schema_id != expected {
                return Err(DecodeError::SchemaMismatch {
                    expected,
                    actual: header.schema_id,
                }
                .into());
            }
        }
        Ok(header)
    }

    fn decode_message(&self, buffer: &[u8]) -> Result<(TemplateId, SpotMessage)> {
        let header = self.decode_header(buffer)?;
        let template = header
            .template()
            .ok_or(DecodeError::UnsupportedTemplate(header.template_id))?;

        trace!(
            template = %template,
            block_length = header.block_length,
            schema_id = header.schema_id,
            version = header.version,
            size = buffer.len(),
            "decoding message"
        );

        let mut cursor = Cursor::new(buffer);
        cursor.skip(MessageHeader::LENGTH)?;
        self.dispatch(template, &header, cursor)
            .map(|message| (template, message))
            .map_err(|source| SpotError::in_template(template.as_u16(), source))
    }

    fn dispatch(
        &self,
        template: TemplateId,
        header: &MessageHeader,
        mut cursor: Cursor<'_>,
    ) -> std::result::Result<SpotMessage, DecodeError> {
        let root = cursor.block(
            usize::from(header.block_length),
            template.root_block_length(),
        )?;
        let p = Payload {
            root,
            body: cursor,
            groups: GroupReader::new(self.config.max_group_entries),
        };

        Ok(match template {
            TemplateId::Depth => SpotMessage::Depth(market::depth(p)?),
            TemplateId::Trades => SpotMessage::Trades(market::trades(p)?),
            TemplateId::AggTrades => SpotMessage::AggTrades(market::agg_trades(p)?),
            TemplateId::Klines => SpotMessage::Klines(market::klines(p)?),
            TemplateId::AveragePrice => SpotMessage::AvgPrice(market::avg_price(p)?),
            TemplateId::Ticker24hSymbolFull => {
                SpotMessage::PriceChangeStats(ticker::ticker_24h_symbol(p)?)
            }
            TemplateId::Ticker24hFull => SpotMessage::PriceChangeStats(ticker::ticker_24h_list(p)?),
            TemplateId::PriceTickerSymbol => {
                SpotMessage::SymbolPrices(ticker::price_ticker_symbol(p)?)
            }
            TemplateId::PriceTicker => SpotMessage::SymbolPrices(ticker::price_ticker_list(p)?),
            TemplateId::BookTickerSymbol => {
                SpotMessage::BookTickers(ticker::book_ticker_symbol(p)?)
            }
            TemplateId::BookTicker => SpotMessage::BookTickers(ticker::book_ticker_list(p)?),
            TemplateId::TickerSymbolFull => {
                SpotMessage::SymbolTickers(ticker::ticker_full_symbol(p)?)
            }
            TemplateId::TickerFull => SpotMessage::SymbolTickers(ticker::ticker_full_list(p)?),
            TemplateId::TickerSymbolMini => {
                SpotMessage::SymbolTickers(ticker::ticker_mini_symbol(p)?)
            }
            TemplateId::TickerMini => SpotMessage::SymbolTickers(ticker::ticker_mini_list(p)?),
            TemplateId::NewOrderAck => SpotMessage::NewOrder(order::new_order_ack(p)?),
            TemplateId::NewOrderResult => SpotMessage::NewOrder(order::new_order_result(p)?),
            TemplateId::NewOrderFull => SpotMessage::NewOrder(order::new_order_full(p)?),
            TemplateId::Order => SpotMessage::Order(order::order(p)?),
            TemplateId::CancelOrder => SpotMessage::CancelOrder(order::cancel_order(p)?),
            TemplateId::CancelOpenOrders => {
                SpotMessage::CancelOpenOrders(order::cancel_open_orders(p)?)
            }
            TemplateId::Orders => SpotMessage::Orders(order::orders(p)?),
            TemplateId::Account => SpotMessage::Account(account::account(p)?),
            TemplateId::AccountTrades => SpotMessage::AccountTrades(account::account_trades(p)?),
        })
    }
}
