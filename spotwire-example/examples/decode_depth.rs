//! Order book decoding example.
//!
//! Builds a depth response the way a newer schema version would send it
//! (with extra root block bytes), decodes it and prints the JSON the
//! exchange's text API would have returned.

mod common;

use common::init_logging;
use spotwire::prelude::*;
use tracing::info;

fn build_depth() -> Vec<u8> {
    let mut writer = MessageWriter::new();
    writer
        .header(TemplateId::Depth, 18)
        .put_i64(1_027_024)
        .put_i8(-2)
        .put_i8(-8)
        .pad(8);
    writer.group_header(16, 2);
    writer.decimal(400_000).decimal(4_300_000_000);
    writer.decimal(399_900).decimal(100_000_000);
    writer.group_header(16, 1);
    writer.decimal(400_100).decimal(1_200_000_000);
    writer.finish().to_vec()
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = DecoderConfigBuilder::new()
        .expected_schema_id(SCHEMA_ID)
        .build()?;
    let decoder = SpotDecoder::new(config);

    let buffer = build_depth();
    let header = decoder.decode_header(&buffer)?;
    info!(
        "Header: template={} block_length={} version={}",
        header.template_id, header.block_length, header.version
    );

    let depth: DepthResponse = decoder.decode_as(&buffer)?;
    info!(
        "Depth {}: {} bids, {} asks",
        depth.last_update_id,
        depth.bids.len(),
        depth.asks.len()
    );
    println!("{}", serde_json::to_string_pretty(&depth)?);

    let mut truncated = buffer.clone();
    truncated.truncate(buffer.len() - 4);
    match decoder.decode(&truncated) {
        Ok(message) => info!("Unexpected success: {:?}", message.kind()),
        Err(e) => info!("Truncated buffer rejected: {}", e),
    }

    Ok(())
}
