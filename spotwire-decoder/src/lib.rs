/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # SpotWire Decoder
//!
//! Decodes spot SBE responses into domain records.
//!
//! This crate provides:
//! - **Decoder**: header validation and template dispatch
//! - **Configuration**: size limits and schema id check
//! - **Messages**: the decoded message union and typed extraction
//! - **Mapping**: wire enumeration codes to domain enumerations

pub mod config;
pub mod decoder;
pub mod mapping;
pub mod message;
mod templates;

pub use config::{DEFAULT_MAX_MESSAGE_SIZE, DecoderConfig, DecoderConfigBuilder};
pub use decoder::SpotDecoder;
pub use message::{DecodeTarget, MessageKind, SpotMessage};
