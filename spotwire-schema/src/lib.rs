/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # SpotWire Schema
//!
//! Template catalog for the spot SBE schema (id 3, version 1).
//!
//! This crate provides:
//! - **Template ids**: the closed set of response templates
//! - **Block widths**: known root and group element widths per template
//! - **Schema constants**: schema id, version and header sizes

pub mod catalog;

pub use catalog::{
    GROUP_HEADER_LENGTH, GroupDef, MESSAGE_HEADER_LENGTH, MessageDef, SCHEMA_ID, SCHEMA_VERSION,
    TemplateId,
};
