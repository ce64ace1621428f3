/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Decoder configuration.
//!
//! This module provides the limits and checks a [`SpotDecoder`] applies to
//! every buffer.
//!
//! [`SpotDecoder`]: crate::SpotDecoder

use spotwire_codec::{DEFAULT_MAX_GROUP_ENTRIES, MessageHeader};
use spotwire_core::{Result, SpotError};

/// Default maximum buffer size (16 MiB).
pub const DEFAULT_MAX_MESSAGE_SIZE: usize = 16 * 1024 * 1024;

/// Configuration for a [`SpotDecoder`](crate::SpotDecoder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Schema id every header must carry; `None` accepts any.
    pub expected_schema_id: Option<u16>,
    /// Maximum buffer size in bytes.
    pub max_message_size: usize,
    /// Maximum element count of a single repeating group.
    pub max_group_entries: u32,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DecoderConfig {
    /// Creates a configuration with default limits and no schema check.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            expected_schema_id: None,
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
            max_group_entries: DEFAULT_MAX_GROUP_ENTRIES,
        }
    }

    /// Requires headers to carry `schema_id`.
    #[must_use]
    pub const fn with_expected_schema_id(mut self, schema_id: u16) -> Self {
        self.expected_schema_id = Some(schema_id);
        self
    }

    /// Sets the maximum buffer size.
    #[must_use]
    pub const fn with_max_message_size(mut self, size: usize) -> Self {
        self.max_message_size = size;
        self
    }

    /// Sets the maximum group element count.
    #[must_use]
    pub const fn with_max_group_entries(mut self, entries: u32) -> Self {
        self.max_group_entries = entries;
        self
    }

    /// Checks the limits are usable.
    ///
    /// # Errors
    /// Returns `SpotError::Configuration` if `max_message_size` cannot hold a
    /// header or `max_group_entries` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_message_size < MessageHeader::LENGTH {
            return Err(SpotError::Configuration(format!(
                "max_message_size {} is smaller than the {}-byte header",
                self.max_message_size,
                MessageHeader::LENGTH
            )));
        }
        if self.max_group_entries == 0 {
            return Err(SpotError::Configuration(
                "max_group_entries must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for decoder configuration.
#[derive(Debug, Default)]
pub struct DecoderConfigBuilder {
    expected_schema_id: Option<u16>,
    max_message_size: Option<usize>,
    max_group_entries: Option<u32>,
}

impl DecoderConfigBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the schema id every header must carry.
    #[must_use]
    pub const fn expected_schema_id(mut self, schema_id: u16) -> Self {
        self.expected_schema_id = Some(schema_id);
        self
    }

    /// Sets the maximum buffer size.
    #[must_use]
    pub const fn max_message_size(mut self, size: usize) -> Self {
        self.max_message_size = Some(size);
        self
    }

    /// Sets the maximum group element count.
    #[must_use]
    pub const fn max_group_entries(mut self, entries: u32) -> Self {
        self.max_group_entries = Some(entries);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    /// Returns `SpotError::Configuration` if the limits are unusable.
    pub fn build(self) -> Result<DecoderConfig> {
        let mut config = DecoderConfig::new();
        config.expected_schema_id = self.expected_schema_id;
        if let Some(size) = self.max_message_size {
            config.max_message_size = size;
        }
        if let Some(entries) = self.max_group_entries {
            config.max_group_entries = entries;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DecoderConfig::default();
        assert_eq!(config.expected_schema_id, None);
        assert_eq!(config.max_message_size, 16 * 1024 * 1024);
        assert_eq!(config.max_group_entries, 1_000_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_setters() {
        let config = DecoderConfig::new()
            .with_expected_schema_id(3)
            .with_max_message_size(4096)
            .with_max_group_entries(10);
        assert_eq!(config.expected_schema_id, Some(3));
        assert_eq!(config.max_message_size, 4096);
        assert_eq!(config.max_group_entries, 10);
    }

    #[test]
    fn test_builder() {
        let config = DecoderConfigBuilder::new()
            .expected_schema_id(3)
            .max_group_entries(500)
            .build()
            .unwrap();
        assert_eq!(config.expected_schema_id, Some(3));
        assert_eq!(config.max_group_entries, 500);
        assert_eq!(config.max_message_size, DEFAULT_MAX_MESSAGE_SIZE);
    }

    #[test]
    fn test_builder_rejects_tiny_message_size() {
        let err = DecoderConfigBuilder::new()
            .max_message_size(7)
            .build()
            .unwrap_err();
        assert!(matches!(err, SpotError::Configuration(_)));
    }

    #[test]
    fn test_builder_rejects_zero_group_entries() {
        let err = DecoderConfigBuilder::new()
            .max_group_entries(0)
            .build()
            .unwrap_err();
        assert!(matches!(err, SpotError::Configuration(_)));
    }
}
