//! Tests for disk configuration.
