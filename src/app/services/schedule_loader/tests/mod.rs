//! Tests for document loading and entry extraction
