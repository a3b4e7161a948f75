//! Tests for the output writers
