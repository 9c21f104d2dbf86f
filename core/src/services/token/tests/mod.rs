//! Tests for the token services
