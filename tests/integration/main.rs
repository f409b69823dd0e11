//! Integration tests for the poll loop
//!
//! These tests use wiremock to stand in for both the review API and the
//! Telegram Bot API and drive the bot cycle by cycle.

mod poll_tests;
