//! Test Module
//!
//! Cross-module test suite for the EthioHeritage360 assistant.
//!
//! ## Test Categories
//! - `responder_tests`: Matching stages, invariants and scenarios of the offline assistant
//! - `chat_service_tests`: Remote-first chat with offline fallback

pub mod chat_service_tests;
