//! Infrastructure layer (adapters/implementations).
//!
//! This module contains IO-heavy integrations (HTTP gateway, filesystem).

pub mod app_config;
pub mod gateway;
pub mod hash;
pub mod history_store;
pub mod input;
