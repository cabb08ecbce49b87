//! Export Hub - export/import logistics backend
//!
//! Keeps shipment, tracking and document records, and runs AI-assisted
//! document review, market intelligence, shipping estimates and chat
//! against a generative model.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
