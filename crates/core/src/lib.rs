//! Domain logic for brief intake.
//!
//! Everything here is pure (no I/O): the normalize / validate / build
//! pipeline shared by both submission hosts, nonce signing for the plugin
//! host, and the WhatsApp hand-off message builder.

pub mod brief;
pub mod error;
pub mod messages;
pub mod nonce;
pub mod types;
pub mod whatsapp;
