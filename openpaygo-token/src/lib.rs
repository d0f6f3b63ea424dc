//! Activation token generation for OpenPAYGO pay-as-you-go devices.
//!
//! This crate handles:
//! - Embedding a payload (days, disable, counter resync) in a token's low digits
//! - Advancing a SipHash-2-4 keyed hash chain over the device counter
//! - Choosing the hop count that keeps Set-Time and Add-Time tokens apart
//! - Request-level operations (unlock, day tokens, counter resync)
//!
//! # Design Principles
//!
//! - **Offline-verifiable**: The device derives the same chain from its own key
//!   and counter, so no round trip is needed
//! - **Pure**: Every operation is a deterministic function of its inputs; no
//!   state is kept between calls
//! - **No replay**: Each token lands on a counter value strictly above the
//!   device's last one
//!
//! # Token Layout
//!
//! A token is a decimal integer of at most nine digits. The low three digits
//! (the base window) carry the payload added modulo 1000 to the starting
//! code's base; the remaining digits come from the hash chain.

mod api;
mod chain;
mod codec;
mod config;
mod error;
mod fold;
mod format;
mod generator;
mod key;
mod mode;

pub use api::{counter_sync, day_token, unlock, TokenResponse};
pub use chain::{hop_chain, next_token};
pub use codec::{
    encode_base, extract_base, inject_base, COUNTER_SYNC_VALUE, MAX_ACTIVATION_VALUE, MAX_BASE,
    MIN_STARTING_CODE, PAYG_DISABLE_VALUE, TOKEN_VALUE_OFFSET,
};
pub use config::GeneratorConfig;
pub use error::{TokenError, TokenResult};
pub use fold::{fold_digest, FOLD_BIAS, TOKEN_CEILING};
pub use format::TokenFormat;
pub use generator::{generate_token, GeneratedToken, TokenGenerator};
pub use key::{SecretKey, KEY_SIZE};
pub use mode::Mode;
