//! Stripe REST client library.
//!
//! Provides typed wrappers for the handful of Stripe endpoints the
//! checkout flow uses (customers, payment intents, refunds) plus webhook
//! signature verification and event parsing. Deliberately minimal: only
//! the fields this platform reads are modeled.

pub mod api;
pub mod types;
pub mod webhook;

pub use api::{StripeApi, StripeApiError};
