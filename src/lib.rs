//! AIMDB — expert panel review and rating service.
//!
//! The crate hosts the aggregation core that turns a panel of independently
//! produced movie evaluations into one auditable verdict, plus the service
//! surface (HTTP + CLI) that exposes it. Frame extraction, transcription, and
//! the AI analysis services that produce each expert's scores live outside
//! this crate and only meet it at the [`workflows::review`] data boundary.

pub mod config;
pub mod error;
pub mod server;
pub mod telemetry;
pub mod workflows;
