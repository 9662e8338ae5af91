//! Client-side engine for a job application portal: a four-stage application
//! wizard with per-stage validation and file uploads, an admin review list
//! with an embedded document previewer, and a session store gating the
//! protected screens.
//!
//! The REST backend (job catalog, application storage, document serving) is an
//! external collaborator reached through the [`api::Backend`] trait; everything
//! in this crate is form state management over that boundary.

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod review;
pub mod session;
pub mod telemetry;
pub mod wizard;
