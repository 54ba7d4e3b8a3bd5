//! `tt-core` — foundational types for the `uw_timetable` planner.
//!
//! This crate is a dependency of every other `tt-*` crate.  It has no `tt-*`
//! dependencies and a single external one (`thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`time`]  | `Weekday`, `TimeOfDay`, `ClassTime`, [`conflicts`]        |
//! | [`ids`]   | `RegistrationId`                                          |
//! | [`error`] | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::RegistrationId;
pub use time::{conflicts, ClassTime, TimeOfDay, Weekday};
