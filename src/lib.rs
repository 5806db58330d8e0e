//! Volunteer observation rosters for competition match schedules.
//!
//! Turns an ordered match list (six team slots per match, two
//! three-team alliances) into a scouting roster: which teams must be
//! watched in which matches, and by whom.
//!
//! # Modules
//!
//! - **`models`**: domain types — `Match`, `TeamInMatch`, `Station`,
//!   `DemandMap`, `ScoutingSchedule`
//! - **`demand`**: the demand selector — four coverage policies
//!   producing a per-match set of teams requiring an observer
//! - **`scheduler`**: demand-driven assignment with rotation limits
//!   (`ComplexScheduler`), positional round-robin (`SimpleScheduler`),
//!   and roster KPIs
//! - **`validation`**: schedule shape checks for importer boundaries
//! - **`importers`** / **`exporters`**: JSON file acquisition, JSON and
//!   CSV rendering
//!
//! # Architecture
//!
//! The core (`demand` + `scheduler`) is pure and total: no I/O, no
//! failure modes. Degenerate input — an empty roster, zero limits,
//! windows longer than a team's history — degrades gracefully instead
//! of erroring. Every run owns its scratch state; nothing persists
//! across invocations, so independent runs may proceed in parallel
//! without synchronization. Importers own input validation; exporters
//! own document formats.

pub mod demand;
pub mod exporters;
pub mod importers;
pub mod models;
pub mod scheduler;
pub mod validation;
