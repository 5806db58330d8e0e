//! Scouter assignment strategies and roster KPIs.
//!
//! Two strategies share one output contract:
//!
//! - [`ComplexScheduler`] — demand-driven: selects per-match demand via
//!   the coverage policies, then rotates a scouter pool onto it under
//!   soft/hard consecutive-use limits.
//! - [`SimpleScheduler`] — positional round-robin over every slot of
//!   every match, for low-effort events.
//!
//! [`RosterKpi`] measures what either strategy produced.

mod complex;
mod kpi;
mod simple;

pub use complex::{assign_scouters, ComplexScheduler, RotationLimits};
pub use kpi::RosterKpi;
pub use simple::SimpleScheduler;
