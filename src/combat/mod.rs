//! Combat resolution and lane progression.
//!
//! ## Flow
//!
//! Once both players commit, the scheduler runs ticks `1..=max_ticks`. On
//! each tick every column's active tier resolves player 0's top card, then
//! player 1's. A card hits the opposing top card (or clashes with it when
//! both are eligible) and, standing unopposed in the enemy base, hits the
//! enemy crystal. After the last tick, lane progression moves uncontested
//! survivors between the Equator and the bases.
//!
//! Everything observable is appended to the state's combat log as a
//! [`CombatEvent`].

pub mod crystal;
pub mod lanes;
pub mod log;
pub mod resolver;
pub mod scheduler;

pub use crystal::{apply_breach, end_match};
pub use lanes::{progress_column, progress_lanes, LaneTransition};
pub use log::CombatEvent;
pub use resolver::{resolve_card, Resolution};
pub use scheduler::{process_tick, run_to_completion};
