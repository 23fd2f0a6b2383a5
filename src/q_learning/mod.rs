//! Tabular Q-learning over sensed states
//!
//! The learner keeps one table of action values keyed by the rover's
//! sensed state and the action taken, and refines it with the standard
//! temporal difference update:
//!
//! Q(s,a) ← Q(s,a) + α·(r + γ·max_a' Q(s',a') − Q(s,a))
//!
//! Rewards are sparse and purely punitive: a fatal step earns the crash
//! penalty, everything else earns 0. Starting from an all-zero table this
//! keeps every learned value at or below zero. Exploration never consults
//! the table - action choice stays uniformly random so coverage does not
//! collapse onto early estimates.

pub mod engine;
pub mod q_table;

pub use engine::{CRASH_PENALTY, QLearningEngine, Transition};
pub use q_table::QTable;
