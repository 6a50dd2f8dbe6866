//! Orchestration and display projections.
//!
//! - `GameController`: owns one game and applies player actions through `Rules`
//! - `view`: read-only, serializable snapshots for a display layer

pub mod game;
pub mod view;

pub use game::GameController;
pub use view::{BoardView, CardView, ClueView, KeyEntry, PlayerView, TeamSummary, Viewer};
