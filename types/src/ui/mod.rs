//! UI state types shared by the engine and the terminal front end.
//!
//! Pure data types with no IO, no async, no ratatui dependency.

mod animation;
mod modal;
mod view_state;

pub use animation::{AnimPhase, EffectTimer};
pub use modal::{ModalEffect, ModalEffectKind};
pub use view_state::UiOptions;
