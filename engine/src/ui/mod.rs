//! UI-facing state owned by the engine.
//!
//! Effect and option types live in `toss_types::ui`; this module re-exports
//! them next to the text field, focus ring, and dialog state.

mod dialog;
mod input;
mod view_state;

pub use dialog::{Dialog, DialogKind, DialogScroll};
pub use input::{Focus, InputField};
pub use toss_types::ui::{AnimPhase, EffectTimer, ModalEffect, ModalEffectKind, UiOptions};
pub use view_state::{Notice, ViewState};
