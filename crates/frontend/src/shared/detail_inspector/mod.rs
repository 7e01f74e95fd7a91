//! Detail Inspector: expands a tapped item into a full-detail panel.
//!
//! Classification is structural and ordered (see [`classify::CLASSIFIERS`]).
//! Only the chosen branch owns mutable state.

pub mod classify;
pub mod friend;
pub mod generic;
pub mod invite;
pub mod order;
pub mod ticket;
mod view;

pub use classify::{classify, DetailKind};
pub use view::DetailInspector;
