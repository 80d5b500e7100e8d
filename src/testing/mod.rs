//! Headless test support: markup builder, pilot harness, outline snapshots.
//!
//! [`MenuMarkup`] builds the standard menu tree the templating collaborator
//! would produce, with host-measured geometry; [`MenuPilot`] wires a
//! document, registry and scheduler together and drives events against
//! them; [`snapshot::dom_outline`] renders a subtree as deterministic text
//! for snapshot assertions.

pub mod pilot;
pub mod snapshot;

pub use pilot::{ItemSpec, MenuHandles, MenuMarkup, MenuPilot};
pub use snapshot::dom_outline;
