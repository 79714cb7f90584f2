//! Verse layout engine.
//!
//! # Data Flow
//! ```text
//! PoemDetail.verses (ordered as received)
//!     → position.rs (numeric code → PositionCode → Descriptor)
//!     → engine.rs (greedy couplet pairing → LayoutGroup sequence)
//!     → render.rs (optional plain-text output)
//! ```
//!
//! # Design Decisions
//! - Pure and synchronous: the same input always yields the same groups
//! - Total: unknown codes render as centered verses instead of failing
//! - Supplied order is authoritative; `Verse::order` is never used to re-sort
//! - An empty poem yields no groups; showing a placeholder is the caller's job

pub mod engine;
pub mod position;
pub mod render;

pub use engine::{layout_verses, GroupKind, Layout, LayoutGroup};
pub use position::{Alignment, Arity, Descriptor, PositionCode, Weight};
pub use render::render_plain;
