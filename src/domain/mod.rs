//! Domain Layer
//!
//! The tree-select state machine: pure logic without terminal or file I/O.
//!
//! ## Structure
//!
//! - `entities/` - The indexed item map and its per-item metadata
//! - `value_objects/` - Small value types (Expansion, Ownership)
//! - `services/` - The item indexer
//! - `policies/` - The click decision tree
//! - `state/` - State containers (list slices, value sync, popup lifecycle)
//! - `ports/` - Interfaces the rendering layer implements
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Focus and scroll requests go through the `PopupHost` port
//! 2. **Tolerant containers** - Unknown ids are stored, never rejected
//! 3. **Single writer** - Each slice is mutated only by the container that owns it

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod state;
pub mod value_objects;
