//! Common test utilities for treeselect scenario and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project and config directories plus a CLI runner
//! - Fixtures: Item trees and item file contents

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
