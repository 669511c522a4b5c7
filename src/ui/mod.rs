//! Terminal presentation for the picker

pub mod terminal;
pub mod theme;
pub mod widgets;
