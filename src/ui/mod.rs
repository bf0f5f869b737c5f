//! Presentation layer: MVI primitives, screens, navigation and theme.

pub mod mvi;
pub mod navigation;
pub mod screens;
pub mod theme;
