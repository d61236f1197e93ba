//! Reusable UI components

pub mod button;
