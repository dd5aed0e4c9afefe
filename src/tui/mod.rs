//! Terminal front-end: deal and check hands from the keyboard.

pub mod app;
pub mod controller;
mod ui;
