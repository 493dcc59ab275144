//! Full-screen front end: the same table and commands, one key per command.

pub mod app;
pub mod controller;
pub mod ui;
