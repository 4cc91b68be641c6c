//! Pitch-by-pitch charting for softball.
//!
//! A [`session::Session`] records each pitch a coach enters, keeps the
//! count, outs, and inning, and numbers pitches and batters per pitcher.
//! The log exports as CSV through [`storage::Storage`].

pub mod cli;
pub mod config;
pub mod export;
pub mod model;
pub mod script;
pub mod session;
pub mod storage;
