//! Fly Rush, a side-scrolling plane shooter.
//!
//! The library holds the whole gameplay simulation: pure data in
//! [`entities`], per-kind motion in [`movers`], spawning in [`spawn`], hit
//! resolution in [`collision`] and the per-frame orchestration in
//! [`compute`].  The binary only samples input, draws and persists the record.

pub mod collision;
pub mod compute;
pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod flow;
pub mod geometry;
pub mod movers;
pub mod save;
pub mod spawn;
pub mod view;
