//! fallgrid (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binaries, tests and
//! benches can use `fallgrid::{config,core,input,term,types}`.

pub use fallgrid_config as config;
pub use fallgrid_core as core;
pub use fallgrid_input as input;
pub use fallgrid_term as term;
pub use fallgrid_types as types;
