//! Core library for the sheet2sql command line application.
//!
//! The library exposes the pieces that power the command-line interface as
//! well as the integration tests. The modules keep responsibilities narrow
//! and composable: IO adapters live under [`io`], data representations
//! inside [`model`], the SQL generation logic in [`script`], and the
//! conversion orchestration under [`convert`].

pub mod convert;
pub mod error;
pub mod io;
pub mod model;
pub mod script;

pub use error::{Result, ToolError};
