//! Building blocks shared by the command line programs of this workspace.

pub mod config;
