//! UI components for the sockpuppet panel.

mod patch_table;

pub use patch_table::PatchTable;
