mod use_patches;

pub use use_patches::{use_patches, PatchesState};
