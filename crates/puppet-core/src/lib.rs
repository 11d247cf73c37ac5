//! Sockpuppet Panel Core Library
//!
//! Wire types for the session server's sockpuppet live-patching API and the
//! flattened field model the panel renders from.
//!
//! Everything here is target-independent so protocol logic can be tested
//! natively; the WASM frontend lives in `puppet-client`.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod error;
pub mod field;

pub use api::{
    update_path, ApiStatus, ChangeRequest, FieldDescriptor, FloatChange, FloatMeta, FloatValue,
    LiveRequest, LiveResponse, PatchGroup, PatchSubmission, PatchesResponse, RawUpdate,
    ResourceRef, StringMeta, DEFAULT_BASE_URL, LINEAR_EASING, LIVE_PATH, PATCHES_PATH,
};
pub use error::ApiError;
pub use field::{flatten, FieldValue, PatchField};
