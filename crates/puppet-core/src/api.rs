//! Wire types for the sockpuppet API.
//!
//! Inbound shapes mirror the server's JSON exactly (camelCase, every typed
//! payload optional). Outbound change requests serialize exactly one typed
//! variant; unset variants are omitted rather than sent as null.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// All traffic targets the session server on the local loopback origin.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1";

/// GET: list of patchable fields.
pub const PATCHES_PATH: &str = "/api/session/sockpuppet/patches";

/// POST: typed live-update batch.
pub const LIVE_PATH: &str = "/api/session/sockpuppet/live";

/// Easing sent with every float change.
pub const LINEAR_EASING: &str = "Linear";

/// PATCH: raw single-value update for one address.
pub fn update_path(address: &str) -> String {
    format!("/api/session/sockpuppet/update/{address}")
}

/// Application-level status embedded in otherwise-200 responses.
///
/// Code 0 means success. `details` is optional elaboration the server
/// sometimes attaches to failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiStatus {
    pub code: i32,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: Vec<String>,
}

impl ApiStatus {
    /// Converts a non-zero status into an [`ApiError::Status`].
    pub fn ensure_ok(&self) -> Result<(), ApiError> {
        if self.code == 0 {
            return Ok(());
        }
        let mut message = self.message.clone();
        if !self.details.is_empty() {
            message = format!("{message} ({})", self.details.join("; "));
        }
        Err(ApiError::Status {
            code: self.code,
            message,
        })
    }
}

/// Response of the patches listing endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PatchesResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub result: Vec<PatchGroup>,
}

/// One patchable server object: an opaque address grouping several fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PatchGroup {
    pub address: String,
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

/// A single exposed field as the server describes it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub display_name: String,
    pub string_value: Option<String>,
    pub string_meta: Option<StringMeta>,
    pub float_value: Option<FloatValue>,
    pub float_meta: Option<FloatMeta>,
    pub resource_value: Option<ResourceRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StringMeta {
    #[serde(default)]
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FloatValue {
    pub value: f64,
}

/// Slider bounds. Any subset may be missing; absent bounds are passed through
/// to the controls as-is rather than defaulted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FloatMeta {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
}

/// Resource handle. Inbound the server sends only `uid`; outbound both slots
/// carry the edited identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceRef {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub name: String,
}

/// One typed edit. Exactly one of the value variants is set, matching the
/// control the edit came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRequest {
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub float_value: Option<FloatChange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_value: Option<ResourceRef>,
}

impl ChangeRequest {
    /// Edit coming from a select control.
    pub fn string(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            string_value: Some(value.into()),
            float_value: None,
            resource_value: None,
        }
    }

    /// Edit coming from a slider or number box. The server animates from
    /// `start_value` to `value`; the panel always requests an instant jump.
    pub fn float(field: impl Into<String>, value: f64) -> Self {
        Self {
            field: field.into(),
            string_value: None,
            float_value: Some(FloatChange {
                value,
                duration: 0.0,
                easing_function: LINEAR_EASING.to_string(),
                start_value: value,
                current_value: value,
            }),
            resource_value: None,
        }
    }

    /// Edit coming from a resource text box.
    pub fn resource(field: impl Into<String>, ident: impl Into<String>) -> Self {
        let ident = ident.into();
        Self {
            field: field.into(),
            string_value: None,
            float_value: None,
            resource_value: Some(ResourceRef {
                uid: ident.clone(),
                name: ident,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloatChange {
    pub value: f64,
    pub duration: f64,
    pub easing_function: String,
    pub start_value: f64,
    pub current_value: f64,
}

/// Changes for one address, batched per submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatchSubmission {
    pub address: String,
    pub changes: Vec<ChangeRequest>,
    pub uid: String,
}

impl PatchSubmission {
    /// The panel always submits single-field batches.
    pub fn single(
        address: impl Into<String>,
        uid: impl Into<String>,
        change: ChangeRequest,
    ) -> Self {
        Self {
            address: address.into(),
            changes: vec![change],
            uid: uid.into(),
        }
    }
}

/// Body of the live-update endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveRequest {
    pub patches: Vec<PatchSubmission>,
}

impl From<PatchSubmission> for LiveRequest {
    fn from(submission: PatchSubmission) -> Self {
        Self {
            patches: vec![submission],
        }
    }
}

/// Response of the live-update endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LiveResponse {
    pub status: ApiStatus,
}

/// Body of the raw per-address update endpoint. The server coerces the value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawUpdate {
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_ok_passes() {
        let status = ApiStatus {
            code: 0,
            message: String::new(),
            details: Vec::new(),
        };
        assert!(status.ensure_ok().is_ok());
    }

    #[test]
    fn status_error_includes_details() {
        let status = ApiStatus {
            code: 7,
            message: "no session".to_string(),
            details: vec!["puppet offline".to_string()],
        };
        let err = status.ensure_ok().unwrap_err();
        assert_eq!(
            err.to_string(),
            "server status 7: no session (puppet offline)"
        );
    }

    #[test]
    fn status_defaults_tolerate_sparse_json() {
        let status: ApiStatus = serde_json::from_str(r#"{"code": 3}"#).unwrap();
        assert_eq!(status.code, 3);
        assert!(status.message.is_empty());
        assert!(status.details.is_empty());
    }

    #[test]
    fn string_change_serializes_only_string_variant() {
        let change = ChangeRequest::string("Mood", "Happy");
        let json = serde_json::to_value(&change).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"field": "Mood", "stringValue": "Happy"})
        );
    }

    #[test]
    fn float_change_requests_instant_jump() {
        let change = ChangeRequest::float("Blend", 0.75);
        let float = change.float_value.as_ref().unwrap();
        assert_eq!(float.value, 0.75);
        assert_eq!(float.start_value, 0.75);
        assert_eq!(float.current_value, 0.75);
        assert_eq!(float.duration, 0.0);
        assert_eq!(float.easing_function, "Linear");
        assert!(change.string_value.is_none());
        assert!(change.resource_value.is_none());
    }

    #[test]
    fn float_change_wire_shape() {
        let change = ChangeRequest::float("Blend", 2.0);
        let json = serde_json::to_value(&change).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "field": "Blend",
                "floatValue": {
                    "value": 2.0,
                    "duration": 0.0,
                    "easingFunction": "Linear",
                    "startValue": 2.0,
                    "currentValue": 2.0
                }
            })
        );
    }

    #[test]
    fn resource_change_copies_ident_to_both_slots() {
        let change = ChangeRequest::resource("Avatar", "res://head");
        let resource = change.resource_value.as_ref().unwrap();
        assert_eq!(resource.uid, "res://head");
        assert_eq!(resource.name, "res://head");
    }

    #[test]
    fn live_request_wraps_single_submission() {
        let submission =
            PatchSubmission::single("obj-1", "uid-9", ChangeRequest::string("Mood", "Calm"));
        let request = LiveRequest::from(submission);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "patches": [{
                    "address": "obj-1",
                    "changes": [{"field": "Mood", "stringValue": "Calm"}],
                    "uid": "uid-9"
                }]
            })
        );
    }

    #[test]
    fn update_path_embeds_address() {
        assert_eq!(
            update_path("obj-42"),
            "/api/session/sockpuppet/update/obj-42"
        );
    }

    #[test]
    fn descriptor_parses_full_wire_shape() {
        let json = r#"{
            "name": "Volume",
            "type": "float",
            "displayName": "Voice Volume",
            "floatValue": {"value": 5.0},
            "floatMeta": {"min": 0.0, "max": 10.0, "step": 1.0}
        }"#;
        let descriptor: FieldDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.field_type, "float");
        assert_eq!(descriptor.display_name, "Voice Volume");
        assert_eq!(descriptor.float_value.unwrap().value, 5.0);
        let meta = descriptor.float_meta.unwrap();
        assert_eq!(meta.min, Some(0.0));
        assert_eq!(meta.max, Some(10.0));
        assert_eq!(meta.step, Some(1.0));
    }

    #[test]
    fn descriptor_tolerates_missing_metadata() {
        let json = r#"{"name": "Volume", "type": "float"}"#;
        let descriptor: FieldDescriptor = serde_json::from_str(json).unwrap();
        assert!(descriptor.float_value.is_none());
        assert!(descriptor.float_meta.is_none());
        assert!(descriptor.display_name.is_empty());
    }
}
