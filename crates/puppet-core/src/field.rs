//! Flattened patch-field model.
//!
//! The server groups fields under addresses; the panel renders one row per
//! field. [`flatten`] turns the nested response into that row list, keeping
//! server iteration order (groups in `result` order, fields in per-group
//! order).

use crate::api::{FieldDescriptor, PatchesResponse};

/// Typed value of one patchable field.
///
/// Each variant knows how it renders and what kind of change it produces;
/// unknown wire types fall through to [`FieldValue::Other`] and render as a
/// read-only empty cell.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String {
        current: String,
        options: Vec<String>,
    },
    Float {
        current: f64,
        min: Option<f64>,
        max: Option<f64>,
        step: Option<f64>,
    },
    Resource {
        uid: String,
    },
    Other {
        type_name: String,
    },
}

impl FieldValue {
    fn from_descriptor(descriptor: &FieldDescriptor) -> Self {
        match descriptor.field_type.as_str() {
            "string" => Self::String {
                current: descriptor.string_value.clone().unwrap_or_default(),
                options: descriptor
                    .string_meta
                    .as_ref()
                    .map(|meta| meta.options.clone())
                    .unwrap_or_default(),
            },
            "float" => {
                let meta = descriptor.float_meta.clone().unwrap_or_default();
                Self::Float {
                    current: descriptor.float_value.as_ref().map_or(0.0, |v| v.value),
                    min: meta.min,
                    max: meta.max,
                    step: meta.step,
                }
            }
            "resource" => Self::Resource {
                uid: descriptor
                    .resource_value
                    .as_ref()
                    .map(|r| r.uid.clone())
                    .unwrap_or_default(),
            },
            other => Self::Other {
                type_name: other.to_string(),
            },
        }
    }

    /// Type label shown in the table's type column.
    pub fn type_label(&self) -> &str {
        match self {
            Self::String { .. } => "string",
            Self::Float { .. } => "float",
            Self::Resource { .. } => "resource",
            Self::Other { type_name } => type_name,
        }
    }
}

/// One row of the panel: a single field of a single server object.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchField {
    /// Opaque identifier of the owning object grouping.
    pub address: String,
    /// Unique identifier of this field instance.
    pub uid: String,
    /// Server-side field name, sent back in change requests.
    pub name: String,
    /// Human-readable label.
    pub display_name: String,
    pub value: FieldValue,
}

/// Flattens every field of every result group into row records.
pub fn flatten(response: &PatchesResponse) -> Vec<PatchField> {
    let mut fields = Vec::new();
    for group in &response.result {
        for descriptor in &group.fields {
            fields.push(PatchField {
                address: group.address.clone(),
                uid: group.uid.clone(),
                name: descriptor.name.clone(),
                display_name: descriptor.display_name.clone(),
                value: FieldValue::from_descriptor(descriptor),
            });
        }
    }
    tracing::debug!("flattened {} patch fields", fields.len());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_response() -> PatchesResponse {
        serde_json::from_str(
            r#"{
                "status": {"code": 0, "message": "ok"},
                "result": [
                    {
                        "address": "puppet/head",
                        "uid": "uid-1",
                        "fields": [
                            {
                                "name": "Mood",
                                "type": "string",
                                "displayName": "Mood",
                                "stringValue": "A",
                                "stringMeta": {"options": ["B", "C"]}
                            },
                            {
                                "name": "Tilt",
                                "type": "float",
                                "displayName": "Head Tilt",
                                "floatValue": {"value": 5.0},
                                "floatMeta": {"min": 0.0, "max": 10.0, "step": 1.0}
                            }
                        ]
                    },
                    {
                        "address": "puppet/body",
                        "uid": "uid-2",
                        "fields": [
                            {
                                "name": "Costume",
                                "type": "resource",
                                "displayName": "Costume",
                                "resourceValue": {"uid": "res://red-coat"}
                            },
                            {
                                "name": "Pose",
                                "type": "transform",
                                "displayName": "Pose"
                            }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn flatten_count_matches_field_sum() {
        let response = sample_response();
        let expected: usize = response.result.iter().map(|g| g.fields.len()).sum();
        assert_eq!(flatten(&response).len(), expected);
    }

    #[test]
    fn flatten_preserves_iteration_order() {
        let fields = flatten(&sample_response());
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Mood", "Tilt", "Costume", "Pose"]);
        assert_eq!(fields[0].address, "puppet/head");
        assert_eq!(fields[2].address, "puppet/body");
        assert_eq!(fields[2].uid, "uid-2");
    }

    #[test]
    fn string_field_carries_current_and_options() {
        let fields = flatten(&sample_response());
        let FieldValue::String { current, options } = &fields[0].value else {
            panic!("expected string field");
        };
        assert_eq!(current, "A");
        assert_eq!(options, &["B".to_string(), "C".to_string()]);
    }

    #[test]
    fn float_field_carries_bounds() {
        let fields = flatten(&sample_response());
        let FieldValue::Float {
            current,
            min,
            max,
            step,
        } = fields[1].value
        else {
            panic!("expected float field");
        };
        assert_eq!(current, 5.0);
        assert_eq!(min, Some(0.0));
        assert_eq!(max, Some(10.0));
        assert_eq!(step, Some(1.0));
    }

    #[test]
    fn resource_field_carries_uid() {
        let fields = flatten(&sample_response());
        assert_eq!(
            fields[2].value,
            FieldValue::Resource {
                uid: "res://red-coat".to_string()
            }
        );
    }

    #[test]
    fn unknown_type_falls_through_to_other() {
        let fields = flatten(&sample_response());
        assert_eq!(fields[3].value.type_label(), "transform");
    }

    #[test]
    fn missing_float_metadata_yields_unbounded_controls() {
        let response: PatchesResponse = serde_json::from_str(
            r#"{
                "status": {"code": 0, "message": "ok"},
                "result": [{
                    "address": "puppet/arm",
                    "uid": "uid-3",
                    "fields": [{"name": "Bend", "type": "float"}]
                }]
            }"#,
        )
        .unwrap();
        let fields = flatten(&response);
        let FieldValue::Float {
            current,
            min,
            max,
            step,
        } = fields[0].value
        else {
            panic!("expected float field");
        };
        assert_eq!(current, 0.0);
        assert_eq!(min, None);
        assert_eq!(max, None);
        assert_eq!(step, None);
    }

    #[test]
    fn empty_result_flattens_to_no_rows() {
        let response: PatchesResponse =
            serde_json::from_str(r#"{"status": {"code": 0, "message": "ok"}, "result": []}"#)
                .unwrap();
        assert!(flatten(&response).is_empty());
    }
}
