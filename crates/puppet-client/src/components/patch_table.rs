//! Patch table component.
//!
//! Renders one row per flattened field with a value editor matching the
//! field type. Editors emit a ready-to-send single-field submission; the
//! page owns the actual network call.

use puppet_core::{ChangeRequest, FieldValue, PatchField, PatchSubmission};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Props for the PatchTable component.
#[derive(Properties, PartialEq)]
pub struct PatchTableProps {
    pub fields: Vec<PatchField>,
    /// Fired once per committed edit with a single-field batch.
    pub on_edit: Callback<PatchSubmission>,
}

/// Editable table of patchable fields.
#[function_component(PatchTable)]
pub fn patch_table(props: &PatchTableProps) -> Html {
    html! {
        <table class="patch-table" style="border-collapse: collapse; width: 100%; margin: 20px 0;">
            <thead>
                <tr>
                    <th>{ "Address" }</th>
                    <th>{ "Name" }</th>
                    <th>{ "Type" }</th>
                    <th>{ "Value" }</th>
                </tr>
            </thead>
            <tbody>
                { for props.fields.iter().map(|field| html! {
                    <PatchRow
                        key={format!("{}/{}", field.uid, field.name)}
                        field={field.clone()}
                        on_edit={props.on_edit.clone()}
                    />
                }) }
            </tbody>
        </table>
    }
}

/// Dropdown entries: the current value first (rendered selected), then every
/// provided option in server order.
fn dropdown_options(current: &str, options: &[String]) -> Vec<String> {
    let mut entries = Vec::with_capacity(options.len() + 1);
    entries.push(current.to_string());
    entries.extend(options.iter().cloned());
    entries
}

/// Props for a single table row.
#[derive(Properties, PartialEq)]
struct PatchRowProps {
    field: PatchField,
    on_edit: Callback<PatchSubmission>,
}

/// One field row: address, display name, type label, and a value editor.
#[function_component(PatchRow)]
fn patch_row(props: &PatchRowProps) -> Html {
    let field = &props.field;

    let editor = match &field.value {
        FieldValue::String { current, options } => {
            let onchange = {
                let field = field.clone();
                let on_edit = props.on_edit.clone();
                Callback::from(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    let change = ChangeRequest::string(&field.name, select.value());
                    on_edit.emit(PatchSubmission::single(&field.address, &field.uid, change));
                })
            };
            let entries = dropdown_options(current, options);
            html! {
                <select
                    name={field.display_name.clone()}
                    data-field={field.name.clone()}
                    data-address={field.address.clone()}
                    data-uid={field.uid.clone()}
                    {onchange}
                >
                    { for entries.iter().enumerate().map(|(index, entry)| html! {
                        <option value={entry.clone()} selected={index == 0}>{ entry.clone() }</option>
                    }) }
                </select>
            }
        }
        FieldValue::Float {
            current,
            min,
            max,
            step,
        } => {
            let on_commit = {
                let field = field.clone();
                let on_edit = props.on_edit.clone();
                Callback::from(move |v: f64| {
                    let change = ChangeRequest::float(&field.name, v);
                    on_edit.emit(PatchSubmission::single(&field.address, &field.uid, change));
                })
            };
            html! {
                <FloatEditor
                    display_name={field.display_name.clone()}
                    field_name={field.name.clone()}
                    address={field.address.clone()}
                    uid={field.uid.clone()}
                    current={*current}
                    min={*min}
                    max={*max}
                    step={*step}
                    {on_commit}
                />
            }
        }
        FieldValue::Resource { uid } => {
            let onchange = {
                let field = field.clone();
                let on_edit = props.on_edit.clone();
                Callback::from(move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    let change = ChangeRequest::resource(&field.name, input.value());
                    on_edit.emit(PatchSubmission::single(&field.address, &field.uid, change));
                })
            };
            html! {
                <input
                    type="text"
                    name={field.display_name.clone()}
                    data-field={field.name.clone()}
                    data-address={field.address.clone()}
                    data-uid={field.uid.clone()}
                    value={uid.clone()}
                    {onchange}
                />
            }
        }
        FieldValue::Other { .. } => html! {},
    };

    html! {
        <tr>
            <td>{ field.address.clone() }</td>
            <td>{ field.display_name.clone() }</td>
            <td>{ field.value.type_label().to_string() }</td>
            <td>{ editor }</td>
        </tr>
    }
}

/// Props for the paired float controls.
#[derive(Properties, PartialEq)]
struct FloatEditorProps {
    display_name: AttrValue,
    field_name: AttrValue,
    address: AttrValue,
    uid: AttrValue,
    current: f64,
    min: Option<f64>,
    max: Option<f64>,
    step: Option<f64>,
    on_commit: Callback<f64>,
}

/// Linked slider + number box. Both render from the same state, so moving
/// either keeps the other in step; commit fires on `change` only.
#[function_component(FloatEditor)]
fn float_editor(props: &FloatEditorProps) -> Html {
    let value = use_state(|| props.current);

    // Adopt the server value when a refresh replaces it.
    {
        let value = value.clone();
        use_effect_with(props.current, move |current| {
            value.set(*current);
            || ()
        });
    }

    let on_input = {
        let value = value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(v) = input.value().parse() {
                value.set(v);
            }
        })
    };

    let on_change = {
        let on_commit = props.on_commit.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(v) = input.value().parse() {
                on_commit.emit(v);
            }
        })
    };

    let min = props.min.map(|v| v.to_string());
    let max = props.max.map(|v| v.to_string());
    let step = props.step.map(|v| v.to_string());

    html! {
        <div style="display: flex; align-items: center; gap: 10px;">
            <input
                type="range"
                name={props.display_name.clone()}
                data-field={props.field_name.clone()}
                data-address={props.address.clone()}
                data-uid={props.uid.clone()}
                min={min.clone()}
                max={max.clone()}
                step={step.clone()}
                value={(*value).to_string()}
                oninput={on_input.clone()}
                onchange={on_change.clone()}
            />
            <input
                type="number"
                style="width: 80px;"
                data-field={props.field_name.clone()}
                data-address={props.address.clone()}
                data-uid={props.uid.clone()}
                min={min}
                max={max}
                step={step}
                value={(*value).to_string()}
                oninput={on_input}
                onchange={on_change}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::dropdown_options;

    #[test]
    fn dropdown_lists_current_first_then_options() {
        let entries = dropdown_options("A", &["B".to_string(), "C".to_string()]);
        assert_eq!(entries, ["A", "B", "C"]);
    }

    #[test]
    fn dropdown_with_no_options_still_shows_current() {
        assert_eq!(dropdown_options("solo", &[]), ["solo"]);
    }
}
