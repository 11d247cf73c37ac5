//! Standalone change dispatcher page.
//!
//! Renders the plain report layout (controls named by *address*) and wires
//! raw DOM `change` listeners to every `select`/`input` present once the
//! table has populated. Edits skip the typed protocol entirely: the raw
//! control string goes to the per-address update endpoint and the server
//! coerces it. Controls added after binding are never bound.

use gloo::events::EventListener;
use puppet_core::{FieldValue, PatchField};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_patches;
use crate::net::PanelClient;

/// Dispatcher page.
#[function_component(DispatcherPage)]
pub fn dispatcher_page() -> Html {
    let (patches, _reload) = use_patches();
    let listeners = use_mut_ref(Vec::<EventListener>::new);

    // Bind once, after the first populated render. Listener handles live for
    // the lifetime of the page and drop (unbind) on unmount.
    {
        let listeners = listeners.clone();
        use_effect_with(patches.fields.len(), move |count| {
            if *count > 0 && listeners.borrow().is_empty() {
                listeners.replace(bind_change_listeners());
            }
            || ()
        });
    }

    html! {
        <main class="page dispatcher-page" style="padding: 20px; max-width: 960px; margin: 0 auto;">
            <h1>{ "Patch Results" }</h1>
            if patches.loading {
                <p style="color: #888;">{ "Loading..." }</p>
            }
            if let Some(error) = &patches.error {
                <p style="color: #f44336;">{ error.clone() }</p>
            }
            <table style="border-collapse: collapse; width: 100%; margin: 20px 0;">
                <thead>
                    <tr>
                        <th>{ "Address" }</th>
                        <th>{ "Field Name" }</th>
                        <th>{ "Field Type" }</th>
                        <th>{ "Value" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for patches.fields.iter().map(|field| html! {
                        <DispatcherRow
                            key={format!("{}/{}", field.uid, field.name)}
                            field={field.clone()}
                        />
                    }) }
                </tbody>
            </table>
        </main>
    }
}

/// Attaches a `change` listener to every select/input currently in the
/// document.
fn bind_change_listeners() -> Vec<EventListener> {
    let document = gloo::utils::document();
    let Ok(nodes) = document.query_selector_all("select, input") else {
        return Vec::new();
    };

    let mut listeners = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<Element>() else {
            continue;
        };
        listeners.push(EventListener::new(&element, "change", move |event| {
            let Some(target) = event.target() else {
                return;
            };
            let Ok(element) = target.dyn_into::<Element>() else {
                return;
            };
            on_value_change(&element);
        }));
    }
    tracing::debug!("bound change listeners to {} controls", listeners.len());
    listeners
}

/// Reads the control's `name` attribute as the target address and PATCHes
/// the raw value. Result JSON (or the error) only goes to the console.
fn on_value_change(element: &Element) {
    let Some(address) = element.get_attribute("name") else {
        return;
    };
    if address.is_empty() {
        return;
    }
    let Some(value) = control_value(element) else {
        return;
    };

    tracing::info!("sending update for address {address}: {value}");
    spawn_local(async move {
        match PanelClient::default().patch_update(&address, &value).await {
            Ok(result) => tracing::info!("update result: {result}"),
            Err(e) => tracing::error!("error updating value: {e}"),
        }
    });
}

fn control_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    element
        .dyn_ref::<HtmlSelectElement>()
        .map(|select| select.value())
}

/// Props for one dispatcher row.
#[derive(Properties, PartialEq)]
struct DispatcherRowProps {
    field: PatchField,
}

/// One report row. Controls carry the owning *address* in their `name`
/// attribute; the raw listeners read it back on change.
#[function_component(DispatcherRow)]
fn dispatcher_row(props: &DispatcherRowProps) -> Html {
    let field = &props.field;

    let control = match &field.value {
        FieldValue::String { current, options } => html! {
            <select name={field.address.clone()}>
                <option value={current.clone()} selected={true}>{ current.clone() }</option>
                { for options.iter().map(|option| html! {
                    <option value={option.clone()}>{ option.clone() }</option>
                }) }
            </select>
        },
        FieldValue::Float {
            current,
            min,
            max,
            step,
        } => html! {
            <RangeWithReadout
                address={field.address.clone()}
                current={*current}
                min={*min}
                max={*max}
                step={*step}
            />
        },
        FieldValue::Resource { uid } => html! {
            <input type="text" name={field.address.clone()} value={uid.clone()} />
        },
        FieldValue::Other { .. } => html! {},
    };

    html! {
        <tr>
            <td>{ field.address.clone() }</td>
            <td>{ field.name.clone() }</td>
            <td>{ field.value.type_label().to_string() }</td>
            <td>{ control }</td>
        </tr>
    }
}

/// Props for the slider with a text readout.
#[derive(Properties, PartialEq)]
struct RangeWithReadoutProps {
    address: AttrValue,
    current: f64,
    min: Option<f64>,
    max: Option<f64>,
    step: Option<f64>,
}

/// Range slider whose current value is mirrored into an adjacent span.
#[function_component(RangeWithReadout)]
fn range_with_readout(props: &RangeWithReadoutProps) -> Html {
    let value = use_state(|| props.current);

    let on_input = {
        let value = value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(v) = input.value().parse() {
                value.set(v);
            }
        })
    };

    html! {
        <>
            <input
                type="range"
                name={props.address.clone()}
                min={props.min.map(|v| v.to_string())}
                max={props.max.map(|v| v.to_string())}
                step={props.step.map(|v| v.to_string())}
                value={(*value).to_string()}
                oninput={on_input}
            />
            <span>{ (*value).to_string() }</span>
        </>
    }
}
