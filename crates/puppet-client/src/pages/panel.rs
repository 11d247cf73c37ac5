//! Main panel page: patch table with refresh control and live updates.

use puppet_core::PatchSubmission;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::PatchTable;
use crate::hooks::use_patches;
use crate::net::PanelClient;

/// Outcome of the most recent live update, shown next to the refresh button.
#[derive(Clone, PartialEq)]
struct StatusLine {
    message: String,
    is_error: bool,
}

/// Patch panel page.
#[function_component(PanelPage)]
pub fn panel_page() -> Html {
    let (patches, reload) = use_patches();
    let status = use_state(|| None::<StatusLine>);

    let on_refresh = {
        let reload = reload.clone();
        Callback::from(move |_: MouseEvent| reload.emit(()))
    };

    // Live updater: every committed edit becomes one single-field POST.
    // Failures are logged and shown in the status line; nothing is retried
    // and the control keeps whatever the user set.
    let on_edit = {
        let status = status.clone();
        Callback::from(move |submission: PatchSubmission| {
            let status = status.clone();
            let field = submission
                .changes
                .first()
                .map(|change| change.field.clone())
                .unwrap_or_default();
            spawn_local(async move {
                match PanelClient::default().post_live(submission).await {
                    Ok(()) => {
                        tracing::info!("successfully updated {field}");
                        status.set(Some(StatusLine {
                            message: format!("Updated {field}"),
                            is_error: false,
                        }));
                    }
                    Err(e) => {
                        tracing::error!("error updating value: {e}");
                        status.set(Some(StatusLine {
                            message: e.to_string(),
                            is_error: true,
                        }));
                    }
                }
            });
        })
    };

    html! {
        <main class="page panel-page" style="padding: 20px; max-width: 960px; margin: 0 auto;">
            <h1>{ "Sockpuppet Patches" }</h1>
            <button onclick={on_refresh}>{ "Refresh Patches" }</button>
            if let Some(line) = &*status {
                <span style={if line.is_error {
                    "margin-left: 10px; color: #f44336;"
                } else {
                    "margin-left: 10px; color: #4CAF50;"
                }}>
                    { line.message.clone() }
                </span>
            }
            if patches.loading {
                <p style="color: #888;">{ "Loading..." }</p>
            }
            if let Some(error) = &patches.error {
                <p style="color: #f44336;">{ error.clone() }</p>
            }
            if patches.error.is_none() && !patches.loading && patches.fields.is_empty() {
                <p style="color: #888;">{ "No patches found" }</p>
            }
            <PatchTable fields={patches.fields.clone()} on_edit={on_edit} />
        </main>
    }
}
