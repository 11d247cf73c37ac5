//! Hook for fetching the patch list.

use puppet_core::PatchField;
use yew::prelude::*;

use crate::net::PanelClient;

/// State for the patch table.
#[derive(Clone, PartialEq, Default)]
pub struct PatchesState {
    pub fields: Vec<PatchField>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Hook to fetch the patch list on mount.
///
/// The returned callback reloads: it clears existing rows before the fetch
/// goes out, so the table drops to its header immediately. Overlapping
/// reloads race freely and the last response to land wins.
#[hook]
pub fn use_patches() -> (UseStateHandle<PatchesState>, Callback<()>) {
    let state = use_state(|| PatchesState {
        fields: Vec::new(),
        loading: true,
        error: None,
    });

    let reload = {
        let state = state.clone();
        Callback::from(move |()| {
            let state = state.clone();
            state.set(PatchesState {
                fields: Vec::new(),
                loading: true,
                error: None,
            });

            wasm_bindgen_futures::spawn_local(async move {
                match PanelClient::default().get_patches().await {
                    Ok(fields) => {
                        tracing::info!("successfully parsed {} patches", fields.len());
                        if fields.is_empty() {
                            tracing::warn!("no patches found in the response");
                        }
                        state.set(PatchesState {
                            fields,
                            loading: false,
                            error: None,
                        });
                    }
                    Err(e) => {
                        tracing::error!("failed to load patches: {e}");
                        state.set(PatchesState {
                            fields: Vec::new(),
                            loading: false,
                            error: Some(e.to_string()),
                        });
                    }
                }
            });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    (state, reload)
}
