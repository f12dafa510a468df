//! Threshold panel component for a part detail page.
//!
//! Drives the `Uninitialized → Loading → Ready | Error` lifecycle from
//! `stockwatch-core` and renders each state. A save keeps the panel in
//! `Ready` with its current values until the server's echo arrives.

use dioxus::prelude::*;
use stockwatch_core::{
    format_threshold, is_low_stock, load_panel, save_threshold, PanelState, PartId, SaveOutcome,
    panel::SAVE_OK_MESSAGE,
};

use super::{Notice, NoticeBanner};
use crate::context::use_client;

#[component]
pub fn ThresholdPanel(part_id: i64) -> Element {
    let client = use_client();
    let mut state = use_signal(|| PanelState::Uninitialized);
    let mut input_value = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut notice = use_signal(|| Option::<Notice>::None);

    // Initial fetch sequence on mount
    use_effect(move || {
        spawn(async move {
            state.set(PanelState::Loading);
            let api = client();
            let next = load_panel(api.as_ref(), PartId(part_id)).await;
            if let PanelState::Ready { threshold, .. } = &next {
                input_value.set(format_threshold(*threshold));
            }
            state.set(next);
        });
    });

    let on_save = move |_| {
        if saving() {
            return;
        }
        saving.set(true);

        spawn(async move {
            let api = client();
            match save_threshold(api.as_ref(), PartId(part_id), &input_value()).await {
                SaveOutcome::Saved { threshold } => {
                    // The server's echoed value is authoritative
                    state.write().apply_saved(threshold);
                    input_value.set(format_threshold(threshold));
                    notice.set(Some(Notice::success(SAVE_OK_MESSAGE)));
                }
                SaveOutcome::Failed { message } => {
                    // Displayed state keeps its pre-save values
                    notice.set(Some(Notice::error(message)));
                }
            }
            saving.set(false);

            // Clear the notice after a short delay
            tokio::time::sleep(std::time::Duration::from_secs(2)).await;
            notice.set(None);
        });
    };

    match state() {
        PanelState::Uninitialized | PanelState::Loading => rsx! {
            div { class: "panel loading", "Loading part data..." }
        },
        PanelState::Error { message } => rsx! {
            div { class: "panel",
                div { class: "alert alert-error", "{message}" }
            }
        },
        PanelState::Ready { part, threshold } => {
            let low = is_low_stock(part.available_stock, threshold);
            let badge_class = if low { "stock-badge low" } else { "stock-badge ok" };
            let badge_label = if low { "Low Stock" } else { "Stock OK" };

            rsx! {
                div { class: "panel",
                    h2 { class: "panel-title", "Stock Threshold" }
                    p { class: "panel-subtitle", "{part.name}" }

                    div { class: "field-row",
                        div { class: "field",
                            label { r#for: "stock-threshold-input", "Stock Threshold" }
                            input {
                                id: "stock-threshold-input",
                                r#type: "number",
                                min: "0",
                                step: "1",
                                value: "{input_value}",
                                oninput: move |evt| input_value.set(evt.value()),
                            }
                            small { class: "field-hint",
                                "Minimum stock level before notification"
                            }
                        }

                        div { class: "field",
                            label { r#for: "current-stock-display", "Current Stock" }
                            div { class: "stock-display",
                                input {
                                    id: "current-stock-display",
                                    r#type: "number",
                                    value: "{part.available_stock}",
                                    disabled: true,
                                }
                                span { class: "{badge_class}", "{badge_label}" }
                            }
                        }
                    }

                    button {
                        class: "btn btn-primary",
                        disabled: saving(),
                        onclick: on_save,
                        if saving() { "Saving..." } else { "Save Threshold" }
                    }

                    if let Some(current) = notice() {
                        NoticeBanner { notice: current }
                    }
                }
            }
        }
    }
}
