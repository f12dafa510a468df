//! Low stock dashboard component.
//!
//! Polls the candidate list on the dashboard cadence and renders a
//! capped, server-ordered list of parts under their threshold. The list
//! is replaced wholesale every cycle; a failed cycle shows an error view
//! until the next successful one.

use dioxus::prelude::*;
use stockwatch_core::{refresh_low_stock, DashboardState, LowStockEntry, REFRESH_INTERVAL};

use crate::app::Route;
use crate::context::use_client;

#[component]
pub fn LowStockDashboard() -> Element {
    let client = use_client();
    let mut state = use_signal(|| DashboardState::Loading);

    // Refresh on mount, then on the fixed cadence. The task is scoped to
    // this component and cancelled when it unmounts, so no refresh fires
    // after teardown.
    use_effect(move || {
        spawn(async move {
            loop {
                let api = client();
                let next = refresh_low_stock(api.as_ref()).await;
                state.set(next);
                tokio::time::sleep(REFRESH_INTERVAL).await;
            }
        });
    });

    match state() {
        DashboardState::Loading => rsx! {
            div { class: "dashboard loading", "Loading low stock items..." }
        },
        DashboardState::Error { message } => rsx! {
            div { class: "dashboard",
                div { class: "alert alert-error", "{message}" }
            }
        },
        DashboardState::Ready { report } => rsx! {
            div { class: "dashboard",
                h2 { class: "dashboard-title",
                    "Low Stock Items"
                    span { class: "count-badge", "{report.total()}" }
                }

                if report.is_empty() {
                    div { class: "empty-state",
                        p { "No items with low stock" }
                    }
                } else {
                    div { class: "entry-list",
                        for entry in report.visible.iter() {
                            LowStockRow {
                                key: "{entry.id}",
                                entry: entry.clone(),
                            }
                        }

                        if report.overflow > 0 {
                            div { class: "entry-overflow",
                                "... and {report.overflow} more items"
                            }
                        }
                    }
                }
            }
        },
    }
}

/// One qualifying part, linking to its detail page.
#[component]
fn LowStockRow(entry: LowStockEntry) -> Element {
    let ipn = entry.ipn.clone().unwrap_or_else(|| "No IPN".to_string());
    let percent = entry.stock_percent();

    rsx! {
        Link {
            to: Route::PartDetail { id: entry.id.0 },
            class: "entry-row",

            div { class: "entry-main",
                div {
                    h3 { class: "entry-name", "{entry.name}" }
                    small { class: "entry-ipn", "{ipn}" }
                }
                span { class: "entry-quantities",
                    "{entry.available_stock} / {entry.minimum_stock}"
                }
            }

            div { class: "entry-progress",
                div {
                    class: "entry-progress-bar",
                    style: "width: {percent}%",
                }
            }
        }
    }
}
