//! Part detail page hosting the threshold panel.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::ThresholdPanel;

#[component]
pub fn PartDetail(id: i64) -> Element {
    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { class: "app-title", "Stockwatch" }
                Link {
                    to: Route::Dashboard {},
                    class: "back-link",
                    "Back to dashboard"
                }
            }
            ThresholdPanel { part_id: id }
        }
    }
}
