//! Dashboard page - the low stock overview.

use dioxus::prelude::*;

use crate::components::LowStockDashboard;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { class: "app-title", "Stockwatch" }
            }
            LowStockDashboard {}
        }
    }
}
