use dioxus::prelude::*;

use crate::context::SharedClient;
use crate::pages::{Dashboard, PartDetail};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Low stock dashboard
/// - `/part/:id` - Part detail with the threshold panel
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/part/:id")]
    PartDetail { id: i64 },
}

/// Root application component.
///
/// Provides global styles, the inventory client context, and routing.
#[component]
pub fn App() -> Element {
    let client: Signal<SharedClient> = use_signal(crate::client);
    use_context_provider(|| client);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
