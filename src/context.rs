//! Inventory client context provider.
//!
//! Provides the shared inventory API client to all components via
//! use_context, so widgets receive the gateway as an injected capability
//! instead of reaching for a global.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| client_signal);
//!
//! // In child components
//! let client = use_client();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use stockwatch_core::InventoryApi;

/// Shared client type for context.
///
/// Trait object so the widgets stay agnostic of the threshold storage
/// variant the deployment configured.
pub type SharedClient = Arc<dyn InventoryApi>;

/// Hook to access the inventory client from context.
pub fn use_client() -> Signal<SharedClient> {
    use_context::<Signal<SharedClient>>()
}
