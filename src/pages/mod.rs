//! Top-level pages, one per route.

mod dashboard;
mod part;

pub use dashboard::Dashboard;
pub use part::PartDetail;
