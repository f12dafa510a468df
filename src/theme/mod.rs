//! Visual theme for the stockwatch desktop app.

mod styles;

pub use styles::GLOBAL_STYLES;
