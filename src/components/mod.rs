//! UI components for the stockwatch desktop app.

mod low_stock_dashboard;
mod notice;
mod threshold_panel;

pub use low_stock_dashboard::LowStockDashboard;
pub use notice::{Notice, NoticeBanner};
pub use threshold_panel::ThresholdPanel;
