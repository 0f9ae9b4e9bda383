pub mod chart;
pub mod chart_wrapper;
pub mod error_banner;
pub mod spinner;
pub mod status;

pub use chart::ChartCanvas;
pub use chart_wrapper::{ChartWrapper, WrapperView, resolve_view};
pub use error_banner::ErrorBanner;
pub use spinner::Spinner;
