pub mod chart_options;
pub mod debounce;
