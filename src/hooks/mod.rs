pub mod use_chart_data;
pub mod use_now;
