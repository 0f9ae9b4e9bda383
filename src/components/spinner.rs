use yew::prelude::*;

use crate::config::Config;

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    /// Any CSS length; used for both width and line height
    #[prop_or_else(|| Config::DEFAULT_SPINNER_SIZE.to_string())]
    pub size: String,
}

/// Circular progress indicator, centered in a square box of `size`.
#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="spinner-container" style={spinner_style(&props.size)}>
            <div class="spinner" role="progressbar" aria-label="Loading"></div>
        </div>
    }
}

pub fn spinner_style(size: &str) -> String {
    format!("line-height: {size}; text-align: center; width: {size};")
}
