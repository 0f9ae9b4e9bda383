use yew::prelude::*;

use chart_wrapper::components::{ChartWrapper, status::Status};
use chart_wrapper::config::Config;
use chart_wrapper::hooks::{use_chart_data::use_chart_data, use_now::use_now};
use chart_wrapper::models::options::DisplayOptions;

#[function_component(App)]
fn app() -> Html {
    let state = use_chart_data(AttrValue::Static(Config::DATA_URL));
    let now = use_now(Config::CLOCK_REFRESH_MS);

    let options = DisplayOptions {
        scale_label: Some("Response time (ms)".to_string()),
        tick_formatter: Some("{value} ms".to_string()),
        ..DisplayOptions::default()
    };

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Chart Wrapper"}</h1>
            </header>

            <main class="app-main">
                <section class="status-section">
                    <Status state={(*state).clone()} />
                </section>

                if state.error().is_none() {
                    <section class="chart-section">
                        <ChartWrapper
                            data={state.data().cloned()}
                            title="Response times"
                            {options}
                            missing_data_error={true}
                            {now}
                        />
                    </section>
                }
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
