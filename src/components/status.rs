use crate::hooks::use_chart_data::DataState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub state: DataState,
}

#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match &props.state {
        DataState::Loading => html! {
            <div class="status loading">
                <p>{"Loading chart data..."}</p>
            </div>
        },
        DataState::Loaded(data) => html! {
            <div class="status success">
                <p>{format!("Loaded {} dataset(s)", data.datasets.len())}</p>
            </div>
        },
        DataState::Error(msg) => html! {
            <div class="status error">
                <p>{"Error: "}{msg}</p>
            </div>
        },
    }
}
