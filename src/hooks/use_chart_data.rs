use std::rc::Rc;
use yew::prelude::*;

use crate::models::chart_data::ChartData;
use crate::services::api::fetch_chart_data;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq, Debug)]
pub enum DataState {
    Loading,
    Loaded(Rc<ChartData>),
    Error(String),
}

impl DataState {
    /// Returns true if the state is loading
    pub fn is_loading(&self) -> bool {
        matches!(self, DataState::Loading)
    }

    /// Returns the data if it is loaded
    pub fn data(&self) -> Option<&Rc<ChartData>> {
        match self {
            DataState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the error message, if loading failed
    pub fn error(&self) -> Option<&str> {
        match self {
            DataState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

#[hook]
pub fn use_chart_data(url: AttrValue) -> UseStateHandle<DataState> {
    let state = use_state(|| DataState::Loading);

    {
        let state = state.clone();

        use_effect_with(url, move |url| {
            let url = url.clone();
            state.set(DataState::Loading);

            spawn_local(async move {
                match fetch_chart_data(&url).await {
                    Ok(data) => state.set(DataState::Loaded(Rc::new(data))),
                    Err(e) => {
                        gloo::console::error!(format!("Failed to load {url}: {e}"));
                        state.set(DataState::Error(e.to_string()));
                    }
                }
            });

            || ()
        });
    }

    state
}
