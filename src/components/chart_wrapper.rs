use chrono::{DateTime, Utc};
use std::rc::Rc;
use yew::prelude::*;

use super::{chart::ChartCanvas, error_banner::ErrorBanner, spinner::Spinner};
use crate::config::Config;
use crate::models::{
    chart_data::ChartData,
    options::{ChartKind, DisplayOptions},
    staleness,
};

// Fixed container width; the canvas height scales from it
const CONTAINER_STYLE: &str = "width: 600px; min-width: 400px; background: white;";
const TITLE_STYLE: &str = "color: white; background-color: black; padding: .3rem;";
const BANNER_CLASS: &str = "chart-wrapper-error";

#[derive(Properties, PartialEq)]
pub struct ChartWrapperProps {
    /// `None` while the caller is still loading
    #[prop_or_default]
    pub data: Option<Rc<ChartData>>,
    #[prop_or_default]
    pub options: DisplayOptions,
    #[prop_or_default]
    pub title: String,
    #[prop_or_default]
    pub kind: ChartKind,
    #[prop_or(Config::DEFAULT_CHART_HEIGHT)]
    pub chart_height: u32,
    #[prop_or_else(|| Config::DEFAULT_SPINNER_SIZE.to_string())]
    pub spinner_size: String,
    /// Warn when a dataset has had no new points for more than three days
    #[prop_or(false)]
    pub missing_data_error: bool,
    /// Evaluation time for the staleness check; the wall clock when unset
    #[prop_or_default]
    pub now: Option<DateTime<Utc>>,
}

/// What the wrapper shows for a given set of inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum WrapperView {
    Loading {
        spinner_size: String,
    },
    Chart {
        data: Rc<ChartData>,
        /// Banner text, present only when a stale dataset was found
        warning: Option<&'static str>,
        heading: Option<String>,
    },
}

/// Picks the loading, warning + chart, or chart view.
///
/// Staleness is only evaluated when data is present and
/// `missing_data_error` is set.
pub fn resolve_view(
    data: Option<&Rc<ChartData>>,
    title: &str,
    missing_data_error: bool,
    spinner_size: &str,
    now: DateTime<Utc>,
) -> WrapperView {
    let Some(data) = data else {
        return WrapperView::Loading {
            spinner_size: spinner_size.to_string(),
        };
    };

    let warning = (missing_data_error && staleness::is_stale(data, now))
        .then_some(Config::MISSING_DATA_MESSAGE);
    let heading = (!title.is_empty()).then(|| title.to_string());

    WrapperView::Chart {
        data: data.clone(),
        warning,
        heading,
    }
}

#[function_component(ChartWrapper)]
pub fn chart_wrapper(props: &ChartWrapperProps) -> Html {
    let now = props.now.unwrap_or_else(Utc::now);

    let stale_labels: Vec<String> = match &props.data {
        Some(data) if props.missing_data_error => data
            .stale_labels(now)
            .into_iter()
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };

    use_effect_with(stale_labels, |labels| {
        if !labels.is_empty() {
            gloo::console::warn!(format!(
                "Stale datasets (no data for over {} days): {}",
                Config::STALE_AFTER_DAYS,
                labels.join(", ")
            ));
        }
        || ()
    });

    match resolve_view(
        props.data.as_ref(),
        &props.title,
        props.missing_data_error,
        &props.spinner_size,
        now,
    ) {
        WrapperView::Loading { spinner_size } => html! {
            <Spinner size={spinner_size} />
        },
        WrapperView::Chart {
            data,
            warning,
            heading,
        } => html! {
            <div class="chart-wrapper" style={CONTAINER_STYLE}>
                if let Some(message) = warning {
                    <ErrorBanner message={message.to_string()} class={classes!(BANNER_CLASS)} />
                }
                if let Some(heading) = heading {
                    <h2 class="chart-wrapper-title" style={TITLE_STYLE}>{heading}</h2>
                }
                <ChartCanvas
                    {data}
                    kind={props.kind}
                    height={props.chart_height}
                    options={props.options.clone()}
                />
            </div>
        },
    }
}
