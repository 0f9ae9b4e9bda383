use charming::{Chart as CharmingChart, renderer::WasmRenderer};
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::{
    chart_data::ChartData,
    error::AppError,
    options::{ChartKind, DisplayOptions},
};
use crate::utils::{
    chart_options::{build_chart, pixel_height},
    debounce::debounced_resize_listener,
};

static NEXT_CHART_ID: AtomicUsize = AtomicUsize::new(0);

#[derive(Properties, PartialEq)]
pub struct ChartCanvasProps {
    pub data: Rc<ChartData>,
    #[prop_or_default]
    pub kind: ChartKind,
    /// Height relative to a `Config::CANVAS_BASE_WIDTH` wide canvas
    #[prop_or(Config::DEFAULT_CHART_HEIGHT)]
    pub height: u32,
    #[prop_or_default]
    pub options: DisplayOptions,
}

#[function_component(ChartCanvas)]
pub fn chart_canvas(props: &ChartCanvasProps) -> Html {
    let container_ref = use_node_ref();
    // Several wrappers can share a page, so each needs its own mount point
    let chart_id = use_memo((), |_| {
        format!(
            "chart-wrapper-{}",
            NEXT_CHART_ID.fetch_add(1, Ordering::Relaxed)
        )
    });

    {
        let container_ref = container_ref.clone();
        let chart_id = chart_id.clone();

        use_effect_with(
            (
                props.data.clone(),
                props.kind,
                props.height,
                props.options.clone(),
                container_ref,
            ),
            move |(data, kind, height, options, container_ref)| {
                let height = *height;
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    let chart = build_chart(data, *kind, options);
                    render_chart(&container, &chart_id, &chart, height);

                    debounced_resize_listener(
                        move || render_chart(&container, &chart_id, &chart, height),
                        Config::RESIZE_DEBOUNCE_MS,
                    )
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-canvas" ref={container_ref}>
            <div id={(*chart_id).clone()} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, chart_id: &str, chart: &CharmingChart, chart_height: u32) {
    let width = container.client_width().cast_unsigned();

    // Hidden or detached containers report zero width
    if width == 0 {
        gloo::console::debug!(format!("Skipping render of {chart_id}: zero width"));
        return;
    }

    let height = pixel_height(width, chart_height);
    if let Err(e) = WasmRenderer::new(width, height).render(chart_id, chart) {
        let error = AppError::RenderError(format!("{e:?}"));
        gloo::console::error!(error.to_string());
    }
}
