use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use yew::prelude::*;

/// Current wall-clock time, refreshed every `interval_ms`.
///
/// Components that derive state from "now" re-render on each tick even when
/// their other inputs stay the same.
#[hook]
pub fn use_now(interval_ms: u32) -> DateTime<Utc> {
    let now = use_state(Utc::now);

    {
        let now = now.clone();
        use_effect_with(interval_ms, move |interval_ms| {
            let interval = Interval::new(*interval_ms, move || now.set(Utc::now()));
            move || drop(interval)
        });
    }

    *now
}
