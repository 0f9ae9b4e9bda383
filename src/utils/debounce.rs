use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Listens for window resizes and runs `callback` once resizing has been
/// quiet for `delay_ms`.
///
/// Each resize event replaces the pending [`Timeout`]; dropping a `Timeout`
/// cancels it, so only the last event of a burst fires. Returns `None` when
/// there is no window (e.g. outside a browser). Dropping the listener also
/// drops any pending timeout.
///
/// ```rust,ignore
/// use_effect_with(deps, move |_| {
///     let listener = debounced_resize_listener(move || redraw(), Config::RESIZE_DEBOUNCE_MS);
///     move || drop(listener)
/// });
/// ```
pub fn debounced_resize_listener<F>(callback: F, delay_ms: u32) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let window = web_sys::window()?;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    Some(EventListener::new(&window, "resize", move |_| {
        let callback = callback.clone();
        pending
            .borrow_mut()
            .replace(Timeout::new(delay_ms, move || callback()));
    }))
}
