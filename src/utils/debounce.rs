use gloo_timers::callback::Timeout;
use std::cell::RefCell;

/// Delays execution until a period of inactivity has passed.
///
/// Every `schedule` call cancels the pending callback and starts a new timer, so a
/// burst of calls (for example keystrokes) runs only the last callback once the
/// burst ends. Dropping the `Debouncer` cancels whatever is still pending.
///
/// # Example
///
/// ```rust,ignore
/// let debouncer = use_memo((), |_| Debouncer::default());
/// let oninput = Callback::from(move |value: String| {
///     debouncer.schedule(400, move || commit(value));
/// });
/// ```
#[derive(Default)]
pub struct Debouncer {
    pending: RefCell<Option<Timeout>>,
}

impl Debouncer {
    /// Schedules `callback` after `delay_ms`, replacing any pending callback.
    pub fn schedule<F>(&self, delay_ms: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        // Dropping the previous timeout cancels it
        *self.pending.borrow_mut() = Some(Timeout::new(delay_ms, callback));
    }

    /// Cancels the pending callback, if any.
    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}
