use gloo::timers::callback::Interval;
use yew::prelude::*;

/// Re-render the calling component every `interval_ms`.
///
/// Used by the calendar so the "today" mark follows the clock across midnight
/// without any user interaction.
#[hook]
pub fn use_clock_tick(interval_ms: u32) {
    let force_update = use_force_update();

    use_effect_with(interval_ms, move |interval_ms| {
        let interval = Interval::new(*interval_ms, move || force_update.force_update());
        move || drop(interval)
    });
}
