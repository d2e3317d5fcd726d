pub mod finance_tracker;
pub mod header;
pub mod month_grid;
pub mod notes;
pub mod photo_gallery;
pub mod reminder_panel;
pub mod todo_list;
pub mod year_calendar;

use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Current text of the `<input>` that raised the event
pub(crate) fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

/// Form submit handler that stops the page reload and fires `on_submit`
pub(crate) fn submit_handler(on_submit: Callback<()>) -> Callback<SubmitEvent> {
    Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        on_submit.emit(());
    })
}
