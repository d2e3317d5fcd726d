use super::{input_value, submit_handler};
use crate::services::date_utils::format_selected_date;
use chrono::NaiveDate;
use shared::Reminder;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReminderPanelProps {
    pub selected_date: NaiveDate,
    pub reminders: Vec<Reminder>,
    pub title: String,
    pub time: String,
    pub on_title_change: Callback<String>,
    pub on_time_change: Callback<String>,
    pub on_submit: Callback<()>,
    pub on_remove: Callback<String>,
}

#[function_component(ReminderPanel)]
pub fn reminder_panel(props: &ReminderPanelProps) -> Html {
    let on_title_input = {
        let on_title_change = props.on_title_change.clone();
        Callback::from(move |e: InputEvent| on_title_change.emit(input_value(&e)))
    };
    let on_time_input = {
        let on_time_change = props.on_time_change.clone();
        Callback::from(move |e: InputEvent| on_time_change.emit(input_value(&e)))
    };

    html! {
        <section class="reminder-panel">
            <h3>{format!("📌 {}", format_selected_date(props.selected_date))}</h3>

            <form class="reminder-form" onsubmit={submit_handler(props.on_submit.clone())}>
                <input
                    type="text"
                    placeholder="Reminder title"
                    value={props.title.clone()}
                    oninput={on_title_input}
                />
                <input
                    type="time"
                    value={props.time.clone()}
                    oninput={on_time_input}
                />
                <button type="submit" class="btn btn-primary">{"Add"}</button>
            </form>

            {if props.reminders.is_empty() {
                html! { <p class="empty-state">{"No reminders for this date yet."}</p> }
            } else {
                html! {
                    <ul class="reminder-list">
                        {for props.reminders.iter().map(|reminder| {
                            let on_remove = {
                                let on_remove = props.on_remove.clone();
                                let id = reminder.id.clone();
                                Callback::from(move |_: MouseEvent| on_remove.emit(id.clone()))
                            };
                            html! {
                                <li key={reminder.id.clone()} class="reminder-item">
                                    <span class="reminder-title">{&reminder.title}</span>
                                    {if let Some(time) = reminder.time.as_ref() {
                                        html! { <span class="reminder-time">{format!("⏰ {}", time)}</span> }
                                    } else { html! {} }}
                                    <button type="button" class="delete-button" onclick={on_remove}>{"Delete"}</button>
                                </li>
                            }
                        })}
                    </ul>
                }
            }}
        </section>
    }
}
