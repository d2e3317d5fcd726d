use super::month_grid::MonthGrid;
use super::reminder_panel::ReminderPanel;
use crate::hooks::use_reminders::use_reminders;
use yew::prelude::*;

#[function_component(YearCalendar)]
pub fn year_calendar() -> Html {
    let reminders = use_reminders();
    let state = &reminders.state;
    let actions = &reminders.actions;

    html! {
        <section class="card year-calendar">
            <h2>{format!("📅 {}", state.calendar.year)}</h2>
            <div class="year-grid">
                {for state.calendar.months.iter().map(|month| html! {
                    <MonthGrid
                        key={month.month}
                        month={month.clone()}
                        on_select={actions.select_date.clone()}
                    />
                })}
            </div>
            <ReminderPanel
                selected_date={state.selected_date}
                reminders={state.selected_reminders.clone()}
                title={state.title.clone()}
                time={state.time.clone()}
                on_title_change={actions.set_title.clone()}
                on_time_change={actions.set_time.clone()}
                on_submit={actions.add_reminder.clone()}
                on_remove={actions.remove_reminder.clone()}
            />
        </section>
    }
}
