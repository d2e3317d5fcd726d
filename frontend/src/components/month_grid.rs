use chrono::NaiveDate;
use planner_backend::CalendarService;
use shared::{CalendarDayType, CalendarMonth};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MonthGridProps {
    pub month: CalendarMonth,
    pub on_select: Callback<NaiveDate>,
}

#[function_component(MonthGrid)]
pub fn month_grid(props: &MonthGridProps) -> Html {
    let calendar = CalendarService::new();

    let cells = props.month.days.iter().map(|day| {
        match (day.day_type, day.date) {
            (CalendarDayType::MonthDay, Some(date)) => {
                let mut day_class = classes!("calendar-day");
                if day.is_today {
                    day_class.push("today");
                }
                if day.is_selected {
                    day_class.push("selected");
                }
                if day.has_reminders {
                    day_class.push("has-reminders");
                }
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(date))
                };
                html! {
                    <button type="button" class={day_class} {onclick}>
                        <span class="day-number">{day.day}</span>
                        {if day.has_reminders {
                            html! { <span class="reminder-dot"></span> }
                        } else { html! {} }}
                    </button>
                }
            }
            _ => html! { <div class="calendar-day empty"></div> },
        }
    });

    html! {
        <div class="month-grid">
            <h3 class="month-title">{calendar.month_name(props.month.month)}</h3>
            <div class="calendar-weekdays">
                {for calendar.weekday_labels().iter().map(|label| html! {
                    <div class="weekday">{*label}</div>
                })}
            </div>
            <div class="calendar-grid">
                {for cells}
            </div>
        </div>
    }
}
