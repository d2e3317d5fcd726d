use super::use_clock_tick::use_clock_tick;
use super::use_planner_host::use_planner_host;
use chrono::NaiveDate;
use planner_backend::ReminderService;
use shared::{Reminder, YearCalendar};
use yew::prelude::*;

/// How often the grid re-reads the clock for the "today" mark
const TODAY_REFRESH_MS: u32 = 60_000;

#[derive(Clone, PartialEq)]
pub struct RemindersState {
    pub calendar: YearCalendar,
    pub selected_date: NaiveDate,
    pub selected_reminders: Vec<Reminder>,
    pub title: String,
    pub time: String,
}

#[derive(Clone, PartialEq)]
pub struct UseRemindersActions {
    pub select_date: Callback<NaiveDate>,
    pub set_title: Callback<String>,
    pub set_time: Callback<String>,
    pub add_reminder: Callback<()>,
    pub remove_reminder: Callback<String>,
}

pub struct UseRemindersResult {
    pub state: RemindersState,
    pub actions: UseRemindersActions,
}

#[hook]
pub fn use_reminders() -> UseRemindersResult {
    let host = use_planner_host();
    let service = use_mut_ref(move || {
        ReminderService::load(
            host.store.clone(),
            host.clock.clone(),
            host.scheduler(),
            host.notifications(),
            &host.config,
        )
    });
    let title = use_state(String::new);
    let time = use_state(String::new);
    let force_update = use_force_update();
    use_clock_tick(TODAY_REFRESH_MS);

    let select_date = {
        let service = service.clone();
        let force_update = force_update.clone();
        Callback::from(move |date: NaiveDate| {
            service.borrow_mut().select_date(date);
            force_update.force_update();
        })
    };

    let set_title = {
        let title = title.clone();
        Callback::from(move |value: String| title.set(value))
    };
    let set_time = {
        let time = time.clone();
        Callback::from(move |value: String| time.set(value))
    };

    let add_reminder = {
        let service = service.clone();
        let title = title.clone();
        let time = time.clone();
        let force_update = force_update.clone();
        Callback::from(move |_: ()| {
            if service.borrow_mut().add_reminder(&title, &time).is_ok() {
                title.set(String::new());
                time.set(String::new());
                force_update.force_update();
            }
        })
    };

    let remove_reminder = {
        let service = service.clone();
        Callback::from(move |id: String| {
            if service.borrow_mut().remove_reminder(&id) {
                force_update.force_update();
            }
        })
    };

    let state = {
        let service = service.borrow();
        RemindersState {
            calendar: service.calendar(),
            selected_date: service.selected_date(),
            selected_reminders: service.selected_reminders().to_vec(),
            title: (*title).clone(),
            time: (*time).clone(),
        }
    };

    UseRemindersResult {
        state,
        actions: UseRemindersActions { select_date, set_title, set_time, add_reminder, remove_reminder },
    }
}
