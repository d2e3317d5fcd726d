use super::use_planner_host::use_planner_host;
use planner_backend::ChecklistService;
use shared::Task;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct ChecklistState {
    pub tasks: Vec<Task>,
    pub remaining: usize,
    pub draft: String,
}

#[derive(Clone, PartialEq)]
pub struct UseChecklistActions {
    pub set_draft: Callback<String>,
    pub add_task: Callback<()>,
    pub toggle_task: Callback<String>,
    pub remove_task: Callback<String>,
}

pub struct UseChecklistResult {
    pub state: ChecklistState,
    pub actions: UseChecklistActions,
}

#[hook]
pub fn use_checklist() -> UseChecklistResult {
    let host = use_planner_host();
    let service = use_mut_ref(move || ChecklistService::load(host.store.clone(), host.clock.clone(), &host.config));
    let draft = use_state(String::new);
    let force_update = use_force_update();

    let set_draft = {
        let draft = draft.clone();
        Callback::from(move |text: String| draft.set(text))
    };

    let add_task = {
        let service = service.clone();
        let draft = draft.clone();
        let force_update = force_update.clone();
        Callback::from(move |_: ()| {
            if service.borrow_mut().add_task(&draft).is_ok() {
                draft.set(String::new());
                force_update.force_update();
            }
        })
    };

    let toggle_task = {
        let service = service.clone();
        let force_update = force_update.clone();
        Callback::from(move |id: String| {
            if service.borrow_mut().toggle_task(&id).is_some() {
                force_update.force_update();
            }
        })
    };

    let remove_task = {
        let service = service.clone();
        Callback::from(move |id: String| {
            if service.borrow_mut().remove_task(&id) {
                force_update.force_update();
            }
        })
    };

    let state = {
        let service = service.borrow();
        ChecklistState {
            tasks: service.tasks().to_vec(),
            remaining: service.remaining(),
            draft: (*draft).clone(),
        }
    };

    UseChecklistResult {
        state,
        actions: UseChecklistActions { set_draft, add_task, toggle_task, remove_task },
    }
}
