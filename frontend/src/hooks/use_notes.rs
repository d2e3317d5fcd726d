use super::use_planner_host::use_planner_host;
use planner_backend::NoteService;
use shared::Note;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct NotesState {
    pub notes: Vec<Note>,
    pub draft: String,
}

#[derive(Clone, PartialEq)]
pub struct UseNotesActions {
    pub set_draft: Callback<String>,
    pub add_note: Callback<()>,
    pub remove_note: Callback<String>,
}

pub struct UseNotesResult {
    pub state: NotesState,
    pub actions: UseNotesActions,
}

#[hook]
pub fn use_notes() -> UseNotesResult {
    let host = use_planner_host();
    let service = use_mut_ref(move || NoteService::load(host.store.clone(), host.clock.clone(), &host.config));
    let draft = use_state(String::new);
    let force_update = use_force_update();

    let set_draft = {
        let draft = draft.clone();
        Callback::from(move |text: String| draft.set(text))
    };

    let add_note = {
        let service = service.clone();
        let draft = draft.clone();
        let force_update = force_update.clone();
        Callback::from(move |_: ()| {
            if service.borrow_mut().add_note(&draft).is_ok() {
                draft.set(String::new());
                force_update.force_update();
            }
        })
    };

    let remove_note = {
        let service = service.clone();
        Callback::from(move |id: String| {
            if service.borrow_mut().remove_note(&id) {
                force_update.force_update();
            }
        })
    };

    let state = NotesState {
        notes: service.borrow().notes().to_vec(),
        draft: (*draft).clone(),
    };

    UseNotesResult {
        state,
        actions: UseNotesActions { set_draft, add_note, remove_note },
    }
}
