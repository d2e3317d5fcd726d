use super::{input_value, submit_handler};
use crate::hooks::use_notes::use_notes;
use crate::services::date_utils::format_timestamp;
use yew::prelude::*;

#[function_component(Notes)]
pub fn notes() -> Html {
    let notes = use_notes();
    let state = &notes.state;
    let actions = &notes.actions;

    let on_input = {
        let set_draft = actions.set_draft.clone();
        Callback::from(move |e: InputEvent| set_draft.emit(input_value(&e)))
    };

    html! {
        <section class="card notes">
            <h2>{"📝 Notes"}</h2>
            <form class="inline-form" onsubmit={submit_handler(actions.add_note.clone())}>
                <input
                    type="text"
                    placeholder="Write a note..."
                    value={state.draft.clone()}
                    oninput={on_input}
                />
                <button type="submit" class="btn btn-primary">{"Add"}</button>
            </form>

            {if state.notes.is_empty() {
                html! { <p class="empty-state">{"No notes yet."}</p> }
            } else {
                html! {
                    <ul class="note-list">
                        {for state.notes.iter().map(|note| {
                            let on_remove = {
                                let remove_note = actions.remove_note.clone();
                                let id = note.id.clone();
                                Callback::from(move |_: MouseEvent| remove_note.emit(id.clone()))
                            };
                            html! {
                                <li key={note.id.clone()} class="note-item">
                                    <p class="note-text">{&note.text}</p>
                                    <div class="note-footer">
                                        <span class="note-date">{format_timestamp(note.created_at)}</span>
                                        <button type="button" class="delete-button" onclick={on_remove}>{"Delete"}</button>
                                    </div>
                                </li>
                            }
                        })}
                    </ul>
                }
            }}
        </section>
    }
}
