use super::{input_value, submit_handler};
use crate::hooks::use_checklist::use_checklist;
use yew::prelude::*;

#[function_component(TodoList)]
pub fn todo_list() -> Html {
    let checklist = use_checklist();
    let state = &checklist.state;
    let actions = &checklist.actions;

    let on_input = {
        let set_draft = actions.set_draft.clone();
        Callback::from(move |e: InputEvent| set_draft.emit(input_value(&e)))
    };

    html! {
        <section class="card todo-list">
            <h2>{"✅ To-Do"}</h2>
            <form class="inline-form" onsubmit={submit_handler(actions.add_task.clone())}>
                <input
                    type="text"
                    placeholder="Add a task..."
                    value={state.draft.clone()}
                    oninput={on_input}
                />
                <button type="submit" class="btn btn-primary">{"Add"}</button>
            </form>

            {if state.tasks.is_empty() {
                html! { <p class="empty-state">{"No tasks yet."}</p> }
            } else {
                html! {
                    <>
                        <p class="todo-remaining">{format!("{} of {} left", state.remaining, state.tasks.len())}</p>
                        <ul class="task-list">
                            {for state.tasks.iter().map(|task| {
                                let on_toggle = {
                                    let toggle_task = actions.toggle_task.clone();
                                    let id = task.id.clone();
                                    Callback::from(move |_: Event| toggle_task.emit(id.clone()))
                                };
                                let on_remove = {
                                    let remove_task = actions.remove_task.clone();
                                    let id = task.id.clone();
                                    Callback::from(move |_: MouseEvent| remove_task.emit(id.clone()))
                                };
                                html! {
                                    <li key={task.id.clone()} class={classes!("task-item", task.done.then_some("done"))}>
                                        <label>
                                            <input type="checkbox" checked={task.done} onchange={on_toggle} />
                                            <span class="task-text">{&task.text}</span>
                                        </label>
                                        <button type="button" class="delete-button" onclick={on_remove}>{"Delete"}</button>
                                    </li>
                                }
                            })}
                        </ul>
                    </>
                }
            }}
        </section>
    }
}
