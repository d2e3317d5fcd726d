use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{"🌸 Pastel Planner"}</h1>
                <p class="header-subtitle">{"Calendar, notes, money, photos and to-dos in one place"}</p>
            </div>
        </header>
    }
}
