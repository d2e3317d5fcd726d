use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::finance_tracker::FinanceTracker;
use components::header::Header;
use components::notes::Notes;
use components::photo_gallery::PhotoGallery;
use components::todo_list::TodoList;
use components::year_calendar::YearCalendar;
use services::host::PlannerHost;

#[function_component(App)]
fn app() -> Html {
    let host = use_memo((), |_| PlannerHost::new());

    html! {
        <ContextProvider<PlannerHost> context={(*host).clone()}>
            <div class="app">
                <Header />
                <main class="main">
                    <div class="container planner-layout">
                        <div class="main-column">
                            <YearCalendar />
                            <FinanceTracker />
                            <PhotoGallery />
                        </div>
                        <aside class="side-column">
                            <Notes />
                            <TodoList />
                        </aside>
                    </div>
                </main>
            </div>
        </ContextProvider<PlannerHost>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    services::logging::init();
    log::info!("🌸 Starting pastel planner");
    services::notifications::request_permission_once();
    yew::Renderer::<App>::new().render();
}
