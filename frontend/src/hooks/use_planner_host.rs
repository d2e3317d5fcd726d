use crate::services::host::PlannerHost;
use yew::prelude::*;

/// The host provided by `App`; a component mounted on its own builds a default one.
#[hook]
pub fn use_planner_host() -> PlannerHost {
    use_context::<PlannerHost>().unwrap_or_default()
}
