//! TaskMaster Frontend App
//!
//! Main application component: toolbar, task table and the two modals.

use leptos::prelude::*;
use taskmaster_api::HttpTaskApi;

use crate::components::{DeleteModal, TaskModal, TaskTable, Toolbar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::controller::TaskListController;
use crate::shell::BrowserShell;
use crate::state::ViewState;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_window();

    // State
    let (state, set_state) = signal(ViewState::default());

    let controller = TaskListController::new(
        HttpTaskApi::new(&config.api_base),
        BrowserShell::new(set_state),
        &config,
    );

    // Provide context to all children
    let ctx = AppContext::new(state, controller);
    provide_context(ctx);

    // Initial load
    ctx.spawn(|controller| async move { controller.load_tasks().await });
    tracing::info!("TaskMaster initialized");

    view! {
        <div class="container py-4">
            <h1 class="mb-4">"TaskMaster"</h1>

            <Toolbar />

            <TaskTable />

            <p class="text-muted small">
                {move || ctx.view.table.with(|t| t.summary())}
            </p>

            <TaskModal />
            <DeleteModal />
        </div>
    }
}
