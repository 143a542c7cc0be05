//! Task List Controller
//!
//! View-model for the task page. Owns the view state, talks to the API
//! through [`TaskApi`] and pushes every new state to the [`Shell`].
//!
//! Each public `async fn` is one user action: a sequential flow with a single
//! error boundary that turns failures into a notification.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::time::Duration;

use taskmaster_api::{ExportFormat, TaskApi, TaskFilter, TaskId, TaskPatch};

use crate::config::AppConfig;
use crate::render::RowAction;
use crate::shell::{Notice, Shell};
use crate::state::{TableView, TaskForm, ViewState};


/// What a table refresh asks the server for
#[derive(Debug, Clone, PartialEq)]
enum ListQuery {
    Filtered(TaskFilter),
    Search(String),
}

impl ListQuery {
    fn action(&self) -> &'static str {
        match self {
            ListQuery::Filtered(_) => "load tasks",
            ListQuery::Search(_) => "search tasks",
        }
    }
}

pub struct TaskListController<A, S> {
    api: A,
    shell: S,
    search_debounce: Duration,
    state: RefCell<ViewState>,
    /// Bumped per keystroke; only the latest pending search fires
    search_generation: Cell<u64>,
    /// Bumped per list/search request; older responses are dropped
    list_generation: Cell<u64>,
}

impl<A: TaskApi, S: Shell> TaskListController<A, S> {
    pub fn new(api: A, shell: S, config: &AppConfig) -> Self {
        Self {
            api,
            shell,
            search_debounce: config.search_debounce,
            state: RefCell::new(ViewState::default()),
            search_generation: Cell::new(0),
            list_generation: Cell::new(0),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn shell(&self) -> &S {
        &self.shell
    }

    /// Snapshot of the current view state
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Mutate the state and render the result
    fn update<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        let (result, snapshot) = {
            let mut state = self.state.borrow_mut();
            let result = f(&mut state);
            (result, state.clone())
        };
        self.shell.render(&snapshot);
        result
    }

    fn fail(&self, action: &str, err: &dyn fmt::Display) {
        tracing::warn!(%action, error = %err, "action failed");
        self.shell
            .notify(Notice::error(format!("Failed to {}: {}", action, err)));
    }

    // ========================
    // Table
    // ========================

    /// Reload the table for the current filter
    pub async fn load_tasks(&self) {
        let filter = self.state.borrow().filter;
        self.refresh(ListQuery::Filtered(filter)).await;
    }

    pub async fn set_filter(&self, filter: TaskFilter) {
        self.update(|s| s.filter = filter);
        self.load_tasks().await;
    }

    /// Search for the text in the search box, or reload when it is blank
    pub async fn search_tasks(&self) {
        let query = self.state.borrow().search_query.trim().to_string();
        if query.is_empty() {
            self.load_tasks().await;
        } else {
            self.refresh(ListQuery::Search(query)).await;
        }
    }

    /// Keystroke in the search box; searches once typing pauses
    pub async fn on_search_input(&self, text: String) {
        self.state.borrow_mut().search_query = text;
        let generation = self.search_generation.get() + 1;
        self.search_generation.set(generation);

        self.shell.sleep(self.search_debounce).await;

        if self.search_generation.get() == generation {
            self.search_tasks().await;
        }
    }

    async fn refresh(&self, query: ListQuery) {
        let generation = self.list_generation.get() + 1;
        self.list_generation.set(generation);
        self.update(|s| s.table = TableView::Loading);

        let result = match &query {
            ListQuery::Filtered(filter) => self.api.list_tasks(*filter).await,
            ListQuery::Search(text) => self.api.search_tasks(text).await,
        };

        if self.list_generation.get() != generation {
            tracing::debug!(?query, "dropping superseded task list response");
            return;
        }

        match result {
            Ok(tasks) => {
                tracing::debug!(?query, count = tasks.len(), "rendering tasks");
                self.update(|s| s.show_tasks(&tasks));
            }
            Err(err) => {
                self.update(ViewState::show_empty);
                self.fail(query.action(), &err);
            }
        }
    }

    // ========================
    // Task modal
    // ========================

    /// "Add task" button
    pub fn open_create(&self) {
        self.update(ViewState::begin_create);
    }

    /// Fetch a task and open it in the edit modal
    pub async fn edit_task(&self, id: TaskId) {
        match self.api.get_task(id).await {
            Ok(task) => self.update(|s| s.begin_edit(&task)),
            Err(err) => self.fail("load task", &err),
        }
    }

    /// Apply an input event to the form
    pub fn edit_form(&self, f: impl FnOnce(&mut TaskForm)) {
        self.update(|s| f(&mut s.form));
    }

    /// Submit the form: update when editing, create otherwise
    pub async fn save_task(&self) {
        let (draft, target) = {
            let state = self.state.borrow();
            (state.form.to_draft(), state.editing_id())
        };
        let draft = match draft {
            Ok(draft) => draft,
            Err(err) => {
                self.shell.notify(Notice::error(err.to_string()));
                return;
            }
        };

        let result = match target {
            Some(id) => self.api.update_task(id, &TaskPatch::from(draft)).await,
            None => self.api.create_task(&draft).await,
        };

        match result {
            Ok(message) => {
                tracing::info!(?target, "task saved");
                self.reset_task_form();
                self.load_tasks().await;
                let message = if message.is_empty() {
                    "Task saved successfully".to_string()
                } else {
                    message
                };
                self.shell.notify(Notice::success(message));
            }
            Err(err) => self.fail("save task", &err),
        }
    }

    /// Task modal hidden, whatever the cause
    pub fn reset_task_form(&self) {
        self.update(ViewState::reset_task_form);
    }

    // ========================
    // Row actions
    // ========================

    pub async fn toggle_task(&self, id: TaskId, completed: bool) {
        match self.api.update_task(id, &TaskPatch::completion(completed)).await {
            Ok(_) => {
                tracing::info!(id, completed, "task toggled");
                self.load_tasks().await;
                self.shell.notify(Notice::success("Task updated successfully"));
            }
            Err(err) => self.fail("update task", &err),
        }
    }

    /// Ask for confirmation; nothing is sent yet
    pub fn delete_task(&self, id: TaskId) {
        self.update(|s| s.begin_delete(id));
    }

    pub fn dismiss_delete(&self) {
        self.update(ViewState::end_delete);
    }

    pub async fn confirm_delete(&self) {
        let Some(id) = self.state.borrow().delete_target() else {
            return;
        };

        match self.api.delete_task(id).await {
            Ok(_) => {
                tracing::info!(id, "task deleted");
                self.update(ViewState::end_delete);
                self.load_tasks().await;
                self.shell.notify(Notice::success("Task deleted successfully"));
            }
            Err(err) => self.fail("delete task", &err),
        }
    }

    pub async fn dispatch(&self, action: RowAction) {
        match action {
            RowAction::Edit(id) => self.edit_task(id).await,
            RowAction::Toggle { id, completed } => self.toggle_task(id, completed).await,
            RowAction::Delete(id) => self.delete_task(id),
        }
    }

    /// Open the export download; the browser handles the response
    pub fn export_tasks(&self, format: ExportFormat) {
        let url = self.api.export_url(format);
        tracing::info!(%format, %url, "exporting tasks");
        self.shell.open_in_new_tab(&url);
    }
}
