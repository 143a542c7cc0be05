//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskmaster_api::{HttpTaskApi, TaskFilter};

use crate::controller::TaskListController;
use crate::shell::BrowserShell;
use crate::state::{TableView, TaskModal, ViewState};

pub type AppController = TaskListController<HttpTaskApi, BrowserShell>;

/// Per-concern slices of the view state
///
/// Each memo only notifies when its own slice changes, so typing into the
/// task form does not rebuild the table.
#[derive(Clone, Copy)]
pub struct ViewMemos {
    pub table: Memo<TableView>,
    pub filter: Memo<TaskFilter>,
    pub task_modal: Memo<TaskModal>,
    pub delete_modal_open: Memo<bool>,
}

impl ViewMemos {
    pub fn new(state: ReadSignal<ViewState>) -> Self {
        Self {
            table: Memo::new(move |_| state.with(|s| s.table.clone())),
            filter: Memo::new(move |_| state.with(|s| s.filter)),
            task_modal: Memo::new(move |_| state.with(|s| s.task_modal)),
            delete_modal_open: Memo::new(move |_| state.with(|s| s.delete_modal_open)),
        }
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Latest rendered view state - read (form fields read it directly)
    pub state: ReadSignal<ViewState>,
    pub view: ViewMemos,
    /// The page's single controller (not `Send`, kept in local storage)
    controller: StoredValue<Rc<AppController>, LocalStorage>,
}

impl AppContext {
    pub fn new(state: ReadSignal<ViewState>, controller: AppController) -> Self {
        Self {
            state,
            view: ViewMemos::new(state),
            controller: StoredValue::new_local(Rc::new(controller)),
        }
    }

    /// Run a synchronous controller action
    pub fn with<R>(&self, f: impl FnOnce(&AppController) -> R) -> R {
        self.controller.with_value(|controller| f(controller.as_ref()))
    }

    /// Spawn an async controller flow on the UI thread
    pub fn spawn<F, Fut>(&self, f: F)
    where
        F: FnOnce(Rc<AppController>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        let controller = self.controller.get_value();
        spawn_local(f(controller));
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
