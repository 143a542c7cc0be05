//! View State
//!
//! Plain data describing what the page shows. The controller mutates it
//! and hands snapshots to the shell for rendering.

use std::fmt;

use taskmaster_api::{Priority, Task, TaskDraft, TaskFilter, TaskId};

use crate::render::{self, TaskRow};

/// Task modal lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskModal {
    #[default]
    Closed,
    Creating,
    Editing,
}

impl TaskModal {
    pub fn is_open(&self) -> bool {
        !matches!(self, TaskModal::Closed)
    }

    pub fn heading(&self) -> &'static str {
        match self {
            TaskModal::Editing => "Edit Task",
            _ => "Add New Task",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            TaskModal::Editing => "Update Task",
            _ => "Add Task",
        }
    }

    /// The completed checkbox only exists while editing
    pub fn shows_completed_field(&self) -> bool {
        matches!(self, TaskModal::Editing)
    }
}

/// Contents of the task table body
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TableView {
    #[default]
    Loading,
    /// Rendered as the single placeholder row
    Empty,
    Rows(Vec<TaskRow>),
}

impl TableView {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        if tasks.is_empty() {
            TableView::Empty
        } else {
            TableView::Rows(tasks.iter().map(render::task_row).collect())
        }
    }

    /// Number of `<tr>` elements in the table body
    pub fn row_count(&self) -> usize {
        match self {
            TableView::Rows(rows) => rows.len(),
            TableView::Loading | TableView::Empty => 1,
        }
    }

    /// Task count line under the table; blank while loading
    pub fn summary(&self) -> String {
        match self {
            TableView::Loading => String::new(),
            TableView::Empty => "0 tasks".to_string(),
            TableView::Rows(rows) if rows.len() == 1 => "1 task".to_string(),
            TableView::Rows(rows) => format!("{} tasks", rows.len()),
        }
    }
}

/// Local validation failure, raised before any request is sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    TitleRequired,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::TitleRequired => write!(f, "Title is required"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Create/edit form fields
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub completed: bool,
}

impl TaskForm {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            priority: task.priority.clone(),
            completed: task.completed,
        }
    }

    /// Trimmed request body; an empty description becomes `null`
    pub fn to_draft(&self) -> Result<TaskDraft, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::TitleRequired);
        }
        let description = self.description.trim();
        Ok(TaskDraft {
            title: title.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            priority: self.priority.clone(),
            completed: self.completed,
        })
    }
}

/// Everything the page renders, one instance per session
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub filter: TaskFilter,
    pub search_query: String,
    /// Task loaded into the edit modal
    pub editing_task_id: Option<TaskId>,
    pub task_modal: TaskModal,
    pub delete_modal_open: bool,
    /// Task awaiting delete confirmation, independent of any edit
    pub deleting_task_id: Option<TaskId>,
    pub form: TaskForm,
    pub table: TableView,
}

impl ViewState {
    pub fn show_tasks(&mut self, tasks: &[Task]) {
        self.table = TableView::from_tasks(tasks);
    }

    pub fn show_empty(&mut self) {
        self.table = TableView::Empty;
    }

    pub fn begin_create(&mut self) {
        self.reset_task_form();
        self.task_modal = TaskModal::Creating;
    }

    pub fn begin_edit(&mut self, task: &Task) {
        self.form = TaskForm::from_task(task);
        self.editing_task_id = Some(task.id);
        self.task_modal = TaskModal::Editing;
    }

    /// Target of a save: `Some(id)` updates, `None` creates
    pub fn editing_id(&self) -> Option<TaskId> {
        match self.task_modal {
            TaskModal::Editing => self.editing_task_id,
            _ => None,
        }
    }

    /// Back to the "create" defaults with the modal closed
    pub fn reset_task_form(&mut self) {
        self.form = TaskForm::default();
        self.task_modal = TaskModal::Closed;
        self.editing_task_id = None;
    }

    pub fn begin_delete(&mut self, id: TaskId) {
        self.deleting_task_id = Some(id);
        self.delete_modal_open = true;
    }

    pub fn end_delete(&mut self) {
        self.delete_modal_open = false;
        self.deleting_task_id = None;
    }

    /// Pending delete target, only while the confirmation is showing
    pub fn delete_target(&self) -> Option<TaskId> {
        if self.delete_modal_open {
            self.deleting_task_id
        } else {
            None
        }
    }
}
