//! UI Components
//!
//! Leptos components for the task page.

mod delete_modal;
mod task_modal;
mod task_row;
mod task_table;
mod toolbar;

pub use delete_modal::DeleteModal;
pub use task_modal::TaskModal;
pub use task_row::TaskRowView;
pub use task_table::TaskTable;
pub use toolbar::Toolbar;
