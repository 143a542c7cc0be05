//! Row Rendering
//!
//! Pure mapping from a `Task` to the description of its table row.
//! All user-supplied text goes through [`escape_html`] here and nowhere else.

use taskmaster_api::{Priority, Task, TaskId};

/// Text shown in the single row of an empty table
pub const PLACEHOLDER_TEXT: &str = "No tasks found";

/// Number of table columns (id, title, description, priority, status, actions)
pub const COLUMN_COUNT: u32 = 6;

/// HTML that is safe to insert as inner HTML
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Markup(String);

impl Markup {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Escape markup-significant characters so `text` renders literally
pub fn escape_html(text: &str) -> Markup {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Markup(out)
}

/// Badge colour category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Danger,
    Warning,
    Success,
    Secondary,
}

impl Tone {
    pub fn badge_class(&self) -> &'static str {
        match self {
            Tone::Danger => "badge bg-danger",
            Tone::Warning => "badge bg-warning",
            Tone::Success => "badge bg-success",
            Tone::Secondary => "badge bg-secondary",
        }
    }
}

pub fn priority_tone(priority: &Priority) -> Tone {
    match priority {
        Priority::High => Tone::Danger,
        Priority::Medium => Tone::Warning,
        Priority::Low => Tone::Success,
        Priority::Other(_) => Tone::Secondary,
    }
}

/// Action button on a task row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit(TaskId),
    /// Set the task's completion to `completed`
    Toggle { id: TaskId, completed: bool },
    Delete(TaskId),
}

impl RowAction {
    pub fn task_id(&self) -> TaskId {
        match *self {
            RowAction::Edit(id) | RowAction::Delete(id) => id,
            RowAction::Toggle { id, .. } => id,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            RowAction::Edit(_) => "Edit",
            RowAction::Toggle { completed: true, .. } => "Mark as Completed",
            RowAction::Toggle { completed: false, .. } => "Mark as Pending",
            RowAction::Delete(_) => "Delete",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            RowAction::Edit(_) => "bi bi-pencil",
            RowAction::Toggle { completed: true, .. } => "bi bi-check",
            RowAction::Toggle { completed: false, .. } => "bi bi-arrow-counterclockwise",
            RowAction::Delete(_) => "bi bi-trash",
        }
    }

    pub fn button_class(&self) -> &'static str {
        match self {
            RowAction::Edit(_) => "btn btn-outline-primary",
            RowAction::Toggle { completed: true, .. } => "btn btn-outline-success",
            RowAction::Toggle { completed: false, .. } => "btn btn-outline-warning",
            RowAction::Delete(_) => "btn btn-outline-danger",
        }
    }
}

/// Everything needed to draw one task row
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub id: TaskId,
    pub row_class: &'static str,
    pub title: Markup,
    pub description: Markup,
    pub priority: Markup,
    pub priority_tone: Tone,
    pub status: &'static str,
    pub status_tone: Tone,
    /// Creation time for the id cell tooltip
    pub created: Option<String>,
    pub actions: [RowAction; 3],
}

pub fn task_row(task: &Task) -> TaskRow {
    let (row_class, status, status_tone) = if task.completed {
        ("task-completed", "Completed", Tone::Success)
    } else {
        ("task-pending", "Pending", Tone::Warning)
    };

    TaskRow {
        id: task.id,
        row_class,
        title: escape_html(&task.title),
        description: escape_html(task.description.as_deref().unwrap_or("")),
        priority: escape_html(task.priority.as_str()),
        priority_tone: priority_tone(&task.priority),
        status,
        status_tone,
        created: task
            .created_at
            .map(|at| format!("Created {}", at.format("%Y-%m-%d %H:%M"))),
        actions: [
            RowAction::Edit(task.id),
            RowAction::Toggle { id: task.id, completed: !task.completed },
            RowAction::Delete(task.id),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: TaskId, title: &str, completed: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: None,
            priority: Priority::Medium,
            completed,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script>"#).as_str(),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("Tom & Jerry's").as_str(), "Tom &amp; Jerry&#39;s");
        assert_eq!(escape_html("plain").as_str(), "plain");
    }

    #[test]
    fn test_row_escapes_user_text() {
        let mut task = make_task(1, "<b>bold</b>", false);
        task.description = Some("<img src=x onerror=alert(1)>".to_string());
        task.priority = Priority::Other("<i>".to_string());

        let row = task_row(&task);
        assert!(!row.title.as_str().contains('<'));
        assert_eq!(row.title.as_str(), "&lt;b&gt;bold&lt;/b&gt;");
        assert!(!row.description.as_str().contains('<'));
        assert_eq!(row.priority.as_str(), "&lt;i&gt;");
        assert_eq!(row.priority_tone, Tone::Secondary);
    }

    #[test]
    fn test_missing_description_renders_empty() {
        let row = task_row(&make_task(3, "t", false));
        assert_eq!(row.description.as_str(), "");
        assert_eq!(row.created, None);
    }

    #[test]
    fn test_priority_tones() {
        assert_eq!(priority_tone(&Priority::High), Tone::Danger);
        assert_eq!(priority_tone(&Priority::Medium), Tone::Warning);
        assert_eq!(priority_tone(&Priority::Low), Tone::Success);
        assert_eq!(Tone::Danger.badge_class(), "badge bg-danger");
    }

    #[test]
    fn test_pending_row_actions() {
        let row = task_row(&make_task(4, "t", false));
        assert_eq!(row.status, "Pending");
        assert_eq!(row.row_class, "task-pending");
        assert_eq!(
            row.actions,
            [
                RowAction::Edit(4),
                RowAction::Toggle { id: 4, completed: true },
                RowAction::Delete(4),
            ]
        );
        assert_eq!(row.actions[1].title(), "Mark as Completed");
        assert!(row.actions.iter().all(|a| a.task_id() == 4));
    }

    #[test]
    fn test_completed_row_toggles_back() {
        let row = task_row(&make_task(5, "t", true));
        assert_eq!(row.status, "Completed");
        assert_eq!(row.status_tone, Tone::Success);
        assert_eq!(row.actions[1], RowAction::Toggle { id: 5, completed: false });
        assert_eq!(row.actions[1].icon_class(), "bi bi-arrow-counterclockwise");
    }
}
