//! Todo Form Fields
//!
//! Editable draft shared by the add and edit dialogs.

use leptos::prelude::*;

use crate::components::PrioritySelector;
use crate::format::{date_input_value, parse_date_input, status_label};
use crate::models::{Todo, TodoCreate, TodoPriority, TodoStatus, TodoUpdate};

pub const TITLE_MAX_CHARS: usize = 255;
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

/// Raw form input, validated on submit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
    pub priority: TodoPriority,
    pub status: TodoStatus,
    /// `YYYY-MM-DD` or empty
    pub due_date: String,
}

/// Validated draft fields
struct Checked {
    title: String,
    description: Option<String>,
    due_date: Option<chrono::NaiveDateTime>,
}

impl TodoDraft {
    pub fn from_todo(todo: &Todo) -> Self {
        Self {
            title: todo.title.clone(),
            description: todo.description.clone().unwrap_or_default(),
            priority: todo.priority,
            status: todo.status,
            due_date: date_input_value(todo.due_date),
        }
    }

    fn check(&self) -> Result<Checked, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required.".to_string());
        }
        if title.chars().count() > TITLE_MAX_CHARS {
            return Err(format!("Title can be at most {} characters.", TITLE_MAX_CHARS));
        }

        let description = self.description.trim();
        if description.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(format!("Description can be at most {} characters.", DESCRIPTION_MAX_CHARS));
        }

        Ok(Checked {
            title: title.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            due_date: parse_date_input(&self.due_date)?,
        })
    }

    pub fn to_create(&self) -> Result<TodoCreate, String> {
        let checked = self.check()?;
        Ok(TodoCreate {
            title: checked.title,
            description: checked.description,
            priority: self.priority,
            status: self.status,
            due_date: checked.due_date,
        })
    }

    /// Only the fields that differ from `original`
    pub fn to_update(&self, original: &Todo) -> Result<TodoUpdate, String> {
        let checked = self.check()?;
        let mut update = TodoUpdate::default();

        if checked.title != original.title {
            update.title = Some(checked.title);
        }
        if checked.description != original.description {
            update.description = Some(checked.description);
        }
        if self.priority != original.priority {
            update.priority = Some(self.priority);
        }
        if self.status != original.status {
            update.status = Some(self.status);
        }
        // compare at date precision, which is all the input carries
        if checked.due_date.map(|d| d.date()) != original.due_date.map(|d| d.date()) {
            update.due_date = Some(checked.due_date);
        }
        Ok(update)
    }
}

/// Form inputs bound to a draft
#[component]
pub fn TodoFormFields(draft: RwSignal<TodoDraft>) -> impl IntoView {
    view! {
        <div class="todo-form-fields">
            <label class="field">
                <span class="field-label">"Title"</span>
                <input
                    type="text"
                    required=true
                    maxlength=TITLE_MAX_CHARS.to_string()
                    placeholder="Title"
                    prop:value=move || draft.with(|d| d.title.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.title = value);
                    }
                />
            </label>

            <label class="field">
                <span class="field-label">"Description"</span>
                <textarea
                    maxlength=DESCRIPTION_MAX_CHARS.to_string()
                    placeholder="Description"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.description = value);
                    }
                />
            </label>

            <div class="field">
                <span class="field-label">"Priority"</span>
                <PrioritySelector
                    current=Signal::derive(move || draft.with(|d| d.priority))
                    on_change=move |priority| draft.update(|d| d.priority = priority)
                />
            </div>

            <label class="field">
                <span class="field-label">"Status"</span>
                <select
                    prop:value=move || draft.with(|d| d.status.as_str())
                    on:change=move |ev| {
                        if let Some(status) = TodoStatus::parse(&event_target_value(&ev)) {
                            draft.update(|d| d.status = status);
                        }
                    }
                >
                    {TodoStatus::ALL.iter().map(|status| view! {
                        <option value=status.as_str()>{status_label(*status)}</option>
                    }).collect_view()}
                </select>
            </label>

            <label class="field">
                <span class="field-label">"Due Date"</span>
                <input
                    type="date"
                    prop:value=move || draft.with(|d| d.due_date.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.due_date = value);
                    }
                />
            </label>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn sample_todo() -> Todo {
        Todo {
            id: Uuid::nil(),
            title: "Buy milk".to_string(),
            description: Some("Oat".to_string()),
            priority: TodoPriority::Low,
            status: TodoStatus::Pending,
            due_date: NaiveDate::from_ymd_opt(2025, 3, 1).and_then(|d| d.and_hms_opt(9, 30, 0)),
            created_at: None,
            updated_at: None,
            completed_at: None,
            owner_id: None,
        }
    }

    #[test]
    fn test_create_requires_title() {
        let draft = TodoDraft { title: "   ".into(), ..Default::default() };
        assert_eq!(draft.to_create(), Err("Title is required.".to_string()));
    }

    #[test]
    fn test_create_trims_and_drops_blank_description() {
        let draft = TodoDraft {
            title: "  Pay rent ".into(),
            description: "  ".into(),
            due_date: "2025-04-01".into(),
            ..Default::default()
        };
        let create = draft.to_create().unwrap();
        assert_eq!(create.title, "Pay rent");
        assert_eq!(create.description, None);
        assert_eq!(create.priority, TodoPriority::Medium);
        assert_eq!(create.status, TodoStatus::Pending);
        assert_eq!(create.due_date.unwrap().to_string(), "2025-04-01 00:00:00");
    }

    #[test]
    fn test_length_limits() {
        let draft = TodoDraft { title: "x".repeat(TITLE_MAX_CHARS + 1), ..Default::default() };
        assert!(draft.to_create().is_err());
        let draft = TodoDraft {
            title: "ok".into(),
            description: "y".repeat(DESCRIPTION_MAX_CHARS + 1),
            ..Default::default()
        };
        assert!(draft.to_create().is_err());
    }

    #[test]
    fn test_unchanged_draft_is_empty_update() {
        let todo = sample_todo();
        let update = TodoDraft::from_todo(&todo).to_update(&todo).unwrap();
        assert!(update.is_empty());
    }

    #[test]
    fn test_update_contains_only_changes() {
        let todo = sample_todo();
        let mut draft = TodoDraft::from_todo(&todo);
        draft.status = TodoStatus::Completed;
        draft.description.clear();
        draft.due_date.clear();

        let update = draft.to_update(&todo).unwrap();
        assert_eq!(update.title, None);
        assert_eq!(update.priority, None);
        assert_eq!(update.status, Some(TodoStatus::Completed));
        assert_eq!(update.description, Some(None));
        assert_eq!(update.due_date, Some(None));
    }
}
