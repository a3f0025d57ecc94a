//! UI Components
//!
//! Reusable Leptos components.

mod add_todo;
mod delete_confirm_button;
mod edit_todo;
mod empty_state;
mod filter_bar;
mod pending_todos;
mod priority_selector;
mod todo_actions_menu;
mod todo_form;
mod todo_row;
mod todos_table;

pub use add_todo::AddTodo;
pub use delete_confirm_button::DeleteConfirmButton;
pub use edit_todo::EditTodo;
pub use empty_state::TodosEmptyState;
pub use filter_bar::FilterBar;
pub use pending_todos::PendingTodos;
pub use priority_selector::PrioritySelector;
pub use todo_actions_menu::TodoActionsMenu;
pub use todo_row::TodoRow;
pub use todos_table::TodosTable;
