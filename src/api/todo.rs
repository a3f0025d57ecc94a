//! Todo Endpoints
//!
//! Bindings for `/api/v1/todos`.

use uuid::Uuid;

use super::{decode, ApiClient, ApiError};
use crate::models::{Message, Todo, TodoCreate, TodoPriority, TodoStatus, TodoUpdate, TodosPage};

const TODOS_PATH: &str = "/api/v1/todos/";

// ========================
// Argument Structs
// ========================

/// Query for one window of the todo collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadTodosArgs {
    pub skip: usize,
    pub limit: usize,
    pub status: Option<TodoStatus>,
    pub priority: Option<TodoPriority>,
}

impl ReadTodosArgs {
    /// Query string without the leading `?`
    pub fn to_query_string(&self) -> String {
        let mut query = format!("skip={}&limit={}", self.skip, self.limit);
        if let Some(status) = self.status {
            query.push_str("&status=");
            query.push_str(status.as_str());
        }
        if let Some(priority) = self.priority {
            query.push_str("&priority=");
            query.push_str(priority.as_str());
        }
        query
    }
}

// ========================
// Listing
// ========================

/// Source of paged todo listings
///
/// The list view only depends on this, so it can be driven by a fake in tests.
#[allow(async_fn_in_trait)]
pub trait TodoSource {
    async fn read_todos(&self, args: &ReadTodosArgs) -> Result<TodosPage, ApiError>;
}

impl TodoSource for ApiClient {
    async fn read_todos(&self, args: &ReadTodosArgs) -> Result<TodosPage, ApiError> {
        let url = format!("{}?{}", self.url(TODOS_PATH), args.to_query_string());
        log::debug!("[API] GET {}", url);
        let response = self.http.get(url).send().await?;
        decode(response).await
    }
}

// ========================
// Mutations
// ========================

impl ApiClient {
    pub async fn create_todo(&self, todo: &TodoCreate) -> Result<Todo, ApiError> {
        log::debug!("[API] create todo {:?}", todo.title);
        let response = self.http.post(self.url(TODOS_PATH)).json(todo).send().await?;
        decode(response).await
    }

    pub async fn update_todo(&self, id: Uuid, update: &TodoUpdate) -> Result<Todo, ApiError> {
        log::debug!("[API] update todo {}", id);
        let response = self.http.put(self.todo_url(id)).json(update).send().await?;
        decode(response).await
    }

    pub async fn delete_todo(&self, id: Uuid) -> Result<Message, ApiError> {
        log::debug!("[API] delete todo {}", id);
        let response = self.http.delete(self.todo_url(id)).send().await?;
        decode(response).await
    }

    /// Flip between completed and pending
    pub async fn toggle_todo_status(&self, id: Uuid) -> Result<Todo, ApiError> {
        log::debug!("[API] toggle status of todo {}", id);
        let url = format!("{}/toggle-status", self.todo_url(id));
        let response = self.http.patch(url).send().await?;
        decode(response).await
    }

    fn todo_url(&self, id: Uuid) -> String {
        format!("{}{}", self.url(TODOS_PATH), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_without_filters() {
        let args = ReadTodosArgs { skip: 10, limit: 5, status: None, priority: None };
        assert_eq!(args.to_query_string(), "skip=10&limit=5");
    }

    #[test]
    fn test_query_string_with_filters() {
        let args = ReadTodosArgs {
            skip: 0,
            limit: 5,
            status: Some(TodoStatus::InProgress),
            priority: Some(TodoPriority::High),
        };
        assert_eq!(args.to_query_string(), "skip=0&limit=5&status=in_progress&priority=high");
    }

    #[test]
    fn test_todo_urls() {
        let client = ApiClient::new("http://localhost:8000");
        let id = Uuid::nil();
        assert_eq!(
            client.todo_url(id),
            "http://localhost:8000/api/v1/todos/00000000-0000-0000-0000-000000000000"
        );
    }
}
