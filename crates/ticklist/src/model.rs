//! Application state.

use std::fmt;

use crate::storage::StoredTodo;

/// Milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const EPOCH: Self = Self(0);

    pub fn as_millis(self) -> i64 {
        self.0
    }
}

/// Session-unique item identifier.
///
/// Ids are handed out in increasing order and are never persisted; a reload
/// renumbers the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "todo-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub created_at: Timestamp,
}

impl Todo {
    pub fn to_stored(&self) -> StoredTodo {
        StoredTodo {
            title: self.title.clone(),
            date: self.created_at.as_millis(),
        }
    }
}

/// A fixed UTC offset, optionally with its IANA name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timezone {
    pub name: Option<String>,
    /// Minutes east of UTC.
    pub offset_minutes: i32,
}

impl Timezone {
    pub const UTC: Self = Self {
        name: None,
        offset_minutes: 0,
    };

    pub fn new(name: Option<String>, offset_minutes: i32) -> Self {
        Self {
            name,
            offset_minutes,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    /// `None` until the timezone lookup resolves.
    pub timezone: Option<Timezone>,
    /// `None` until the first tick.
    pub current_time: Option<Timestamp>,
    /// Newest first.
    pub todos: Vec<Todo>,
    pub user_input: String,
    next_id: u64,
}

impl Model {
    /// Build the startup model from decoded records, keeping their order.
    pub fn new(stored: Vec<StoredTodo>) -> Self {
        let todos: Vec<Todo> = stored
            .into_iter()
            .zip(0..)
            .map(|(record, id)| Todo {
                id: TodoId(id),
                title: record.title,
                created_at: Timestamp(record.date),
            })
            .collect();
        Self {
            next_id: todos.len() as u64,
            todos,
            ..Self::default()
        }
    }

    pub(crate) fn allocate_id(&mut self) -> TodoId {
        let id = TodoId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn stored_todos(&self) -> Vec<StoredTodo> {
        self.todos.iter().map(Todo::to_stored).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loaded_items_get_distinct_ids_in_order() {
        let model = Model::new(vec![
            StoredTodo { title: "a".into(), date: 5 },
            StoredTodo { title: "b".into(), date: 5 },
        ]);
        assert_eq!(model.todos[0].id, TodoId(0));
        assert_eq!(model.todos[1].id, TodoId(1));
        assert_eq!(model.todos[1].created_at, Timestamp(5));
        assert!(model.timezone.is_none());
        assert!(model.current_time.is_none());
    }

    #[test]
    fn ids_keep_increasing_after_load() {
        let mut model = Model::new(vec![StoredTodo { title: "a".into(), date: 1 }]);
        assert_eq!(model.allocate_id(), TodoId(1));
        assert_eq!(model.allocate_id(), TodoId(2));
    }
}
