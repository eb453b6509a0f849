//! The update engine.
//!
//! [`update`] is a total function from the current model and one event to the
//! next model plus an optional storage write. It never fails and never
//! touches storage itself; [`crate::App`] performs the returned [`Effect`].

use crate::config::{AddPolicy, Config};
use crate::model::{Model, Timestamp, Timezone, Todo, TodoId};
use crate::storage::StoredTodo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Periodic clock tick carrying the current time.
    Tick(Timestamp),
    /// The timezone lookup resolved.
    AdjustTimezone(Timezone),
    /// Submit a new item.
    Add(String),
    /// Remove every item created at this timestamp.
    Delete(Timestamp),
    /// Remove the item with this id.
    Remove(TodoId),
    /// The input buffer changed.
    Input(String),
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tick(_) => "Tick",
            Self::AdjustTimezone(_) => "AdjustTimezone",
            Self::Add(_) => "Add",
            Self::Delete(_) => "Delete",
            Self::Remove(_) => "Remove",
            Self::Input(_) => "Input",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Overwrite the persisted list with these records.
    Persist(Vec<StoredTodo>),
}

pub fn update(mut model: Model, event: Event, config: &Config) -> (Model, Option<Effect>) {
    match event {
        Event::Tick(time) => {
            model.current_time = Some(time);
            (model, None)
        }
        Event::AdjustTimezone(timezone) => {
            model.timezone = Some(timezone);
            (model, None)
        }
        Event::Input(text) => {
            model.user_input = text;
            (model, None)
        }
        Event::Add(text) => {
            let title = match config.add_policy {
                AddPolicy::AsGiven => text,
                AddPolicy::TrimNonEmpty => {
                    let trimmed = text.trim();
                    if trimmed.is_empty() {
                        model.user_input.clear();
                        return (model, None);
                    }
                    trimmed.to_owned()
                }
            };
            let todo = Todo {
                id: model.allocate_id(),
                title,
                created_at: model.current_time.unwrap_or(Timestamp::EPOCH),
            };
            model.todos.insert(0, todo);
            model.user_input.clear();
            persist(model)
        }
        Event::Delete(created_at) => {
            model.todos.retain(|todo| todo.created_at != created_at);
            persist(model)
        }
        Event::Remove(id) => {
            model.todos.retain(|todo| todo.id != id);
            persist(model)
        }
    }
}

fn persist(model: Model) -> (Model, Option<Effect>) {
    let effect = Effect::Persist(model.stored_todos());
    (model, Some(effect))
}
