//! Pure projection of the model into a visual tree.
//!
//! The tree says what to show and which event each control emits; the
//! frontend decides how it looks.

use crate::clock::format_clock;
use crate::config::{Config, DeleteBy};
use crate::model::{Model, Timestamp, Todo, TodoId};
use crate::update::Event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// `HH:MM:SS` or the placeholder.
    pub clock: String,
    pub input: InputView,
    /// Newest first.
    pub items: Vec<ItemView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub text: String,
    pub placeholder: String,
}

impl InputView {
    /// Event emitted when the form is submitted.
    pub fn submit_event(&self) -> Event {
        Event::Add(self.text.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub id: TodoId,
    pub title: String,
    pub created_at: Timestamp,
    /// Event bound to the delete control, if one is shown.
    pub on_delete: Option<Event>,
}

pub fn view(model: &Model, config: &Config) -> View {
    View {
        clock: format_clock(model.current_time, model.timezone.as_ref()),
        input: InputView {
            text: model.user_input.clone(),
            placeholder: config.input_placeholder.clone(),
        },
        items: model
            .todos
            .iter()
            .map(|todo| item_view(todo, config))
            .collect(),
    }
}

fn item_view(todo: &Todo, config: &Config) -> ItemView {
    let on_delete = config.show_delete.then(|| match config.delete_by {
        DeleteBy::Id => Event::Remove(todo.id),
        DeleteBy::CreatedAt => Event::Delete(todo.created_at),
    });
    ItemView {
        id: todo.id,
        title: todo.title.clone(),
        created_at: todo.created_at,
        on_delete,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::CLOCK_PLACEHOLDER;
    use crate::model::Timezone;
    use crate::storage::StoredTodo;

    fn model() -> Model {
        Model::new(vec![
            StoredTodo { title: "walk dog".into(), date: 2000 },
            StoredTodo { title: "buy milk".into(), date: 1000 },
        ])
    }

    #[test]
    fn renders_placeholder_clock_and_items_newest_first() {
        let view = view(&model(), &Config::default());
        assert_eq!(view.clock, CLOCK_PLACEHOLDER);
        let titles: Vec<&str> = view.items.iter().map(|item| item.title.as_str()).collect();
        assert_eq!(titles, vec!["walk dog", "buy milk"]);
        assert_eq!(view.items[0].on_delete, Some(Event::Remove(TodoId(0))));
    }

    #[test]
    fn renders_resolved_clock_and_input() {
        let mut model = model();
        model.timezone = Some(Timezone::UTC);
        model.current_time = Some(Timestamp(45_296_000));
        model.user_input = "feed cat".into();

        let view = view(&model, &Config::default());
        assert_eq!(view.clock, "12:34:56");
        assert_eq!(view.input.text, "feed cat");
        assert_eq!(view.input.submit_event(), Event::Add("feed cat".into()));
    }

    #[test]
    fn delete_binding_follows_config() {
        let by_time = Config {
            delete_by: DeleteBy::CreatedAt,
            ..Config::default()
        };
        let view_by_time = view(&model(), &by_time);
        assert_eq!(view_by_time.items[1].on_delete, Some(Event::Delete(Timestamp(1000))));

        let hidden = Config {
            show_delete: false,
            ..Config::default()
        };
        assert!(view(&model(), &hidden).items.iter().all(|item| item.on_delete.is_none()));
    }
}
