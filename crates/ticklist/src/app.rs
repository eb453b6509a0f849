//! Single-writer runtime tying the update engine to a storage backend.

use crate::config::Config;
use crate::model::Model;
use crate::storage::{self, Storage};
use crate::update::{Effect, Event, update};
use crate::view::{View, view};

pub struct App<S> {
    config: Config,
    storage: S,
    model: Model,
}

impl<S: Storage> App<S> {
    /// Load the persisted list and build the startup model.
    ///
    /// Unreadable storage and malformed data both start with an empty list.
    pub fn start(config: Config, storage: S) -> Self {
        let raw = storage.load(&config.storage_key).unwrap_or_else(|error| {
            log::debug!("Starting with an empty list: {error}");
            None
        });
        let stored = storage::decode(raw.as_deref());
        log::debug!("Loaded {} todo(s) from `{}`", stored.len(), config.storage_key);
        Self {
            model: Model::new(stored),
            config,
            storage,
        }
    }

    /// Apply one event and perform its effect before returning.
    ///
    /// A failed write is logged and dropped; the in-memory list stays as updated.
    pub fn dispatch(&mut self, event: Event) -> Option<Effect> {
        let event_name = event.name();
        let (model, effect) = update(std::mem::take(&mut self.model), event, &self.config);
        self.model = model;
        if let Some(Effect::Persist(records)) = &effect {
            let json = storage::encode_records(records);
            if let Err(error) = self.storage.save(&self.config.storage_key, &json) {
                log::warn!("Failed to store todos after {event_name}: {error}");
            }
        }
        effect
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn view(&self) -> View {
        view(&self.model, &self.config)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{CLOCK_PLACEHOLDER, TimerKind, VirtualClock};
    use crate::model::{Timestamp, Timezone};
    use crate::storage::{MemoryStorage, decode};

    const KEY: &str = "todos";

    fn app_with(raw: &str) -> App<MemoryStorage> {
        App::start(Config::default(), MemoryStorage::with_entry(KEY, raw))
    }

    fn persisted(app: &App<MemoryStorage>) -> serde_json::Value {
        serde_json::from_str(app.storage().get(KEY).unwrap()).unwrap()
    }

    #[test]
    fn starts_from_persisted_list() {
        let app = app_with(r#"[{"title":"walk dog","date":2000},{"title":"buy milk","date":1000}]"#);
        let titles: Vec<&str> = app.model().todos.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["walk dog", "buy milk"]);
        assert_eq!(app.storage().writes(), 0);
    }

    #[test]
    fn starts_empty_on_garbage_or_missing_key() {
        assert!(app_with("{}").model().todos.is_empty());
        assert!(app_with("null").model().todos.is_empty());
        let app = App::start(Config::default(), MemoryStorage::new());
        assert!(app.model().todos.is_empty());
    }

    #[test]
    fn storage_follows_every_mutation() {
        let mut app = App::start(Config::default(), MemoryStorage::new());
        app.dispatch(Event::Tick(Timestamp(1000)));
        app.dispatch(Event::Input("buy milk".into()));
        assert_eq!(app.storage().writes(), 0);

        app.dispatch(Event::Add("buy milk".into()));
        app.dispatch(Event::Tick(Timestamp(2000)));
        app.dispatch(Event::Add("walk dog".into()));
        assert_eq!(app.storage().writes(), 2);
        assert_eq!(
            persisted(&app),
            serde_json::json!([
                {"title": "walk dog", "date": 2000},
                {"title": "buy milk", "date": 1000}
            ])
        );

        app.dispatch(Event::Delete(Timestamp(1000)));
        assert_eq!(app.storage().writes(), 3);
        assert_eq!(persisted(&app), serde_json::json!([{"title": "walk dog", "date": 2000}]));
        assert_eq!(decode(app.storage().get(KEY)), app.model().stored_todos());
    }

    #[test]
    fn failed_write_keeps_memory_state() {
        let mut app = App::start(Config::default(), MemoryStorage::new());
        app.storage_mut().fail_writes(true);
        let effect = app.dispatch(Event::Add("offline".into()));
        assert!(effect.is_some());
        assert_eq!(app.model().todos.len(), 1);
        assert_eq!(app.storage().get(KEY), None);

        app.storage_mut().fail_writes(false);
        app.dispatch(Event::Add("online".into()));
        assert_eq!(persisted(&app).as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn reload_restores_the_same_list() {
        let mut app = App::start(Config::default(), MemoryStorage::new());
        for (time, title) in [(10, "a"), (20, "b"), (30, "c")] {
            app.dispatch(Event::Tick(Timestamp(time)));
            app.dispatch(Event::Add(title.into()));
        }
        let raw = app.storage().get(KEY).unwrap().to_owned();
        let reloaded = app_with(&raw);
        assert_eq!(reloaded.model().stored_todos(), app.model().stored_todos());
    }

    #[test]
    fn virtual_session_drives_clock_and_list() {
        let mut app = App::start(Config::default(), MemoryStorage::new());
        let mut clock = VirtualClock::new(Timestamp(3_600_000));
        clock.every(TimerKind::Tick, app.config().tick_interval_ms);
        clock.once(TimerKind::TimezoneLookup, 1500);

        assert_eq!(app.view().clock, CLOCK_PLACEHOLDER);

        let mut pump = |app: &mut App<MemoryStorage>, ms: u32| {
            for fired in clock.advance_by(ms) {
                let event = match fired.kind {
                    TimerKind::Tick => Event::Tick(fired.at),
                    TimerKind::TimezoneLookup => Event::AdjustTimezone(Timezone::UTC),
                };
                app.dispatch(event);
            }
        };

        pump(&mut app, 1000);
        // Ticked, but the timezone is still unknown.
        assert_eq!(app.view().clock, CLOCK_PLACEHOLDER);

        pump(&mut app, 1000);
        assert_eq!(app.view().clock, "01:00:02");

        app.dispatch(Event::Add("stretch".into()));
        assert_eq!(app.model().todos[0].created_at, Timestamp(3_602_000));
        assert_eq!(app.storage().writes(), 1);
    }
}
