//! Reactive wrapper around [`ticklist::App`].
//!
//! The app sits in an `Rc<RefCell<_>>`; every event borrows it, runs to
//! completion and releases it before the view signal is updated, so events
//! never interleave.

use std::cell::RefCell;
use std::rc::Rc;

use ticklist::{App, Config, Event, ItemView, View};
use zoon::{Mutable, Signal, SignalExt, Task, Timer};

use crate::platform;
use crate::storage::LocalStorage;

#[derive(Clone)]
pub struct Runtime {
    app: Rc<RefCell<App<LocalStorage>>>,
    view: Mutable<Rc<View>>,
}

impl Runtime {
    pub fn start(config: Config) -> Self {
        let app = App::start(config, LocalStorage);
        let view = Mutable::new(Rc::new(app.view()));
        Self {
            app: Rc::new(RefCell::new(app)),
            view,
        }
    }

    pub fn dispatch(&self, event: Event) {
        let view = {
            let mut app = self.app.borrow_mut();
            app.dispatch(event);
            app.view()
        };
        self.view.set_neq(Rc::new(view));
    }

    /// Submit the current input buffer as a new item.
    pub fn submit(&self) {
        let event = self.view.lock_ref().input.submit_event();
        self.dispatch(event);
    }

    /// Dispatch `Tick(now)` every tick interval for the rest of the page session.
    pub fn start_ticker(&self) {
        let this = self.clone();
        let interval_ms = self.app.borrow().config().tick_interval_ms;
        Task::start(async move {
            loop {
                Timer::sleep(interval_ms).await;
                this.dispatch(Event::Tick(platform::now()));
            }
        });
    }

    /// Look up the local timezone once and apply it whenever it resolves.
    pub fn resolve_timezone(&self) {
        let this = self.clone();
        Task::start(async move {
            let timezone = platform::local_timezone();
            log::debug!(
                "Resolved timezone {} (UTC{:+} min)",
                timezone.name.as_deref().unwrap_or("unknown"),
                timezone.offset_minutes
            );
            this.dispatch(Event::AdjustTimezone(timezone));
        });
    }

    pub fn placeholder(&self) -> String {
        self.view.lock_ref().input.placeholder.clone()
    }

    pub fn clock_signal(&self) -> impl Signal<Item = String> + use<> {
        self.view.signal_ref(|view| view.clock.clone()).dedupe_cloned()
    }

    pub fn input_text_signal(&self) -> impl Signal<Item = String> + use<> {
        self.view
            .signal_ref(|view| view.input.text.clone())
            .dedupe_cloned()
    }

    pub fn items_signal(&self) -> impl Signal<Item = Vec<ItemView>> + use<> {
        self.view.signal_ref(|view| view.items.clone()).dedupe_cloned()
    }
}
