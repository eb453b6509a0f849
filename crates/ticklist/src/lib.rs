//! Ticklist core.
//!
//! Everything here is platform independent: the browser frontend supplies a
//! [`Storage`] backend and feeds [`Event`]s into an [`App`], then renders the
//! [`View`] it produces.

pub mod app;
pub mod clock;
pub mod config;
pub mod model;
pub mod storage;
pub mod update;
pub mod view;

pub use app::App;
pub use config::{AddPolicy, Config, DeleteBy};
pub use model::{Model, Timestamp, Timezone, Todo, TodoId};
pub use storage::{MemoryStorage, Storage, StorageError, StoredTodo};
pub use update::{Effect, Event, update};
pub use view::{InputView, ItemView, View, view};
