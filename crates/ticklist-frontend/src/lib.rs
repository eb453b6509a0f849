//! Browser frontend for Ticklist, built on MoonZoon.

use zoon::start_app;

pub mod logging;
pub mod platform;
pub mod render;
pub mod runtime;
pub mod storage;

use runtime::Runtime;

/// Mount the app into the `#app` element.
pub fn start() {
    logging::init(log::LevelFilter::Debug);
    start_app("app", || {
        let runtime = Runtime::start(ticklist::Config::default());
        runtime.start_ticker();
        runtime.resolve_timezone();
        render::root(&runtime)
    });
}
