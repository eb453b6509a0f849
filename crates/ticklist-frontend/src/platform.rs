//! Clock and timezone lookups backed by the JS runtime.

use js_sys::{Array, Date, Intl, Object, Reflect};
use ticklist::{Timestamp, Timezone};
use wasm_bindgen::JsValue;

pub fn now() -> Timestamp {
    Timestamp(Date::now() as i64)
}

/// The browser's current UTC offset and, when available, its IANA zone name.
pub fn local_timezone() -> Timezone {
    // `getTimezoneOffset` counts minutes west of UTC.
    let offset_minutes = -(Date::new_0().get_timezone_offset() as i32);
    let options = Intl::DateTimeFormat::new(&Array::new(), &Object::new()).resolved_options();
    let name = Reflect::get(&options, &JsValue::from_str("timeZone"))
        .ok()
        .and_then(|value| value.as_string());
    Timezone::new(name, offset_minutes)
}
