//! Zoon elements for [`ticklist::View`].

use ticklist::ItemView;
use zoon::*;

use crate::runtime::Runtime;

const DELETE_ICON_SVG: &str = include_str!("../public/icons/delete.svg");

fn clock_color() -> Rgba {
    color!("#2f3b52")
}

fn item_text_color() -> Rgba {
    color!("rgba(47, 59, 82, 0.85)")
}

fn delete_icon_url() -> String {
    format!("data:image/svg+xml;utf8,{}", DELETE_ICON_SVG.trim())
}

pub fn root(runtime: &Runtime) -> impl Element + use<> {
    Column::new()
        .s(Width::exact(480))
        .s(Align::new().center_x())
        .s(Padding::new().top(40).x(12))
        .s(Gap::new().y(16))
        .item(header(runtime))
        .item(input_form(runtime))
        .item(todo_list(runtime))
}

fn header(runtime: &Runtime) -> impl Element + use<> {
    El::new()
        .s(Align::new().center_x())
        .s(Font::new().size(48).color(clock_color()).family([FontFamily::Monospace]))
        .child_signal(runtime.clock_signal())
}

fn input_form(runtime: &Runtime) -> impl Element + use<> {
    Row::new()
        .s(Gap::new().x(8))
        .item(
            TextInput::new()
                .label_hidden("New todo")
                .s(Width::fill())
                .s(Padding::all(8))
                .placeholder(Placeholder::new(runtime.placeholder()))
                .text_signal(runtime.input_text_signal())
                .on_change({
                    let runtime = runtime.clone();
                    move |text| runtime.dispatch(ticklist::Event::Input(text))
                })
                .on_key_down_event({
                    let runtime = runtime.clone();
                    move |event| {
                        if matches!(event.key(), Key::Enter) {
                            runtime.submit();
                        }
                    }
                }),
        )
        .item(
            Button::new()
                .s(Padding::new().x(14).y(8))
                .label("Add")
                .on_press({
                    let runtime = runtime.clone();
                    move || runtime.submit()
                }),
        )
}

fn todo_list(runtime: &Runtime) -> impl Element + use<> {
    El::new()
        .s(Width::fill())
        .child_signal(runtime.items_signal().map({
            let runtime = runtime.clone();
            move |items| {
                Column::new()
                    .s(Width::fill())
                    .s(Gap::new().y(4))
                    .items(items.iter().map(|item| todo_row(&runtime, item)))
            }
        }))
}

fn todo_row(runtime: &Runtime, item: &ItemView) -> impl Element + use<> {
    let delete_button = item.on_delete.clone().map(|event| {
        let runtime = runtime.clone();
        Button::new()
            .label(
                Image::new()
                    .s(Width::exact(16))
                    .s(Height::exact(16))
                    .url(delete_icon_url())
                    .description("Delete"),
            )
            .on_press(move || runtime.dispatch(event.clone()))
    });
    Row::new()
        .s(Width::fill())
        .s(Gap::new().x(8))
        .s(Padding::new().y(6))
        .update_raw_el({
            let id = item.id.to_string();
            move |raw_el| raw_el.attr("data-todo-id", &id)
        })
        .item(
            El::new()
                .s(Width::fill())
                .s(Font::new().color(item_text_color()))
                .child(item.title.clone()),
        )
        .item(delete_button)
}
