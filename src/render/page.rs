//! Full HTML document around the content region

use super::node::{el, Action, Element, Event, Node};
use super::Frame;
use crate::core::router::{View, HOME_FRAGMENT};

const STYLESHEET: &str = "/static/style.css";

/// Render the whole page with preferences applied to `<html>`/`<body>`
pub fn document(frame: &Frame) -> String {
    let html: Node = el("html")
        .attr("lang", "pt-BR")
        .attr("style", frame.presentation.root_style())
        .child(
            el("head")
                .child(el("meta").attr("charset", "utf-8"))
                .child(
                    el("meta")
                        .attr("name", "viewport")
                        .attr("content", "width=device-width, initial-scale=1"),
                )
                .child(el("title").text("Álbum de Karaokê"))
                .child(el("link").attr("rel", "stylesheet").attr("href", STYLESHEET)),
        )
        .child(
            el("body")
                .attr("data-contrast", frame.presentation.contrast.as_str())
                .child(header())
                .child(
                    el("main")
                        .id("conteudo")
                        .attr("tabindex", "-1")
                        .attr("data-view", view_name(frame))
                        .child(frame.content.clone()),
                ),
        )
        .into();

    format!("<!doctype html>\n{}", html.to_html())
}

fn view_name(frame: &Frame) -> &'static str {
    match frame.view {
        View::Home => "home",
        View::SongDetail => "song",
    }
}

fn header() -> Element {
    el("header").class("topbar").child(
        el("div")
            .class("toolbar")
            .child(button("btn-home", "Início", Action::Navigate(HOME_FRAGMENT.to_string())))
            .child(button("btn-menor", "A-", Action::FontDown).attr("aria-label", "Diminuir fonte"))
            .child(button("btn-maior", "A+", Action::FontUp).attr("aria-label", "Aumentar fonte"))
            .child(button("btn-contraste", "Contraste", Action::ToggleContrast))
            .child(button("btn-exportar", "Exportar", Action::Export)),
    )
}

fn button(id: &'static str, label: &str, action: Action) -> Element {
    el("button")
        .class("btn ghost")
        .id(id)
        .attr("type", "button")
        .on(Event::Click, action)
        .text(label)
}
