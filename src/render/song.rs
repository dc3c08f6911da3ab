//! Song detail view with pager and lyrics formatting

use super::node::{el, text, Action, Element, Event, Node};
use crate::core::router::HOME_FRAGMENT;
use crate::core::state::AppState;
use crate::models::Song;
use crate::stores::SongStore;

pub fn song_view(state: &AppState, store: &SongStore) -> Node {
    let song = match state.current_song_id.as_deref().and_then(|id| store.get(id)) {
        Some(song) => song,
        None => return not_found(),
    };
    let (prev, next) = store.neighbors(&song.id);

    el("article")
        .class("grid")
        .child(
            el("nav")
                .attr("aria-label", "Trilha")
                .class("muted")
                .child(
                    el("a")
                        .attr("href", "#idx-musicas")
                        .id("lnk-voltar")
                        .on(Event::Click, Action::Navigate(HOME_FRAGMENT.to_string()))
                        .text("← Voltar ao índice"),
                ),
        )
        .child(
            el("section")
                .class("card")
                .child(pager(prev, next))
                .child(el("h1").class("song-title").text(song.title.as_str()))
                .child(el("p").class("muted song-artist").text(song.artist.as_str()))
                .child(
                    el("div")
                        .class("lyrics")
                        .id("letra")
                        .attr("aria-label", "Letra da música")
                        .attr("tabindex", "0")
                        .children(lyrics_nodes(&song.lyrics)),
                ),
        )
        .into()
}

fn not_found() -> Node {
    el("div")
        .class("empty")
        .attr("data-state", "not-found")
        .child(el("p").class("muted").text("Música não encontrada."))
        .child(
            el("a")
                .attr("href", HOME_FRAGMENT)
                .on(Event::Click, Action::Navigate(HOME_FRAGMENT.to_string()))
                .text("← Voltar ao início"),
        )
        .into()
}

fn pager(prev: Option<&Song>, next: Option<&Song>) -> Element {
    let mut toolbar = el("div").class("toolbar pager");
    if let Some(prev) = prev {
        toolbar = toolbar.child(pager_link(prev, "prev", "⟵ Anterior"));
    }
    if let Some(next) = next {
        toolbar = toolbar.child(pager_link(next, "next", "Próxima ⟶"));
    }
    toolbar
}

fn pager_link(song: &Song, rel: &str, label: &str) -> Element {
    el("a")
        .class("btn ghost")
        .attr("rel", rel)
        .attr("href", song.fragment())
        .on(Event::Click, Action::Navigate(song.fragment()))
        .text(label)
}

/// Format lyrics into paragraphs
///
/// The first paragraph (up to the first blank line) is highlighted; the rest
/// become plain paragraphs, and single line breaks become `<br>`.
pub fn lyrics_nodes(lyrics: &str) -> Vec<Node> {
    let normalized = lyrics.replace("\r\n", "\n");
    let trimmed = normalized.trim_start_matches('\n');

    let (first, rest) = match trimmed.split_once("\n\n") {
        Some((first, rest)) => (first, Some(rest)),
        None => (trimmed, None),
    };

    let mut nodes = vec![paragraph(first).class("highlight").into()];
    if let Some(rest) = rest {
        nodes.extend(
            rest.split("\n\n")
                .filter(|p| !p.trim().is_empty())
                .map(|p| paragraph(p).into()),
        );
    }
    nodes
}

fn paragraph(block: &str) -> Element {
    let mut p = el("p");
    for (i, line) in block.split('\n').enumerate() {
        if i > 0 {
            p = p.child(el("br"));
        }
        p = p.child(text(line));
    }
    p
}
