//! Home view: welcome panel, live search, indexes and the add-song form

use super::node::{el, Action, Element, Event, Node};
use super::RenderOptions;
use crate::core::state::{AppState, NoticeKind};
use crate::models::Song;
use crate::stores::SongStore;

/// Tags shown per row of the song index
const MAX_TAGS: usize = 3;

pub fn home_view(state: &AppState, store: &SongStore, options: &RenderOptions) -> Node {
    el("div")
        .class("grid")
        .child(welcome_panel(state, store, options))
        .child(
            el("section")
                .class("card")
                .child(el("h2").id("idx-musicas").text("Índice por música"))
                .child(songs_table(store.all())),
        )
        .child(
            el("section")
                .class("card")
                .child(el("h2").id("idx-cantores").text("Índice por cantor"))
                .child(artist_index(store)),
        )
        .child(add_song_panel(state))
        .into()
}

fn welcome_panel(state: &AppState, store: &SongStore, options: &RenderOptions) -> Element {
    el("section")
        .class("card")
        .child(el("h1").text("Bem-vindo ao Álbum de Karaokê!"))
        .child(el("p").text(
            "Use a busca ou os índices abaixo para encontrar sua música. \
             Use os botões A+ e A- no cabeçalho para ajustar o tamanho da fonte.",
        ))
        .child(
            el("div")
                .class("toolbar")
                .child(
                    el("button")
                        .class("btn")
                        .id("btn-ir-indice")
                        .on(Event::Click, Action::ScrollTo("idx-musicas".to_string()))
                        .text("Ir para Índice de Músicas"),
                )
                .child(
                    el("button")
                        .class("btn secondary")
                        .id("btn-ir-cantores")
                        .on(Event::Click, Action::ScrollTo("idx-cantores".to_string()))
                        .text("Ir para Índice de Cantores"),
                ),
        )
        .child(el("h2").text("Busca Rápida"))
        .child(
            el("input")
                .attr("type", "search")
                .id("q")
                .attr("placeholder", "Digite o título ou artista...")
                .attr("value", state.search_query.as_str())
                .on(Event::Input, Action::Search),
        )
        .child(search_results(store, &state.search_query, options.search_limit))
}

/// Results container for a search query; empty for a blank query
pub fn search_results(store: &SongStore, query: &str, limit: usize) -> Node {
    el("div")
        .id("resbusca")
        .class("grid")
        .children(store.search(query, limit).into_iter().map(song_card))
        .into()
}

fn song_card(song: &Song) -> Element {
    el("a")
        .class("card song-card")
        .attr("href", song.fragment())
        .on(Event::Click, Action::Navigate(song.fragment()))
        .child(
            el("div")
                .class("song-card-row")
                .child(el("div").class("song-card-title").text(song.title.as_str()))
                .child(el("div").class("muted").text(song.artist.as_str())),
        )
}

fn song_link(song: &Song) -> Element {
    el("a")
        .attr("href", song.fragment())
        .on(Event::Click, Action::Navigate(song.fragment()))
        .text(song.title.as_str())
}

fn songs_table(songs: &[Song]) -> Element {
    let rows = songs.iter().map(|song| {
        let tags: Vec<&str> = song.tags.iter().take(MAX_TAGS).map(String::as_str).collect();
        el("tr")
            .child(el("td").class("col-title").child(song_link(song)))
            .child(el("td").class("col-artist").text(song.artist.as_str()))
            .child(el("td").class("muted").text(tags.join(", ")))
    });

    el("div")
        .class("card")
        .attr("role", "region")
        .attr("aria-label", "Índice de músicas")
        .child(
            el("table")
                .child(
                    el("thead").child(
                        el("tr")
                            .child(el("th").text("Título"))
                            .child(el("th").text("Artista"))
                            .child(el("th").text("Tags")),
                    ),
                )
                .child(el("tbody").children(rows)),
        )
}

fn artist_index(store: &SongStore) -> Element {
    let groups = store.group_by_artist().into_iter().map(|(artist, songs)| {
        el("details")
            .child(
                el("summary")
                    .text(artist)
                    .text(" ")
                    .child(el("span").class("muted").text(format!("({})", songs.len()))),
            )
            .child(
                el("ul").children(
                    songs
                        .into_iter()
                        .map(|song| el("li").child(song_link(song))),
                ),
            )
    });

    el("div").class("grid").children(groups)
}

fn add_song_panel(state: &AppState) -> Element {
    let draft = state.draft.clone().unwrap_or_default();

    let mut details = el("details").id("adicionar");
    if state.notice.is_some() {
        details = details.attr("open", "open");
    }

    details = details
        .child(el("summary").class("strong").text("Como adicionar músicas (opcional)"))
        .child(el("p").text(
            "Você pode adicionar músicas diretamente neste álbum. Elas serão salvas apenas \
             neste navegador e podem ser perdidas a qualquer momento: o armazenamento é \
             local e temporário. Use o botão \"Exportar\" no cabeçalho para baixar seu acervo.",
        ));

    if let Some(notice) = &state.notice {
        let kind = match notice.kind {
            NoticeKind::Success => "notice success",
            NoticeKind::Error => "notice error",
        };
        let role = match notice.kind {
            NoticeKind::Success => "status",
            NoticeKind::Error => "alert",
        };
        details = details.child(
            el("div")
                .id("aviso")
                .class(kind)
                .attr("role", role)
                .text(notice.text.as_str()),
        );
    }

    let form = el("form")
        .id("f-add")
        .class("grid two")
        .on(Event::Submit, Action::AddSong)
        .child(field(
            "f-title",
            "Título",
            el("input").attr("type", "text").attr("value", draft.title),
        ))
        .child(field(
            "f-artist",
            "Artista/Intérprete",
            el("input").attr("type", "text").attr("value", draft.artist),
        ))
        .child(
            field(
                "f-lyrics",
                "Letra (use quebras de linha)",
                el("textarea")
                    .attr("rows", "6")
                    .attr("placeholder", "Escreva a letra aqui…")
                    .text(draft.lyrics),
            )
            .class("full-row"),
        )
        .child(
            el("div").child(
                el("button")
                    .class("btn")
                    .attr("type", "submit")
                    .text("Adicionar ao acervo local"),
            ),
        );

    el("section").class("card").child(details.child(form))
}

fn field(id: &'static str, label: &str, control: Element) -> Element {
    el("div")
        .child(el("label").attr("for", id).text(label))
        .child(control.id(id).attr("name", id))
}
