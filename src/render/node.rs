//! View-model tree and the binding step

use std::fmt::{self, Write};

use serde::Serialize;

use crate::utils::escape::escape_html;

/// Elements rendered without a closing tag
const VOID_TAGS: &[&str] = &["br", "input", "meta", "link"];

/// DOM event a handler listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Event {
    Click,
    Input,
    Submit,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::Click => "click",
            Event::Input => "input",
            Event::Submit => "submit",
        }
    }
}

/// What the host should do when a bound event fires
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Action {
    Navigate(String),
    ScrollTo(String),
    Search,
    AddSong,
    FontUp,
    FontDown,
    ToggleContrast,
    Export,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Navigate(fragment) => write!(f, "navigate:{}", fragment),
            Action::ScrollTo(anchor) => write!(f, "scroll:{}", anchor),
            Action::Search => f.write_str("search"),
            Action::AddSong => f.write_str("add-song"),
            Action::FontUp => f.write_str("font-up"),
            Action::FontDown => f.write_str("font-down"),
            Action::ToggleContrast => f.write_str("toggle-contrast"),
            Action::Export => f.write_str("export"),
        }
    }
}

/// An event declared on an element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    pub event: Event,
    pub action: Action,
}

/// A node of the rendered tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bindings: Vec<Binding>,
    pub children: Vec<Node>,
}

/// Start building an element
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        attrs: Vec::new(),
        bindings: Vec::new(),
        children: Vec::new(),
    }
}

/// A text node, escaped on output
pub fn text(value: impl Into<String>) -> Node {
    Node::Text(value.into())
}

impl Element {
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn id(self, value: impl Into<String>) -> Self {
        self.attr("id", value)
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn on(mut self, event: Event, action: Action) -> Self {
        self.bindings.push(Binding { event, action });
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(text(value))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    /// Serialize to markup, escaping all text and attribute values
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(value) => out.push_str(&escape_html(value)),
            Node::Element(element) => {
                out.push('<');
                out.push_str(element.tag);
                for (name, value) in &element.attrs {
                    let _ = write!(out, " {}=\"{}\"", name, escape_html(value));
                }
                for binding in &element.bindings {
                    let _ = write!(
                        out,
                        " data-on-{}=\"{}\"",
                        binding.event.as_str(),
                        escape_html(&binding.action.to_string())
                    );
                }
                out.push('>');
                if VOID_TAGS.contains(&element.tag) {
                    return;
                }
                for child in &element.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", element.tag);
            }
        }
    }

    /// Concatenated text content of the subtree
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(value) => value.clone(),
            Node::Element(element) => element.children.iter().map(Node::text_content).collect(),
        }
    }

    /// Depth-first search for the element with the given id
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        match self {
            Node::Text(_) => None,
            Node::Element(element) => {
                if element.get_attr("id") == Some(id) {
                    return Some(element);
                }
                element.children.iter().find_map(|c| c.find_by_id(id))
            }
        }
    }
}

/// A handler the host must attach after inserting the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundHandler {
    /// Element id, or a child-index path such as `0.2.1`
    pub target: String,
    pub event: Event,
    pub action: Action,
}

/// Walk the tree in document order and list every declared binding
pub fn collect_bindings(root: &Node) -> Vec<BoundHandler> {
    let mut handlers = Vec::new();
    walk_bindings(root, "0", &mut handlers);
    handlers
}

fn walk_bindings(node: &Node, path: &str, handlers: &mut Vec<BoundHandler>) {
    let Node::Element(element) = node else {
        return;
    };

    let target = element
        .get_attr("id")
        .map(str::to_string)
        .unwrap_or_else(|| path.to_string());
    for binding in &element.bindings {
        handlers.push(BoundHandler {
            target: target.clone(),
            event: binding.event,
            action: binding.action.clone(),
        });
    }

    for (i, child) in element.children.iter().enumerate() {
        walk_bindings(child, &format!("{}.{}", path, i), handlers);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_html_escapes_text_and_attributes() {
        let node: Node = el("a")
            .attr("title", "\"quoted\" & 'single'")
            .text("<b>X</b>")
            .into();
        assert_eq!(
            node.to_html(),
            "<a title=\"&quot;quoted&quot; &amp; &#39;single&#39;\">&lt;b&gt;X&lt;/b&gt;</a>"
        );
    }

    #[test]
    fn test_void_elements() {
        let node: Node = el("p").text("a").child(el("br")).text("b").into();
        assert_eq!(node.to_html(), "<p>a<br>b</p>");
    }

    #[test]
    fn test_bindings_in_markup() {
        let node: Node = el("a")
            .attr("href", "#/cancao/x")
            .on(Event::Click, Action::Navigate("#/cancao/x".to_string()))
            .into();
        assert_eq!(
            node.to_html(),
            "<a href=\"#/cancao/x\" data-on-click=\"navigate:#/cancao/x\"></a>"
        );
    }

    #[test]
    fn test_collect_bindings_in_document_order() {
        let node: Node = el("div")
            .child(el("button").id("first").on(Event::Click, Action::FontUp))
            .child(
                el("ul").child(
                    el("li").child(el("a").on(Event::Click, Action::Navigate("#".to_string()))),
                ),
            )
            .into();

        let handlers = collect_bindings(&node);
        assert_eq!(handlers.len(), 2);
        assert_eq!(handlers[0].target, "first");
        assert_eq!(handlers[0].action, Action::FontUp);
        assert_eq!(handlers[1].target, "0.1.0.0");
        assert_eq!(handlers[1].event, Event::Click);
    }

    #[test]
    fn test_find_by_id_and_text_content() {
        let node: Node = el("div")
            .child(el("span").id("x").text("olá "))
            .text("mundo")
            .into();
        assert_eq!(node.find_by_id("x").map(|e| e.tag), Some("span"));
        assert_eq!(node.text_content(), "olá mundo");
    }
}
