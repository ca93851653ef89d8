// src/core/html.rs
//
// Minimal HTML document model: typed nodes rendered with escaping.
// Text and attribute values can never inject markup.

use std::fmt::Write;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self { tag, attrs: Vec::new(), children: Vec::new() }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self { self.attr("class", value) }
    pub fn style(self, value: impl Into<String>) -> Self { self.attr("style", value) }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self { self.child(Node::Text(text.into())) }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|x| x == class))
            .unwrap_or(false)
    }

    /// Depth-first search for the first element carrying `class`.
    pub fn find_class(&self, class: &str) -> Option<&Element> {
        if self.has_class(class) { return Some(self); }
        self.children.iter().find_map(|n| match n {
            Node::Element(e) => e.find_class(class),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = s!();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(el: &Element, out: &mut String) {
    for n in &el.children {
        match n {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => collect_text(e, out),
        }
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self { Node::Element(e) }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self { Node::Text(s.to_string()) }
}

impl From<String> for Node {
    fn from(s: String) -> Self { Node::Text(s) }
}

pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;").replace('\'', "&#39;")
}

/// Serialize nodes, one element per line at `indent` depth.
pub fn render(nodes: &[Node], indent: usize) -> String {
    let mut out = s!();
    for n in nodes {
        render_node(n, indent, &mut out);
    }
    out
}

fn render_node(node: &Node, depth: usize, out: &mut String) {
    match node {
        Node::Text(t) => out.push_str(&escape_text(t)),
        Node::Element(el) => {
            let pad = "  ".repeat(depth);
            let _ = write!(out, "{pad}<{}", el.tag);
            for (k, v) in &el.attrs {
                let _ = write!(out, " {}=\"{}\"", k, escape_attr(v));
            }
            out.push('>');

            let inline = el.children.iter().all(|c| matches!(c, Node::Text(_)));
            if inline {
                for c in &el.children {
                    render_node(c, 0, out);
                }
            } else {
                out.push('\n');
                for c in &el.children {
                    render_node(c, depth + 1, out);
                    if matches!(c, Node::Text(_)) { out.push('\n'); }
                }
                out.push_str(&pad);
            }
            let _ = writeln!(out, "</{}>", el.tag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_attrs_are_escaped() {
        let el = Element::new("div")
            .class("a\" onclick=\"x")
            .text("<b>Tom & Jerry</b>");
        let html = render(&[el.into()], 0);
        assert_eq!(
            html,
            "<div class=\"a&quot; onclick=&quot;x\">&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;</div>\n"
        );
    }

    #[test]
    fn nested_elements_are_indented() {
        let el = Element::new("div").child(Element::new("span").text("x"));
        assert_eq!(render(&[el.into()], 1), "  <div>\n    <span>x</span>\n  </div>\n");
    }

    #[test]
    fn find_class_walks_descendants() {
        let el = Element::new("div")
            .child(Element::new("p").child(Element::new("span").class("hit other").text("yes")));
        assert_eq!(el.find_class("hit").map(|e| e.text_content()), Some(s!("yes")));
        assert!(el.find_class("miss").is_none());
    }
}
