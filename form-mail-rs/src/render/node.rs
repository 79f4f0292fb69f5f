//! Element tree shared by the live preview and the exported markup

use serde::Serialize;

/// Tags written without a closing tag
const VOID_TAGS: &[&str] = &["img", "br", "hr"];

/// A node of the rendered tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Element(Element),
    Text { text: String },
}

/// An HTML element with inline style
///
/// `style` is kept separate from `attrs` so preview hosts can apply the
/// declarations directly; [`Element::to_html`] writes it as the last
/// attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<(&'static str, String)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub style: Vec<(&'static str, String)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    /// Set on preview links and images: the host must not navigate
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub inert: bool,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            style: Vec::new(),
            children: Vec::new(),
            inert: false,
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Append one inline style declaration
    pub fn css(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.style.push((property, value.into()));
        self
    }

    pub fn child(mut self, element: Element) -> Self {
        self.children.push(Node::Element(element));
        self
    }

    pub fn children(mut self, elements: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(elements.into_iter().map(Node::Element));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text { text: text.into() });
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text { .. } => None,
        })
    }

    /// All descendants (and self) with the given tag, in document order
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect(tag, &mut found);
        found
    }

    fn collect<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element>) {
        if self.tag == tag {
            found.push(self);
        }
        for child in self.child_elements() {
            child.collect(tag, found);
        }
    }

    /// Concatenated text of all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            match node {
                Node::Text { text } => out.push_str(text),
                Node::Element(element) => out.push_str(&element.text_content()),
            }
        }
        out
    }

    /// Mark every link and image of the tree as non-navigating
    pub fn with_navigation_disabled(mut self) -> Self {
        if matches!(self.tag, "a" | "img") {
            self.inert = true;
        }
        self.children = self
            .children
            .into_iter()
            .map(|node| match node {
                Node::Element(element) => Node::Element(element.with_navigation_disabled()),
                text => text,
            })
            .collect();
        self
    }

    /// Copy of the tree with every `inert` flag cleared
    pub fn without_inert(&self) -> Self {
        let mut element = self.clone();
        element.clear_inert();
        element
    }

    fn clear_inert(&mut self) {
        self.inert = false;
        for node in &mut self.children {
            if let Node::Element(element) = node {
                element.clear_inert();
            }
        }
    }

    pub fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag)
    }

    /// Serialize as indented HTML with inline styles
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out, 0);
        out
    }

    fn write_html(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        self.write_open_tag(out);

        if self.is_void() {
            out.push('\n');
            return;
        }

        let inline = self
            .children
            .iter()
            .all(|node| matches!(node, Node::Text { .. }));

        if inline {
            for node in &self.children {
                if let Node::Text { text } = node {
                    out.push_str(&escape_text(text));
                }
            }
        } else {
            out.push('\n');
            for node in &self.children {
                match node {
                    Node::Element(element) => element.write_html(out, depth + 1),
                    Node::Text { text } => {
                        out.push_str(&indent);
                        out.push_str("  ");
                        out.push_str(&escape_text(text));
                        out.push('\n');
                    }
                }
            }
            out.push_str(&indent);
        }

        out.push_str("</");
        out.push_str(self.tag);
        out.push_str(">\n");
    }

    fn write_open_tag(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);

        for (name, value) in &self.attrs {
            write_attr(out, name, value);
        }

        if self.inert {
            write_attr(out, "data-preview-inert", "true");
            if self.tag == "a" {
                write_attr(out, "aria-disabled", "true");
                write_attr(out, "tabindex", "-1");
            }
        }

        if !self.style.is_empty() {
            let declarations: String = self
                .style
                .iter()
                .map(|(property, value)| format!("{}:{};", property, value))
                .collect();
            write_attr(out, "style", &declarations);
        }

        out.push('>');
    }
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}

/// Escape text content; quotes are left alone so shortcodes stay readable
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a double-quoted attribute value
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
