use std::collections::BTreeSet;

/// The document the stylesheet is injected into.
///
/// `find_or_create_style` is called once per stylesheet; the handle it returns
/// is reused for every later write.
pub trait StyleHost {
    type StyleHandle;

    fn find_or_create_style(&mut self, id: &str) -> Self::StyleHandle;
    fn set_style_text(&mut self, handle: &Self::StyleHandle, css: &str);
    fn set_root_class(&mut self, class: &str, enabled: bool);
    fn set_root_filter(&mut self, filter: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleElement {
    pub id: String,
    pub text: String,
}

/// Index of a `<style>` element in [`HtmlDocument`]'s head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleNode(usize);

/// In-memory document: head style elements plus root element state.
#[derive(Debug, Clone, Default)]
pub struct HtmlDocument {
    head: Vec<StyleElement>,
    root_classes: BTreeSet<String>,
    root_filter: String,
}

impl HtmlDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style_elements(&self) -> &[StyleElement] {
        &self.head
    }

    pub fn style_by_id(&self, id: &str) -> Option<&StyleElement> {
        self.head.iter().find(|element| element.id == id)
    }

    pub fn has_root_class(&self, class: &str) -> bool {
        self.root_classes.contains(class)
    }

    pub fn root_filter(&self) -> &str {
        &self.root_filter
    }

    /// Serialized `<style>` elements, in head order.
    pub fn head_markup(&self) -> String {
        self.head
            .iter()
            .map(|element| format!("<style id=\"{}\">\n{}</style>\n", element.id, element.text))
            .collect()
    }
}

impl StyleHost for HtmlDocument {
    type StyleHandle = StyleNode;

    fn find_or_create_style(&mut self, id: &str) -> StyleNode {
        if let Some(index) = self.head.iter().position(|element| element.id == id) {
            return StyleNode(index);
        }
        self.head.push(StyleElement {
            id: id.to_string(),
            text: String::new(),
        });
        StyleNode(self.head.len() - 1)
    }

    fn set_style_text(&mut self, handle: &StyleNode, css: &str) {
        match self.head.get_mut(handle.0) {
            Some(element) => css.clone_into(&mut element.text),
            None => tracing::warn!(index = handle.0, "style handle points past document head"),
        }
    }

    fn set_root_class(&mut self, class: &str, enabled: bool) {
        if enabled {
            self.root_classes.insert(class.to_string());
        } else {
            self.root_classes.remove(class);
        }
    }

    fn set_root_filter(&mut self, filter: &str) {
        filter.clone_into(&mut self.root_filter);
    }
}
