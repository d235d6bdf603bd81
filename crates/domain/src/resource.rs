/// A single file folded into a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    pub short_name: String,
    pub content: String,
}

impl ResourceEntry {
    pub fn new(short_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self { short_name: short_name.into(), content: content.into() }
    }

    fn rendered_len(&self) -> usize {
        self.short_name.len() + self.content.len() + 2
    }
}

/// The aggregate for one theme, in discovery order.
///
/// Renders as `name\ncontent\n` per entry with no header or footer; an empty
/// resource renders to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resource {
    entries: Vec<ResourceEntry>,
}

impl Resource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ResourceEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Byte length of [`Resource::render`].
    pub fn rendered_len(&self) -> usize {
        self.entries.iter().map(ResourceEntry::rendered_len).sum()
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.rendered_len());
        for entry in &self.entries {
            out.push_str(&entry.short_name);
            out.push('\n');
            out.push_str(&entry.content);
            out.push('\n');
        }
        out
    }
}
