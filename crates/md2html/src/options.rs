//! Configuration options for Markdown conversion

/// What to do with a list block that yields no items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyListPolicy {
    /// Leave the list out of the document
    #[default]
    Skip,
    /// Emit the empty `ol`/`ul`; rendering it fails with `EmptyChildren`
    Emit,
}

/// Options for Markdown conversion
#[derive(Debug, Clone)]
pub struct Options {
    /// Handling of lists with zero items (ordered and unordered alike)
    pub empty_list: EmptyListPolicy,

    /// Marker joining the lines of a block quote
    pub quote_line_break: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            empty_list: EmptyListPolicy::Skip,
            quote_line_break: "<br>".to_string(),
        }
    }
}
