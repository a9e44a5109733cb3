use crate::places::SuggestionItem;

/// Highlighted suggestion and the text the user typed before previewing
///
/// `index` is `None` when nothing is highlighted and the input shows the
/// user's own text. Navigation wraps through `None`:
/// `None, 0, 1, ..., N-1, None, 0, ...`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionCursor {
    index: Option<usize>,
    saved_text: String,
}

impl SelectionCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn saved_text(&self) -> &str {
        &self.saved_text
    }

    pub fn save_text(&mut self, text: &str) {
        self.saved_text = text.to_string();
    }

    /// Forget the highlight without touching the saved text
    pub fn reset(&mut self) {
        self.index = None;
    }

    /// Hover: move the highlight only
    pub fn set_active(&mut self, index: Option<usize>) {
        self.index = index;
    }

    /// Keyboard or click selection
    ///
    /// Returns the text the input should display: the city of the selected
    /// item, or the saved text when the selection is `None` or out of range.
    pub fn select_active(
        &mut self,
        index: Option<usize>,
        current_text: &str,
        items: &[SuggestionItem],
    ) -> String {
        if self.index.is_none() {
            self.saved_text = current_text.to_string();
        }

        match index.and_then(|i| items.get(i).map(|item| (i, item))) {
            Some((i, item)) => {
                self.index = Some(i);
                item.city().to_string()
            }
            None => {
                self.index = None;
                self.saved_text.clone()
            }
        }
    }

    pub fn next(&mut self, current_text: &str, items: &[SuggestionItem]) -> String {
        let next = match self.index {
            None => 0,
            Some(i) => i + 1,
        };
        let next = (next < items.len()).then_some(next);
        self.select_active(next, current_text, items)
    }

    pub fn previous(&mut self, current_text: &str, items: &[SuggestionItem]) -> String {
        let from = self.index.unwrap_or(items.len());
        self.select_active(from.checked_sub(1), current_text, items)
    }
}
