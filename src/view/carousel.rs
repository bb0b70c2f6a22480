/// Index of the first visible card, kept within `[0, item_count - cards_per_view]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    item_count: usize,
    cards_per_view: usize,
}

impl Carousel {
    pub fn new(item_count: usize, cards_per_view: usize) -> Self {
        Self {
            index: 0,
            item_count,
            cards_per_view: cards_per_view.max(1),
        }
    }

    /// Cards that fit a viewport of the given CSS pixel width.
    pub fn cards_for_width(width: u32) -> usize {
        match width {
            0..640 => 1,
            640..1024 => 2,
            _ => 3,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn cards_per_view(&self) -> usize {
        self.cards_per_view
    }

    pub fn max_index(&self) -> usize {
        self.item_count.saturating_sub(self.cards_per_view)
    }

    pub fn go_to(&mut self, index: usize) {
        self.index = index.min(self.max_index());
    }

    pub fn next(&mut self) {
        self.go_to(self.index.saturating_add(1));
    }

    pub fn prev(&mut self) {
        self.go_to(self.index.saturating_sub(1));
    }

    pub fn can_next(&self) -> bool {
        self.index < self.max_index()
    }

    pub fn can_prev(&self) -> bool {
        self.index > 0
    }

    /// Recomputes cards per view for a new viewport and re-clamps the index.
    pub fn resize(&mut self, width: u32) {
        self.cards_per_view = Self::cards_for_width(width);
        self.go_to(self.index);
    }

    /// Range of item indices currently on screen.
    pub fn visible(&self) -> std::ops::Range<usize> {
        let end = (self.index + self.cards_per_view).min(self.item_count);
        self.index..end
    }
}
