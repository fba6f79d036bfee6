//! Cursor state for the board UI.

/// Which column and which card within it the cursor is on. While a
/// card is held, the column doubles as the drop target.
#[derive(Debug, Default, Clone, Copy)]
pub struct Selection {
    pub column: usize,
    pub card: usize,
}

impl Selection {
    /// Move across columns, clamping to bounds.
    pub fn move_column(&mut self, delta: isize, column_count: usize) {
        if column_count == 0 {
            self.column = 0;
            return;
        }
        let max = column_count - 1;
        self.column = if delta < 0 {
            self.column.saturating_sub(delta.unsigned_abs())
        } else {
            (self.column + delta as usize).min(max)
        };
    }

    /// Move within the current column, clamping to bounds.
    pub fn move_card(&mut self, delta: isize, card_count: usize) {
        if card_count == 0 {
            self.card = 0;
            return;
        }
        let max = card_count - 1;
        self.card = if delta < 0 {
            self.card.saturating_sub(delta.unsigned_abs())
        } else {
            (self.card + delta as usize).min(max)
        };
    }

    /// Keep the card index valid after the column (or its contents)
    /// changed.
    pub fn clamp_card(&mut self, card_count: usize) {
        self.card = if card_count == 0 {
            0
        } else {
            self.card.min(card_count - 1)
        };
    }
}
