//! MaskState - Masked Text Input Cursor Engine
//!
//! A mask is a fixed-length placeholder such as `___-__-____` in which every slot char
//! marks an editable position. Only the characters typed into slots are stored; the
//! display value is rebuilt from the placeholder on every render.

use serde::{Deserialize, Serialize};

/// Which characters a slot accepts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotRule {
    #[default]
    Digit,
    Alpha,
    Alphanumeric,
    Any,
}

impl SlotRule {
    pub fn accepts(self, c: char) -> bool {
        match self {
            SlotRule::Digit => c.is_ascii_digit(),
            SlotRule::Alpha => c.is_alphabetic(),
            SlotRule::Alphanumeric => c.is_alphanumeric(),
            SlotRule::Any => !c.is_control(),
        }
    }
}

/// Phone number layouts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhoneFormat {
    /// `(___) ___ ____`
    Standard,
    /// `+{country code} (___) ___ ____`
    International,
    /// `___-___-____`
    #[default]
    Dashed,
}

impl PhoneFormat {
    pub fn label(&self) -> &'static str {
        match self {
            PhoneFormat::Standard => "Standard (With Parentheses)",
            PhoneFormat::International => "International (With Country Code)",
            PhoneFormat::Dashed => "Dashed (No Parentheses)",
        }
    }
}

/// Placeholder pattern with designated slot positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskPattern {
    placeholder: Vec<char>,
    slot_char: char,
    accept: SlotRule,
}

impl MaskPattern {
    /// Digit-only mask
    pub fn new(placeholder: &str, slot_char: char) -> Self {
        Self {
            placeholder: placeholder.chars().collect(),
            slot_char,
            accept: SlotRule::Digit,
        }
    }

    pub fn with_rule(mut self, accept: SlotRule) -> Self {
        self.accept = accept;
        self
    }

    /// US social security number
    pub fn ssn() -> Self {
        Self::new("___-__-____", '_')
    }

    pub fn phone(format: PhoneFormat, country_code: Option<&str>) -> Self {
        let placeholder = match format {
            PhoneFormat::Standard => "(___) ___ ____".to_string(),
            PhoneFormat::International => match country_code {
                Some(code) if !code.is_empty() => format!("+{code} (___) ___ ____"),
                _ => "(___) ___ ____".to_string(),
            },
            PhoneFormat::Dashed => "___-___-____".to_string(),
        };
        Self::new(&placeholder, '_')
    }

    pub fn placeholder(&self) -> String {
        self.placeholder.iter().collect()
    }

    pub fn slot_char(&self) -> char {
        self.slot_char
    }

    pub fn rule(&self) -> SlotRule {
        self.accept
    }

    /// Length of the placeholder in chars
    pub fn len(&self) -> usize {
        self.placeholder.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placeholder.is_empty()
    }

    pub fn is_slot(&self, idx: usize) -> bool {
        self.placeholder.get(idx) == Some(&self.slot_char)
    }

    pub fn slot_count(&self) -> usize {
        self.placeholder.iter().filter(|&&c| c == self.slot_char).count()
    }

    pub fn first_slot(&self) -> Option<usize> {
        self.placeholder.iter().position(|&c| c == self.slot_char)
    }

    pub fn last_slot(&self) -> Option<usize> {
        self.placeholder.iter().rposition(|&c| c == self.slot_char)
    }

    /// Number of slots strictly before `idx`, i.e. the data index of a slot at `idx`
    pub fn slots_before(&self, idx: usize) -> usize {
        self.placeholder
            .iter()
            .take(idx)
            .filter(|&&c| c == self.slot_char)
            .count()
    }

    /// Placeholder position of the `n`th slot
    pub fn nth_slot(&self, n: usize) -> Option<usize> {
        self.placeholder
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == self.slot_char)
            .nth(n)
            .map(|(idx, _)| idx)
    }

    /// Fill the slots left to right with the stored chars
    pub fn to_display(&self, stored: &str) -> String {
        let mut stored = stored.chars();
        let mut exhausted = false;
        self.placeholder
            .iter()
            .map(|&c| {
                if c != self.slot_char || exhausted {
                    return c;
                }
                match stored.next() {
                    Some(data) => data,
                    None => {
                        exhausted = true;
                        c
                    }
                }
            })
            .collect()
    }

    /// Extract the stored chars from a display string
    pub fn from_display(&self, input: &str) -> String {
        let prefix: String = match self.first_slot() {
            Some(first) => self.placeholder[..first].iter().collect(),
            None => String::new(),
        };
        let body = input.strip_prefix(prefix.as_str()).unwrap_or(input);

        body.chars()
            .filter(|&c| c != self.slot_char && !self.is_literal(c) && self.accept.accepts(c))
            .take(self.slot_count())
            .collect()
    }

    /// Literal char appearing between or after the slots
    fn is_literal(&self, c: char) -> bool {
        let body = match self.first_slot() {
            Some(first) => &self.placeholder[first..],
            None => &self.placeholder[..],
        };
        c != self.slot_char && body.contains(&c)
    }

    /// Skip forward over literal chars, stopping at the last slot
    pub fn cursor_forward(&self, idx: usize) -> usize {
        let Some(last) = self.last_slot() else {
            return idx;
        };
        let mut next = idx;
        while next < last && !self.is_slot(next) {
            next += 1;
        }
        next
    }

    /// Clamp a cursor that fell before the first slot
    pub fn cursor_back(&self, idx: usize) -> usize {
        match self.first_slot() {
            Some(first) if idx < first => first,
            _ => idx,
        }
    }
}

/// Stored value and cursor of a masked input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedInputState {
    pattern: MaskPattern,
    stored: String,
    cursor: usize,
}

impl MaskedInputState {
    pub fn new(pattern: MaskPattern) -> Self {
        Self {
            pattern,
            stored: String::new(),
            cursor: 0,
        }
    }

    pub fn with_stored(mut self, stored: &str) -> Self {
        self.set_stored(stored);
        self
    }

    pub fn pattern(&self) -> &MaskPattern {
        &self.pattern
    }

    pub fn stored(&self) -> &str {
        &self.stored
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn display(&self) -> String {
        self.pattern.to_display(&self.stored)
    }

    /// Every slot is filled
    pub fn is_complete(&self) -> bool {
        self.stored.chars().count() == self.pattern.slot_count()
    }

    fn stored_len(&self) -> usize {
        self.stored.chars().count()
    }

    /// Replace the stored value, dropping chars the mask would not accept
    pub fn set_stored(&mut self, stored: &str) {
        self.stored = stored
            .chars()
            .filter(|&c| self.pattern.accept.accepts(c))
            .take(self.pattern.slot_count())
            .collect();
        self.cursor = self.cursor.min(self.pattern.len());
    }

    /// Place the cursor on the first unfilled slot, or just past the last slot when full
    pub fn focus(&mut self) {
        let display: Vec<char> = self.display().chars().collect();
        self.cursor = match display.iter().position(|&c| c == self.pattern.slot_char) {
            Some(next) => next,
            None => self.pattern.last_slot().map(|last| last + 1).unwrap_or(0),
        };
    }

    pub fn set_cursor(&mut self, idx: usize) {
        self.cursor = idx.min(self.pattern.len());
    }

    /// Type one char at the cursor
    pub fn insert_char(&mut self, c: char) -> bool {
        if !self.pattern.accept.accepts(c) || self.stored_len() >= self.pattern.slot_count() {
            return false;
        }
        let Some(slot) = (self.cursor..self.pattern.len()).find(|&i| self.pattern.is_slot(i))
        else {
            return false;
        };

        let data_idx = self.pattern.slots_before(slot).min(self.stored_len());
        let byte_idx = self
            .stored
            .char_indices()
            .nth(data_idx)
            .map(|(b, _)| b)
            .unwrap_or(self.stored.len());
        self.stored.insert(byte_idx, c);

        let filled = self.pattern.nth_slot(data_idx).unwrap_or(slot);
        self.cursor = self.pattern.cursor_forward(filled + 1);
        true
    }

    /// Delete the data char of the nearest slot before the cursor
    pub fn backspace(&mut self) -> bool {
        let Some(prev) = (0..self.cursor).rev().find(|&i| self.pattern.is_slot(i)) else {
            self.cursor = self.pattern.cursor_back(self.cursor);
            return false;
        };

        let data_idx = self.pattern.slots_before(prev);
        let changed = match self.stored.char_indices().nth(data_idx) {
            Some((byte_idx, _)) => {
                self.stored.remove(byte_idx);
                true
            }
            None => false,
        };
        self.cursor = self.pattern.cursor_back(prev);
        changed
    }

    /// Apply a raw edited display string, as produced by a native text control
    pub fn apply_input(&mut self, raw: &str, cursor: usize) -> bool {
        let input: String = raw.chars().take(self.pattern.len()).collect();
        let is_deletion = input.chars().count() < self.display().chars().count();
        let stored = self.pattern.from_display(&input);
        let changed = stored != self.stored;
        self.stored = stored;

        self.cursor = if is_deletion {
            self.pattern.cursor_back(cursor)
        } else {
            self.pattern.cursor_forward(cursor)
        };
        changed
    }

    pub fn move_left(&mut self) {
        self.cursor = self.pattern.cursor_back(self.cursor.saturating_sub(1));
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.pattern.len());
    }

    pub fn home(&mut self) {
        self.cursor = self.pattern.first_slot().unwrap_or(0);
    }

    pub fn end(&mut self) {
        self.focus();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_all(state: &mut MaskedInputState, text: &str) {
        for c in text.chars() {
            state.insert_char(c);
        }
    }

    #[test]
    fn ssn_typing_fills_slots() {
        let mut state = MaskedInputState::new(MaskPattern::ssn());
        state.focus();
        assert_eq!(state.cursor(), 0);

        type_all(&mut state, "123456789");
        assert_eq!(state.stored(), "123456789");
        assert_eq!(state.display(), "123-45-6789");
        assert!(state.is_complete());
        assert_eq!(state.cursor(), 11);
    }

    #[test]
    fn cursor_skips_literals_while_typing() {
        let mut state = MaskedInputState::new(MaskPattern::ssn());
        state.focus();
        type_all(&mut state, "12");
        assert_eq!(state.cursor(), 2);
        type_all(&mut state, "3");
        assert_eq!(state.cursor(), 4);
    }

    #[test]
    fn non_digits_are_rejected() {
        let mut state = MaskedInputState::new(MaskPattern::ssn());
        state.focus();
        assert!(!state.insert_char('a'));
        assert_eq!(state.stored(), "");
    }

    #[test]
    fn full_value_ignores_more_input() {
        let mut state = MaskedInputState::new(MaskPattern::ssn()).with_stored("123456789");
        state.focus();
        assert!(!state.insert_char('0'));
        assert_eq!(state.stored(), "123456789");
    }

    #[test]
    fn focus_lands_on_first_unfilled_slot() {
        let mut state = MaskedInputState::new(MaskPattern::ssn()).with_stored("1234");
        state.focus();
        assert_eq!(state.display(), "123-4_-____");
        assert_eq!(state.cursor(), 5);
    }

    #[test]
    fn focus_when_full_goes_past_last_slot() {
        let mut state = MaskedInputState::new(MaskPattern::ssn()).with_stored("123456789");
        state.focus();
        assert_eq!(state.cursor(), 11);
    }

    #[test]
    fn backspace_skips_back_over_literals() {
        let mut state = MaskedInputState::new(MaskPattern::ssn()).with_stored("12345");
        state.focus();
        assert_eq!(state.cursor(), 7);

        assert!(state.backspace());
        assert_eq!(state.stored(), "1234");
        assert_eq!(state.cursor(), 5);

        assert!(state.backspace());
        assert!(state.backspace());
        assert_eq!(state.stored(), "12");
        assert_eq!(state.cursor(), 2);
    }

    #[test]
    fn backspace_before_first_slot_clamps() {
        let mut state =
            MaskedInputState::new(MaskPattern::phone(PhoneFormat::Standard, None)).with_stored("5");
        state.focus();
        assert_eq!(state.cursor(), 2);
        assert!(state.backspace());
        assert_eq!(state.stored(), "");
        assert_eq!(state.cursor(), 1);
        assert!(!state.backspace());
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn cursor_forward_stops_at_next_slot() {
        let pattern = MaskPattern::new("__---__", '_');
        assert_eq!(pattern.cursor_forward(2), 5);
        assert_eq!(pattern.cursor_forward(1), 1);
        assert_eq!(pattern.cursor_forward(7), 7);
    }

    #[test]
    fn cursor_back_clamps_to_first_slot() {
        let pattern = MaskPattern::new("(___)", '_');
        assert_eq!(pattern.cursor_back(0), 1);
        assert_eq!(pattern.cursor_back(3), 3);
    }

    #[test]
    fn from_display_strips_literals_and_prefix() {
        let pattern = MaskPattern::phone(PhoneFormat::International, Some("1"));
        assert_eq!(pattern.placeholder(), "+1 (___) ___ ____");
        assert_eq!(pattern.from_display("+1 (555) 123 4___"), "5551234");
        assert_eq!(MaskPattern::ssn().from_display("123-45-6789"), "123456789");
    }

    #[test]
    fn international_without_country_code_has_no_prefix() {
        let pattern = MaskPattern::phone(PhoneFormat::International, None);
        assert_eq!(pattern.placeholder(), "(___) ___ ____");
        assert_eq!(PhoneFormat::default(), PhoneFormat::Dashed);
    }

    #[test]
    fn apply_input_handles_insert_and_delete() {
        let mut state = MaskedInputState::new(MaskPattern::ssn()).with_stored("12");
        // Native control inserted '3' at index 2, shifting the rest right.
        assert!(state.apply_input("123_-__-____", 3));
        assert_eq!(state.stored(), "123");
        assert_eq!(state.cursor(), 4);

        // Native control deleted the char before index 3.
        assert!(state.apply_input("12-__-____", 2));
        assert_eq!(state.stored(), "12");
        assert_eq!(state.cursor(), 2);
    }

    #[test]
    fn alpha_rule() {
        let pattern = MaskPattern::new("__-__", '_').with_rule(SlotRule::Alpha);
        let mut state = MaskedInputState::new(pattern);
        state.focus();
        assert!(!state.insert_char('1'));
        assert!(state.insert_char('a'));
        assert_eq!(state.display(), "a_-__");
    }
}
