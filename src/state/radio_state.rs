//! RadioState - Radio Group Focus and Toggle

use crate::domain::option::{DefaultKeys, OptionKeys, SelectOption};

/// Options and keyboard focus of a radio group
#[derive(Debug, Clone)]
pub struct RadioState<K: OptionKeys = DefaultKeys> {
    options: Vec<SelectOption<K>>,
    focused: Option<usize>,
}

impl<K: OptionKeys> RadioState<K> {
    pub fn new(options: Vec<SelectOption<K>>) -> Self {
        Self {
            options,
            focused: None,
        }
    }

    pub fn options(&self) -> &[SelectOption<K>] {
        &self.options
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn set_focused(&mut self, index: Option<usize>) {
        self.focused = index.filter(|&i| i < self.options.len());
    }

    /// New value after choosing `value`: choosing the current option clears it
    pub fn toggle(
        &self,
        value: &str,
        current: Option<&SelectOption<K>>,
    ) -> Option<Option<SelectOption<K>>> {
        if current.is_some_and(|c| c.value == value) {
            return Some(None);
        }
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| Some(o.clone()))
    }

    /// Toggle the focused option
    pub fn toggle_focused(
        &self,
        current: Option<&SelectOption<K>>,
    ) -> Option<Option<SelectOption<K>>> {
        let option = self.options.get(self.focused?)?;
        self.toggle(&option.value, current)
    }

    pub fn focus_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.focused = Some(match self.focused {
            Some(i) => (i + 1) % self.options.len(),
            None => 0,
        });
    }

    pub fn focus_prev(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let last = self.options.len() - 1;
        self.focused = Some(match self.focused {
            Some(0) | None => last,
            Some(i) => i - 1,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> RadioState {
        RadioState::new(vec![
            SelectOption::new("s", "Small"),
            SelectOption::new("m", "Medium"),
            SelectOption::new("l", "Large"),
        ])
    }

    #[test]
    fn choosing_selects_option() {
        let radios = state();
        let next = radios.toggle("m", None).expect("known value");
        assert_eq!(next.map(|o| o.label), Some("Medium".to_string()));
    }

    #[test]
    fn choosing_current_option_clears_it() {
        let radios = state();
        let current = SelectOption::new("m", "Medium");
        assert_eq!(radios.toggle("m", Some(&current)), Some(None));
    }

    #[test]
    fn unknown_value_is_ignored() {
        assert_eq!(state().toggle("xl", None), None);
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut radios = state();
        radios.focus_prev();
        assert_eq!(radios.focused(), Some(2));
        radios.focus_next();
        assert_eq!(radios.focused(), Some(0));
        radios.focus_next();
        let toggled = radios.toggle_focused(None).expect("focused option");
        assert_eq!(toggled.map(|o| o.value), Some("m".to_string()));
    }
}
