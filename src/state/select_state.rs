//! SelectState - Combobox Filter, Create and Chip Engine
//!
//! Holds the local UI state of one select field: the merged option list, the search
//! input, list highlight, chip focus and any pending option creation. The selection
//! itself lives in the form store, so every operation that changes it takes the current
//! [`Selection`] and hands back the new one for the caller to commit.

use crate::domain::option::{DefaultKeys, OptionKeys, SelectOption, filter_options};
use crate::domain::selection::Selection;
use crate::error::Error;
use crate::state::text_state::TextInputState;

/// Option count above which the search input is shown by default
pub const DEFAULT_SEARCHABLE_THRESHOLD: usize = 10;

/// Behaviour switches of a select field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectConfig {
    pub multi: bool,
    pub createable: bool,
    pub searchable: bool,
    pub disabled: bool,
    pub read_only: bool,
}

impl SelectConfig {
    /// Searchable when there are more options than `threshold`
    pub fn for_options(option_count: usize, threshold: usize) -> Self {
        Self {
            searchable: option_count > threshold,
            ..Default::default()
        }
    }

    pub fn multi(mut self, multi: bool) -> Self {
        self.multi = multi;
        self
    }

    pub fn createable(mut self, createable: bool) -> Self {
        self.createable = createable;
        self
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }
}

/// An entry of the open option list
pub enum Candidate<K: OptionKeys = DefaultKeys> {
    /// Synthetic entry that creates an option from the search text
    Create(String),
    Existing(SelectOption<K>),
}

impl<K: OptionKeys> Candidate<K> {
    pub fn label(&self) -> &str {
        match self {
            Candidate::Create(text) => text,
            Candidate::Existing(option) => &option.label,
        }
    }

    pub fn is_create(&self) -> bool {
        matches!(self, Candidate::Create(_))
    }
}

impl<K: OptionKeys> Clone for Candidate<K> {
    fn clone(&self) -> Self {
        match self {
            Candidate::Create(text) => Candidate::Create(text.clone()),
            Candidate::Existing(option) => Candidate::Existing(option.clone()),
        }
    }
}

impl<K: OptionKeys> std::fmt::Debug for Candidate<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Candidate::Create(text) => f.debug_tuple("Create").field(text).finish(),
            Candidate::Existing(option) => f.debug_tuple("Existing").field(option).finish(),
        }
    }
}

/// A pending option creation
pub struct CreateRequest<K: OptionKeys = DefaultKeys> {
    pub ticket: u64,
    /// Provisional option built from the search text
    pub option: SelectOption<K>,
}

impl<K: OptionKeys> std::fmt::Debug for CreateRequest<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateRequest")
            .field("ticket", &self.ticket)
            .field("option", &self.option)
            .finish()
    }
}

/// Outcome of a keyboard or pointer action
#[derive(Debug)]
pub enum SelectAction<K: OptionKeys = DefaultKeys> {
    None,
    /// Commit this selection to the form
    Commit(Selection<K>),
    /// Run the create callback for this request
    Create(CreateRequest<K>),
}

/// Whether the field is waiting on a create callback
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectStatus {
    #[default]
    Idle,
    Creating {
        ticket: u64,
    },
}

/// Local UI state of a select field
pub struct SelectState<K: OptionKeys = DefaultKeys> {
    config: SelectConfig,
    options: Vec<SelectOption<K>>,
    /// Options created at runtime, merged after `options`
    user_options: Vec<SelectOption<K>>,
    search: TextInputState,
    open: bool,
    highlighted: Option<usize>,
    active_chip: Option<usize>,
    status: SelectStatus,
    next_ticket: u64,
    /// Form reset count last seen by `sync_form_reset`
    form_resets: u64,
}

impl<K: OptionKeys> SelectState<K> {
    pub fn new(options: Vec<SelectOption<K>>, config: SelectConfig) -> Self {
        Self {
            config,
            options,
            user_options: Vec::new(),
            search: TextInputState::default(),
            open: false,
            highlighted: None,
            active_chip: None,
            status: SelectStatus::Idle,
            next_ticket: 1,
            form_resets: 0,
        }
    }

    // ==================== Getters ====================

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn search(&self) -> &TextInputState {
        &self.search
    }

    pub fn search_term(&self) -> &str {
        self.search.value()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn active_chip(&self) -> Option<usize> {
        self.active_chip
    }

    pub fn status(&self) -> SelectStatus {
        self.status
    }

    /// A create callback is in flight
    pub fn is_busy(&self) -> bool {
        matches!(self.status, SelectStatus::Creating { .. })
    }

    pub fn is_interactive(&self) -> bool {
        !self.is_busy() && !self.config.disabled && !self.config.read_only
    }

    /// Search input is shown
    pub fn search_enabled(&self) -> bool {
        self.config.searchable || self.config.createable
    }

    pub fn user_options(&self) -> &[SelectOption<K>] {
        &self.user_options
    }

    /// Caller options followed by created ones
    pub fn merged_options(&self) -> impl Iterator<Item = &SelectOption<K>> {
        self.options.iter().chain(self.user_options.iter())
    }

    pub fn set_options(&mut self, options: Vec<SelectOption<K>>) {
        self.options = options;
        self.highlighted = None;
    }

    pub fn set_config(&mut self, config: SelectConfig) {
        self.config = config;
    }

    // ==================== Candidates ====================

    fn find_by_label(&self, text: &str) -> Option<&SelectOption<K>> {
        self.merged_options().find(|o| o.label_eq(text))
    }

    /// Trimmed search text when it would create a new option
    pub fn create_label(&self) -> Option<String> {
        if !self.config.createable {
            return None;
        }
        let text = self.search.value().trim();
        if text.is_empty() || self.find_by_label(text).is_some() {
            return None;
        }
        Some(text.to_string())
    }

    /// Entries of the open list
    pub fn candidates(&self, selection: &Selection<K>) -> Vec<Candidate<K>> {
        let query = if self.search_enabled() {
            self.search.value()
        } else {
            ""
        };

        let mut candidates: Vec<Candidate<K>> = Vec::new();
        if let Some(text) = self.create_label() {
            candidates.push(Candidate::Create(text));
        }
        candidates.extend(
            filter_options(self.merged_options(), query)
                .into_iter()
                .filter(|o| !(self.config.multi && selection.contains_value(&o.value)))
                .cloned()
                .map(Candidate::Existing),
        );
        candidates
    }

    pub fn highlighted_candidate(&self, selection: &Selection<K>) -> Option<Candidate<K>> {
        let index = self.highlighted?;
        self.candidates(selection).into_iter().nth(index)
    }

    // ==================== List ====================

    pub fn open(&mut self) {
        if self.is_interactive() {
            self.open = true;
        }
    }

    /// Close the list; the search text and highlight are cleared
    pub fn close(&mut self) {
        self.open = false;
        self.search.clear();
        self.highlighted = None;
    }

    pub fn toggle_open(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn highlight_next(&mut self, selection: &Selection<K>) {
        if !self.is_interactive() {
            return;
        }
        if !self.open {
            self.open = true;
        }
        let count = self.candidates(selection).len();
        if count == 0 {
            self.highlighted = None;
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(i) if i + 1 < count => i + 1,
            _ => 0,
        });
    }

    pub fn highlight_prev(&mut self, selection: &Selection<K>) {
        if !self.is_interactive() {
            return;
        }
        if !self.open {
            self.open = true;
        }
        let count = self.candidates(selection).len();
        if count == 0 {
            self.highlighted = None;
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(i) if i > 0 && i <= count => i - 1,
            _ => count - 1,
        });
    }

    pub fn set_highlighted(&mut self, index: Option<usize>) {
        self.highlighted = index;
    }

    // ==================== Search Input ====================

    /// Type into the search input
    pub fn insert_search(&mut self, text: &str) -> bool {
        if !self.is_interactive() || !self.search_enabled() {
            return false;
        }
        let changed = self.search.insert_str(text);
        if changed {
            self.open = true;
            self.highlighted = None;
            self.active_chip = None;
        }
        changed
    }

    pub fn set_search_term(&mut self, text: &str) {
        if !self.is_interactive() || !self.search_enabled() {
            return;
        }
        self.search.set_value(text);
        self.highlighted = None;
    }

    /// Left arrow: moves in the search text, then onto the chips
    pub fn move_left(&mut self, selection: &Selection<K>) {
        if !self.search.cursor_at_start() {
            self.search.move_left();
            return;
        }
        if !self.config.multi || selection.is_empty() {
            return;
        }
        self.active_chip = Some(match self.active_chip {
            Some(i) => i.saturating_sub(1),
            None => selection.len() - 1,
        });
    }

    /// Right arrow: moves across the chips back to the search text
    pub fn move_right(&mut self, selection: &Selection<K>) {
        match self.active_chip {
            Some(i) if i + 1 < selection.len() => self.active_chip = Some(i + 1),
            Some(_) => self.active_chip = None,
            None => self.search.move_right(),
        }
    }

    // ==================== Selection Changes ====================

    /// Pick an option from the list
    pub fn choose(
        &mut self,
        option: SelectOption<K>,
        selection: &Selection<K>,
    ) -> Option<Selection<K>> {
        if !self.is_interactive() {
            return None;
        }
        if self.config.multi {
            self.search.clear();
            self.highlighted = None;
            if selection.contains_value(&option.value) {
                return Some(selection.without_value(&option.value));
            }
            return Some(selection.with(option));
        }
        self.close();
        Some(Selection::Single(Some(option)))
    }

    /// Commit the candidate at `index` of the open list
    pub fn choose_candidate(&mut self, index: usize, selection: &Selection<K>) -> SelectAction<K> {
        match self.candidates(selection).into_iter().nth(index) {
            Some(Candidate::Create(text)) => self
                .begin_create(&text)
                .map_or(SelectAction::None, SelectAction::Create),
            Some(Candidate::Existing(option)) => self
                .choose(option, selection)
                .map_or(SelectAction::None, SelectAction::Commit),
            None => SelectAction::None,
        }
    }

    /// Enter key
    pub fn enter(&mut self, selection: &Selection<K>) -> SelectAction<K> {
        if !self.is_interactive() {
            return SelectAction::None;
        }
        if !self.open {
            self.open = true;
            return SelectAction::None;
        }
        if let Some(index) = self.highlighted {
            return self.choose_candidate(index, selection);
        }

        let text = self.search.value().trim().to_string();
        if !self.config.createable || text.is_empty() {
            return SelectAction::None;
        }
        if let Some(existing) = self.find_by_label(&text).cloned() {
            if self.config.multi && selection.contains_value(&existing.value) {
                self.search.clear();
                return SelectAction::None;
            }
            return self
                .choose(existing, selection)
                .map_or(SelectAction::None, SelectAction::Commit);
        }
        self.begin_create(&text)
            .map_or(SelectAction::None, SelectAction::Create)
    }

    /// Start creating an option from `text`; the field is busy until `finish_create`
    pub fn begin_create(&mut self, text: &str) -> Option<CreateRequest<K>> {
        if !self.is_interactive() || !self.config.createable {
            return None;
        }
        let text = text.trim();
        if text.is_empty() || self.find_by_label(text).is_some() {
            return None;
        }

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.status = SelectStatus::Creating { ticket };
        tracing::debug!(ticket, label = text, "Creating select option");

        Some(CreateRequest {
            ticket,
            option: SelectOption::from_text(text),
        })
    }

    /// Resolve a create request.
    ///
    /// On success the option joins the merged list and is selected. On failure the
    /// error is logged and nothing changes.
    pub fn finish_create(
        &mut self,
        ticket: u64,
        result: anyhow::Result<SelectOption<K>>,
        selection: &Selection<K>,
    ) -> Option<Selection<K>> {
        if self.status != (SelectStatus::Creating { ticket }) {
            tracing::debug!(ticket, "Dropping stale create result");
            return None;
        }
        self.status = SelectStatus::Idle;

        let result = result.and_then(|option| {
            if option.value.trim().is_empty() {
                return Err(Error::CreateOption {
                    message: format!("option {:?} has an empty value", option.label),
                }
                .into());
            }
            Ok(option)
        });
        let option = match result {
            Ok(option) => option,
            Err(e) => {
                tracing::error!("Failed to create option: {e:#}");
                return None;
            }
        };

        if !self.merged_options().any(|o| o.value == option.value) {
            self.user_options.push(option.clone());
        }
        self.search.clear();
        self.highlighted = None;

        if self.config.multi {
            if selection.contains_value(&option.value) {
                return None;
            }
            return Some(selection.with(option));
        }
        self.close();
        Some(Selection::Single(Some(option)))
    }

    /// Close control of a chip
    pub fn remove_chip(&mut self, index: usize, selection: &Selection<K>) -> Option<Selection<K>> {
        if !self.is_interactive() || index >= selection.len() {
            return None;
        }
        self.active_chip = match self.active_chip {
            Some(active) if active == index => index.checked_sub(1),
            Some(active) if active > index => Some(active - 1),
            other => other,
        };
        Some(selection.without_index(index))
    }

    pub fn focus_chip(&mut self, index: Option<usize>, selection: &Selection<K>) {
        self.active_chip = index.filter(|&i| i < selection.len());
    }

    /// Backspace key.
    ///
    /// Edits the search text while there is text before the cursor. At the start of the
    /// input it removes the active chip (the last one when none is active) and moves the
    /// active index one to the left; past the first chip focus returns to the input.
    pub fn backspace(&mut self, selection: &Selection<K>) -> Option<Selection<K>> {
        if !self.is_interactive() {
            return None;
        }
        if !self.search.cursor_at_start() {
            self.search.backspace();
            self.highlighted = None;
            return None;
        }
        if !self.config.multi || selection.is_empty() {
            return None;
        }

        let index = self
            .active_chip
            .filter(|&i| i < selection.len())
            .unwrap_or(selection.len() - 1);
        self.active_chip = index.checked_sub(1);
        Some(selection.without_index(index))
    }

    /// Clear control of the trigger
    pub fn clear(&mut self, selection: &Selection<K>) -> Option<Selection<K>> {
        if !self.is_interactive() || selection.is_empty() {
            return None;
        }
        self.active_chip = None;
        Some(Selection::empty(self.config.multi))
    }

    /// Drop transient state; a pending create can no longer resolve
    pub fn reset(&mut self) {
        self.close();
        self.active_chip = None;
        if let SelectStatus::Creating { ticket } = self.status {
            tracing::debug!(ticket, "Abandoning pending create");
        }
        self.status = SelectStatus::Idle;
    }

    /// Reset when the bound form has been reset since the last call
    pub fn sync_form_reset(&mut self, form_resets: u64) -> bool {
        if form_resets == self.form_resets {
            return false;
        }
        self.form_resets = form_resets;
        self.reset();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::form_state::FormState;
    use futures::executor::block_on;
    use futures::future::{FutureExt, LocalBoxFuture};

    fn options() -> Vec<SelectOption> {
        vec![
            SelectOption::new("react", "React"),
            SelectOption::new("vue", "Vue"),
            SelectOption::new("angular", "Angular"),
            SelectOption::new("preact", "Preact"),
        ]
    }

    fn multi_createable() -> SelectState {
        SelectState::new(
            options(),
            SelectConfig::default().multi(true).createable(true),
        )
    }

    fn labels(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(Candidate::label).collect()
    }

    #[test]
    fn form_reset_abandons_pending_create() {
        let mut form = FormState::default();
        let mut state = multi_createable();
        assert!(!state.sync_form_reset(form.reset_count()));

        state.open();
        state.insert_search("Svelte");
        let request = state.begin_create("Svelte").expect("create starts");
        assert!(state.is_busy());

        form.reset(None);
        assert!(state.sync_form_reset(form.reset_count()));
        assert!(!state.is_busy());
        assert!(!state.is_open());
        assert_eq!(state.search_term(), "");

        let selection = Selection::empty(true);
        let outcome = state.finish_create(request.ticket, Ok(request.option), &selection);
        assert!(outcome.is_none());
        assert!(state.user_options().is_empty());
        assert!(!state.sync_form_reset(form.reset_count()));
    }

    #[test]
    fn searchable_defaults_from_option_count() {
        assert!(!SelectConfig::for_options(10, DEFAULT_SEARCHABLE_THRESHOLD).searchable);
        assert!(SelectConfig::for_options(11, DEFAULT_SEARCHABLE_THRESHOLD).searchable);
    }

    #[test]
    fn search_filters_candidates() {
        let mut state = SelectState::new(options(), SelectConfig::default().searchable(true));
        state.insert_search("act");
        let candidates = state.candidates(&Selection::empty(false));
        assert_eq!(labels(&candidates), vec!["React", "Preact"]);
    }

    #[test]
    fn search_is_ignored_when_input_is_hidden() {
        let mut state = SelectState::new(options(), SelectConfig::default());
        assert!(!state.insert_search("act"));
        assert_eq!(state.candidates(&Selection::empty(false)).len(), 4);
    }

    #[test]
    fn create_candidate_is_prepended_for_new_text() {
        let mut state = multi_createable();
        state.insert_search("  Svelte ");
        let candidates = state.candidates(&Selection::empty(true));
        assert!(candidates[0].is_create());
        assert_eq!(candidates[0].label(), "Svelte");
    }

    #[test]
    fn exact_label_match_suppresses_create_candidate() {
        let mut state = multi_createable();
        state.insert_search("rEaCt");
        let candidates = state.candidates(&Selection::empty(true));
        assert!(candidates.iter().all(|c| !c.is_create()));
        assert_eq!(state.begin_create("REACT").map(|r| r.ticket), None);
    }

    #[test]
    fn blank_text_never_creates() {
        let mut state = multi_createable();
        state.insert_search("   ");
        assert!(state.create_label().is_none());
        assert!(state.begin_create("   ").is_none());
    }

    #[test]
    fn multi_excludes_selected_options() {
        let state = multi_createable();
        let selection = Selection::Multi(vec![SelectOption::new("vue", "Vue")]);
        let candidates = state.candidates(&selection);
        assert_eq!(labels(&candidates), vec!["React", "Angular", "Preact"]);
    }

    #[test]
    fn single_choose_replaces_and_closes() {
        let mut state = SelectState::new(options(), SelectConfig::default());
        state.open();
        let selection = Selection::Single(Some(SelectOption::new("vue", "Vue")));
        let next = state
            .choose(SelectOption::new("react", "React"), &selection)
            .expect("commit");
        assert_eq!(next.labels(), vec!["React"]);
        assert!(!state.is_open());
    }

    #[test]
    fn multi_choose_appends_and_stays_open() {
        let mut state = multi_createable();
        state.open();
        let selection = Selection::Multi(vec![SelectOption::new("vue", "Vue")]);
        let next = state
            .choose(SelectOption::new("react", "React"), &selection)
            .expect("commit");
        assert_eq!(next.labels(), vec!["Vue", "React"]);
        assert!(state.is_open());
    }

    #[test]
    fn choosing_selected_option_again_removes_it() {
        let mut state = multi_createable();
        let selection = Selection::Multi(vec![
            SelectOption::new("vue", "Vue"),
            SelectOption::new("react", "React"),
        ]);
        let next = state
            .choose(SelectOption::new("vue", "Vue"), &selection)
            .expect("commit");
        assert_eq!(next.labels(), vec!["React"]);
    }

    #[test]
    fn keyboard_highlight_wraps() {
        let mut state = SelectState::new(options(), SelectConfig::default());
        let selection = Selection::empty(false);
        state.highlight_prev(&selection);
        assert!(state.is_open());
        assert_eq!(state.highlighted(), Some(3));
        state.highlight_next(&selection);
        assert_eq!(state.highlighted(), Some(0));
        state.highlight_next(&selection);

        match state.enter(&selection) {
            SelectAction::Commit(next) => assert_eq!(next.labels(), vec!["Vue"]),
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn enter_opens_closed_list() {
        let mut state = SelectState::new(options(), SelectConfig::default());
        assert!(matches!(state.enter(&Selection::empty(false)), SelectAction::None));
        assert!(state.is_open());
    }

    #[test]
    fn enter_with_existing_label_selects_instead_of_creating() {
        let mut state = multi_createable();
        state.insert_search("angular");
        match state.enter(&Selection::empty(true)) {
            SelectAction::Commit(next) => assert_eq!(next.labels(), vec!["Angular"]),
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn escape_clears_search() {
        let mut state = multi_createable();
        state.insert_search("sv");
        state.close();
        assert_eq!(state.search_term(), "");
        assert!(!state.is_open());
    }

    #[test]
    fn create_success_merges_and_selects() {
        let mut state = multi_createable();
        state.insert_search("Svelte");
        let selection = Selection::Multi(vec![SelectOption::new("vue", "Vue")]);

        let request = match state.enter(&selection) {
            SelectAction::Create(request) => request,
            other => panic!("unexpected action: {other:?}"),
        };
        assert!(state.is_busy());
        assert!(!state.is_interactive());

        let created = SelectOption::new("svelte-id", "Svelte");
        let next = state
            .finish_create(request.ticket, Ok(created), &selection)
            .expect("selection");

        assert!(!state.is_busy());
        assert_eq!(next.labels(), vec!["Vue", "Svelte"]);
        assert_eq!(state.user_options().len(), 1);
        assert_eq!(state.search_term(), "");
    }

    #[test]
    fn interaction_is_disabled_while_creating() {
        let mut state = multi_createable();
        let selection = Selection::empty(true);
        let _request = state.begin_create("Svelte").expect("request");
        assert!(!state.insert_search("x"));
        assert!(state.choose(SelectOption::new("vue", "Vue"), &selection).is_none());
        assert!(matches!(state.enter(&selection), SelectAction::None));
    }

    #[test]
    fn failing_create_leaves_selection_unchanged() {
        let create = |option: SelectOption| -> LocalBoxFuture<'static, anyhow::Result<SelectOption>> {
            async move { Err::<SelectOption, _>(anyhow::anyhow!("server rejected {}", option.label)) }
                .boxed_local()
        };

        let mut state = multi_createable();
        let selection = Selection::Multi(vec![SelectOption::new("vue", "Vue")]);
        let mut on_change_calls = 0;

        let request = state.begin_create("Svelte").expect("request");
        let result = block_on(create(request.option.clone()));
        if let Some(next) = state.finish_create(request.ticket, result, &selection) {
            on_change_calls += 1;
            let _ = next;
        }

        assert_eq!(on_change_calls, 0);
        assert!(!state.is_busy());
        assert!(state.user_options().is_empty());
        assert!(
            state
                .candidates(&selection)
                .iter()
                .all(|c| c.label() != "Svelte" || c.is_create())
        );
    }

    #[test]
    fn created_option_without_value_is_rejected() {
        let mut state = multi_createable();
        let selection = Selection::empty(true);
        let request = state.begin_create("Svelte").expect("request");
        let outcome =
            state.finish_create(request.ticket, Ok(SelectOption::new("  ", "Svelte")), &selection);
        assert!(outcome.is_none());
        assert!(state.user_options().is_empty());
    }

    #[test]
    fn stale_create_result_is_dropped() {
        let mut state = multi_createable();
        let selection = Selection::empty(true);
        let request = state.begin_create("Svelte").expect("request");
        state.reset();
        let outcome = state.finish_create(request.ticket, Ok(request.option), &selection);
        assert!(outcome.is_none());
        assert!(state.user_options().is_empty());
    }

    #[test]
    fn backspace_removes_chips_in_reverse_order() {
        let mut state = multi_createable();
        let mut selection = Selection::Multi(vec![
            SelectOption::new("react", "React"),
            SelectOption::new("vue", "Vue"),
            SelectOption::new("angular", "Angular"),
        ]);

        let mut removed = Vec::new();
        for _ in 0..3 {
            let before = selection.labels().iter().map(|s| s.to_string()).collect::<Vec<_>>();
            selection = state.backspace(&selection).expect("chip removed");
            let gone = before
                .into_iter()
                .find(|l| !selection.labels().contains(&l.as_str()))
                .expect("one label removed");
            removed.push(gone);
        }

        assert_eq!(removed, vec!["Angular", "Vue", "React"]);
        assert!(selection.is_empty());
        assert_eq!(state.active_chip(), None);
        assert!(state.backspace(&selection).is_none());
    }

    #[test]
    fn backspace_edits_search_text_first() {
        let mut state = multi_createable();
        let selection = Selection::Multi(vec![SelectOption::new("vue", "Vue")]);
        state.insert_search("ab");
        assert!(state.backspace(&selection).is_none());
        assert_eq!(state.search_term(), "a");
    }

    #[test]
    fn backspace_from_focused_chip_wraps_to_input() {
        let mut state = multi_createable();
        let selection = Selection::Multi(vec![
            SelectOption::new("react", "React"),
            SelectOption::new("vue", "Vue"),
        ]);
        state.focus_chip(Some(0), &selection);
        let next = state.backspace(&selection).expect("removed");
        assert_eq!(next.labels(), vec!["Vue"]);
        assert_eq!(state.active_chip(), None);
    }

    #[test]
    fn chip_close_control_removes_that_chip() {
        let mut state = multi_createable();
        let selection = Selection::Multi(vec![
            SelectOption::new("react", "React"),
            SelectOption::new("vue", "Vue"),
            SelectOption::new("angular", "Angular"),
        ]);
        state.focus_chip(Some(2), &selection);
        let next = state.remove_chip(0, &selection).expect("removed");
        assert_eq!(next.labels(), vec!["Vue", "Angular"]);
        assert_eq!(state.active_chip(), Some(1));
    }

    #[test]
    fn arrows_walk_chips() {
        let mut state = multi_createable();
        let selection = Selection::Multi(vec![
            SelectOption::new("react", "React"),
            SelectOption::new("vue", "Vue"),
        ]);
        state.move_left(&selection);
        assert_eq!(state.active_chip(), Some(1));
        state.move_left(&selection);
        assert_eq!(state.active_chip(), Some(0));
        state.move_right(&selection);
        state.move_right(&selection);
        assert_eq!(state.active_chip(), None);
    }

    #[test]
    fn clear_empties_selection() {
        let mut state = SelectState::new(options(), SelectConfig::default());
        let selection = Selection::Single(Some(SelectOption::new("vue", "Vue")));
        assert_eq!(state.clear(&selection), Some(Selection::Single(None)));
        assert_eq!(state.clear(&Selection::Single(None)), None);
    }

    #[test]
    fn disabled_select_ignores_input() {
        let mut state = SelectState::new(options(), SelectConfig::default().disabled(true));
        state.open();
        assert!(!state.is_open());
        assert!(state.choose(SelectOption::new("vue", "Vue"), &Selection::empty(false)).is_none());
    }
}
