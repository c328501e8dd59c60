use log::{debug, trace};

use crate::index::OptionIndex;
use crate::menu::MenuEntries;
use crate::text::normalize;

/// How the two option names of a directive are matched against entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Normalized option must equal the directive text.
    Exact,
    /// Normalized option must contain the directive text.
    Contains,
}

/// "Promote `promote` over `current`" for entries targeting `target`.
///
/// All three strings are already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapDirective {
    pub promote: String,
    pub current: String,
    pub target: String,
    pub mode: MatchMode,
}

impl SwapDirective {
    pub fn exact(
        promote: impl Into<String>,
        current: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            promote: promote.into(),
            current: current.into(),
            target: target.into(),
            mode: MatchMode::Exact,
        }
    }

    pub fn contains(
        promote: impl Into<String>,
        current: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            mode: MatchMode::Contains,
            ..Self::exact(promote, current, target)
        }
    }
}

/// Applies directives to one tick's working copy, keeping the option index
/// in step with every exchange.
#[derive(Debug, Clone)]
pub struct SwapExecutor {
    index: OptionIndex,
    swaps: usize,
}

impl SwapExecutor {
    pub fn new(entries: &MenuEntries) -> Self {
        Self {
            index: OptionIndex::build(entries),
            swaps: 0,
        }
    }

    /// Exchanges the `promote` and `current` entries if both exist at or
    /// below `limit`. `promote` is searched for only below the `current`
    /// entry that was found, so it can never be pulled downwards.
    ///
    /// Returns `false` without touching `entries` when either is missing.
    pub fn apply(
        &mut self,
        entries: &mut MenuEntries,
        directive: &SwapDirective,
        limit: usize,
    ) -> bool {
        let Some(current) = self.find(
            entries,
            limit,
            &directive.current,
            &directive.target,
            directive.mode,
        ) else {
            return false;
        };
        let Some(promoted) = self.find(
            entries,
            current,
            &directive.promote,
            &directive.target,
            directive.mode,
        ) else {
            trace!(
                "no '{}' below '{}' for '{}'",
                directive.promote,
                directive.current,
                directive.target
            );
            return false;
        };
        if promoted == current {
            return false;
        }

        entries.swap(promoted, current);
        self.index.rebuild(entries);
        self.swaps += 1;
        debug!(
            "promoted '{}' over '{}' on '{}' ({} -> {})",
            directive.promote, directive.current, directive.target, promoted, current
        );
        true
    }

    /// Locates `option` on `target`, scanning from `limit` towards the bottom
    /// of the menu and stopping at the first hit.
    pub fn find(
        &self,
        entries: &MenuEntries,
        limit: usize,
        option: &str,
        target: &str,
        mode: MatchMode,
    ) -> Option<usize> {
        match mode {
            MatchMode::Exact => self.index.find(entries, limit, option, target),
            MatchMode::Contains => entries
                .iter()
                .enumerate()
                .skip(limit)
                .find(|(_, entry)| {
                    normalize(&entry.option).contains(option) && normalize(&entry.target) == target
                })
                .map(|(position, _)| position),
        }
    }

    pub fn swaps(&self) -> usize {
        self.swaps
    }

    pub fn index(&self) -> &OptionIndex {
        &self.index
    }
}

/// One-shot form of [`SwapExecutor::apply`] over the whole menu.
pub fn apply_directive(entries: &mut MenuEntries, directive: &SwapDirective) -> bool {
    SwapExecutor::new(entries).apply(entries, directive, 0)
}
