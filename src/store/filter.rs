use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::models::{Context, Transaction};

/// When a date bound takes effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateWindowPolicy {
    /// The window applies only when both `start_date` and `end_date` are set;
    /// a lone bound is ignored.
    #[default]
    RequireBothBounds,
    /// A lone start keeps dates on or after it, a lone end keeps dates on or
    /// before it.
    AllowOpenEnded
}

/// How the date window and the context set combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterComposition {
    /// A transaction outside the date window is excluded outright; otherwise
    /// context membership decides (when contexts are given).
    #[default]
    DateThenContext,
    /// When contexts are given, membership alone decides and the date window
    /// is not consulted. Without contexts the date window decides.
    ContextOverridesDate
}

/// Query options for `TransactionStore::filtered`. The default filter keeps
/// every transaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub contexts: BTreeSet<Context>,
    pub date_window: DateWindowPolicy,
    pub composition: FilterComposition
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inclusive on both ends.
    pub fn between(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self::default().with_start_date(start_date).with_end_date(end_date)
    }

    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn with_contexts(mut self, contexts: impl IntoIterator<Item = Context>) -> Self {
        self.contexts = contexts.into_iter().collect();
        self
    }

    pub fn with_date_window(mut self, date_window: DateWindowPolicy) -> Self {
        self.date_window = date_window;
        self
    }

    pub fn with_composition(mut self, composition: FilterComposition) -> Self {
        self.composition = composition;
        self
    }

    /// False only when both bounds are set and the start is after the end.
    pub fn has_valid_date_range(&self) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => start <= end,
            _ => true
        }
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        let context_selected = || self.contexts.contains(&transaction.context());

        match self.composition {
            FilterComposition::DateThenContext => {
                if !self.within_date_window(transaction.date()) {
                    return false;
                }

                self.contexts.is_empty() || context_selected()
            }
            FilterComposition::ContextOverridesDate => {
                if self.contexts.is_empty() {
                    self.within_date_window(transaction.date())
                } else {
                    context_selected()
                }
            }
        }
    }

    fn within_date_window(&self, date: NaiveDate) -> bool {
        match (self.start_date, self.end_date, self.date_window) {
            (Some(start), Some(end), _) => start <= date && date <= end,
            (Some(start), None, DateWindowPolicy::AllowOpenEnded) => start <= date,
            (None, Some(end), DateWindowPolicy::AllowOpenEnded) => date <= end,
            _ => true
        }
    }
}
