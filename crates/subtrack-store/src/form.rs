//! Add/edit form controller.
//!
//! A two-state machine over the store: `Creating` (the default) appends on
//! submit, `Editing(id)` replaces the record it was opened on. Validation
//! runs before either, and a failed submission leaves both the store and
//! the form untouched so the user can correct and re-attempt.

use subtrack_core::{Result, Subscription, SubscriptionDraft, SubscriptionId};

use crate::backend::StorageBackend;
use crate::store::SubscriptionStore;

/// Which submission the form will perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    /// Submitting appends a new record.
    #[default]
    Creating,
    /// Submitting replaces the record with this id.
    Editing(SubscriptionId),
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// A new record was appended under this id.
    Created(SubscriptionId),
    /// The record with this id was replaced.
    Updated(SubscriptionId),
}

/// The form's state between user actions: raw field text plus mode.
#[derive(Debug, Default)]
pub struct FormController {
    draft: SubscriptionDraft,
    mode: FormMode,
}

impl FormController {
    /// Creates an empty form in `Creating` mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode.
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// The raw form fields.
    pub fn draft(&self) -> &SubscriptionDraft {
        &self.draft
    }

    /// Mutable access to the raw form fields, for the input surface.
    pub fn draft_mut(&mut self) -> &mut SubscriptionDraft {
        &mut self.draft
    }

    /// Label for the submit affordance, reflecting the current mode.
    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Creating => "Add Subscription",
            FormMode::Editing(_) => "Update Subscription",
        }
    }

    /// Transitions into `Editing(id)`, pre-filling the fields from the
    /// record's current values.
    pub fn begin_edit<B: StorageBackend>(
        &mut self,
        store: &SubscriptionStore<B>,
        id: SubscriptionId,
    ) -> Result<()> {
        let record: &Subscription = store
            .get(id)
            .ok_or_else(|| subtrack_core::Error::not_found(id))?;
        self.draft = SubscriptionDraft::prefill(record);
        self.mode = FormMode::Editing(id);
        Ok(())
    }

    /// Abandons an in-progress edit and returns to an empty `Creating` form.
    ///
    /// Choosing to add a new record instead of finishing an edit is always
    /// available.
    pub fn cancel_edit(&mut self) {
        self.draft.clear();
        self.mode = FormMode::Creating;
    }

    /// Validates the draft and applies it to the store.
    ///
    /// In `Creating` mode a valid draft is appended; in `Editing(id)` it
    /// replaces that record. On success the form is cleared and returns to
    /// `Creating`. On any failure (validation or persistence) the form keeps
    /// its fields and mode so the action can be re-attempted.
    pub fn submit<B: StorageBackend>(
        &mut self,
        store: &mut SubscriptionStore<B>,
    ) -> Result<Submission> {
        let fields = self.draft.validate()?;

        let submission = match self.mode {
            FormMode::Creating => Submission::Created(store.add(fields)?),
            FormMode::Editing(id) => {
                store.update(id, fields)?;
                Submission::Updated(id)
            }
        };

        self.draft.clear();
        self.mode = FormMode::Creating;
        Ok(submission)
    }
}
