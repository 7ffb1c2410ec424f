//! Modal form state machine.
//!
//! One controller per entity form (domain, provider). A form is either
//! closed, open for creating a new record, or open for editing a specific
//! stored record; submit and cancel both return it to closed. Opening for
//! edit pre-fills the draft from the stored record.

/// Where a form currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Closed,
    OpenForCreate,
    /// Editing the stored record with this id.
    OpenForEdit(String),
}

/// Generic modal-form controller holding the state and the working draft.
pub struct FormController<D: Clone + Default> {
    state: FormState,
    draft: D,
}

impl<D: Clone + Default> FormController<D> {
    pub fn new() -> Self {
        Self {
            state: FormState::Closed,
            draft: D::default(),
        }
    }

    /// Opens the form with an empty draft for a new record.
    pub fn open_for_create(&mut self) {
        self.state = FormState::OpenForCreate;
        self.draft = D::default();
    }

    /// Opens the form pre-filled from an existing record.
    pub fn open_for_edit(&mut self, id: impl Into<String>, draft: D) {
        self.state = FormState::OpenForEdit(id.into());
        self.draft = draft;
    }

    /// Discards the draft and closes the form.
    pub fn cancel(&mut self) {
        self.state = FormState::Closed;
        self.draft = D::default();
    }

    /// Closes the form after a successful submit. A failed submit must NOT
    /// call this; the form stays open with the draft intact.
    pub fn submitted(&mut self) {
        self.state = FormState::Closed;
        self.draft = D::default();
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != FormState::Closed
    }

    /// Id of the record being edited, when in edit mode.
    pub fn editing_id(&self) -> Option<&str> {
        match &self.state {
            FormState::OpenForEdit(id) => Some(id),
            _ => None,
        }
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }
}

impl<D: Clone + Default> Default for FormController<D> {
    fn default() -> Self {
        Self::new()
    }
}
