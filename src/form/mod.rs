//! Registration form state: field editors, validity marks and the submit
//! protocol. Validation itself lives in [`validator`]; this module wires the
//! verdicts to the fields and keeps the confirm-password mark honest when the
//! password underneath it changes.

pub mod validator;

use crate::app::state::InputState;
use validator::{
    validate_age, validate_confirm, validate_email, validate_name, validate_password, Verdict,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Name,
    Email,
    Password,
    Confirm,
    Age,
}

impl FieldId {
    pub const ALL: [FieldId; 5] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Password,
        FieldId::Confirm,
        FieldId::Age,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Email => "Email",
            FieldId::Password => "Password",
            FieldId::Confirm => "Confirm password",
            FieldId::Age => "Age",
        }
    }

    /// Secret fields render their value obfuscated.
    pub fn is_secret(&self) -> bool {
        matches!(self, FieldId::Password | FieldId::Confirm)
    }
}

/// One form field: a line editor plus its last verdict. `None` means the
/// field has not been touched yet and carries no presentation mark.
#[derive(Debug, Default)]
pub struct Field {
    pub editor: InputState,
    pub verdict: Option<Verdict>,
}

impl Field {
    pub fn is_marked_valid(&self) -> bool {
        self.verdict.is_some_and(|v| v.is_valid())
    }

    pub fn error_message(&self) -> &'static str {
        match self.verdict {
            Some(v) => v.message(),
            None => "",
        }
    }
}

/// Row selection inside the form panel: the five fields plus the submit row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    Field(FieldId),
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormResult {
    Success,
    Failure,
}

#[derive(Debug, Default)]
pub struct FormState {
    name: Field,
    email: Field,
    password: Field,
    confirm: Field,
    age: Field,
    pub selected: usize,
    pub result: Option<FormResult>,
}

const ROW_COUNT: usize = FieldId::ALL.len() + 1;

impl FormState {
    pub fn field(&self, id: FieldId) -> &Field {
        match id {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::Confirm => &self.confirm,
            FieldId::Age => &self.age,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut Field {
        match id {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Password => &mut self.password,
            FieldId::Confirm => &mut self.confirm,
            FieldId::Age => &mut self.age,
        }
    }

    pub fn value(&self, id: FieldId) -> &str {
        &self.field(id).editor.text
    }

    pub fn selected_row(&self) -> FormRow {
        match FieldId::ALL.get(self.selected) {
            Some(id) => FormRow::Field(*id),
            None => FormRow::Submit,
        }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % ROW_COUNT;
    }

    pub fn select_prev(&mut self) {
        self.selected = if self.selected == 0 {
            ROW_COUNT - 1
        } else {
            self.selected - 1
        };
    }

    /// Re-validate one field from its current text. Changing the password
    /// also re-checks a touched confirm field so its mark never claims
    /// agreement with a password that no longer matches.
    pub fn validate_field(&mut self, id: FieldId) {
        let verdict = self.run_validator(id);
        self.field_mut(id).verdict = Some(verdict);
        if id == FieldId::Password && self.confirm.verdict.is_some() {
            let confirm_verdict = self.run_validator(FieldId::Confirm);
            self.confirm.verdict = Some(confirm_verdict);
        }
    }

    fn run_validator(&self, id: FieldId) -> Verdict {
        match id {
            FieldId::Name => validate_name(self.value(FieldId::Name)),
            FieldId::Email => validate_email(self.value(FieldId::Email)),
            FieldId::Password => validate_password(self.value(FieldId::Password)),
            FieldId::Confirm => {
                validate_confirm(self.value(FieldId::Confirm), self.value(FieldId::Password))
            }
            FieldId::Age => validate_age(self.value(FieldId::Age)),
        }
    }

    /// Full re-validation of every field, regardless of what changed since
    /// the last keystroke. Returns whether the whole form is valid.
    pub fn validate_all(&mut self) -> bool {
        let mut all_valid = true;
        for id in FieldId::ALL {
            let verdict = self.run_validator(id);
            all_valid &= verdict.is_valid();
            self.field_mut(id).verdict = Some(verdict);
        }
        all_valid
    }

    /// Submit protocol: re-run all validators, record the outcome. On failure
    /// every value and mark stays put for in-place correction.
    pub fn submit(&mut self) -> FormResult {
        let outcome = if self.validate_all() {
            FormResult::Success
        } else {
            FormResult::Failure
        };
        self.result = Some(outcome);
        outcome
    }

    /// Reset values, marks and the result banner (the post-success clear).
    pub fn clear(&mut self) {
        for id in FieldId::ALL {
            let field = self.field_mut(id);
            field.editor.clear();
            field.verdict = None;
        }
        self.result = None;
    }

    /// Apply an edit to the selected field and re-validate it live. No-op on
    /// the submit row.
    pub fn edit_selected(&mut self, edit: impl FnOnce(&mut InputState)) {
        let FormRow::Field(id) = self.selected_row() else {
            return;
        };
        edit(&mut self.field_mut(id).editor);
        self.validate_field(id);
    }
}
