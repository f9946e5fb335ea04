use super::{Form, FormField, TextInput, Validator};

const REQUIRED: &[Validator] = &[Validator::Required];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    FirstName,
    LastName,
}

impl EmployeeField {
    fn index(self) -> usize {
        self as usize
    }
}

/// First/last name form shared by the creation and edit dialogs.
#[derive(Debug, Clone)]
pub struct EmployeeForm {
    form: Form,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self::new("", "")
    }
}

impl EmployeeForm {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            form: Form::new(vec![
                FormField::new("First Name", first_name, REQUIRED),
                FormField::new("Last Name", last_name, REQUIRED),
            ]),
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn field(&self, field: EmployeeField) -> &FormField {
        self.form.field(field.index())
    }

    pub fn input_mut(&mut self, field: EmployeeField) -> &mut TextInput {
        &mut self.form.field_mut(field.index()).input
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        self.form.focused_input()
    }

    pub fn focus_next(&mut self) {
        self.form.focus_next();
    }

    pub fn focus_previous(&mut self) {
        self.form.focus_previous();
    }

    pub fn is_blank(&self) -> bool {
        self.form.fields().iter().all(|f| f.value().trim().is_empty())
    }

    /// Valid form → trimmed (first, last). Invalid → every field touched, `None`.
    pub fn submit(&mut self) -> Option<(String, String)> {
        if !self.form.try_submit() {
            return None;
        }
        Some((
            self.field(EmployeeField::FirstName).value().trim().to_string(),
            self.field(EmployeeField::LastName).value().trim().to_string(),
        ))
    }

    pub fn reset(&mut self) {
        self.form.reset();
    }
}
