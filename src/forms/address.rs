use super::{Form, FormField, TextInput, Validator};
use crate::constants::ZIP_CODE_MIN_LENGTH;
use crate::entities::Address;

const REQUIRED: &[Validator] = &[Validator::Required];
const OPTIONAL: &[Validator] = &[];
const ZIP_CODE: &[Validator] = &[
    Validator::Required,
    Validator::MinLength(ZIP_CODE_MIN_LENGTH),
    Validator::DigitsAndDashes,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    StreetAddress,
    AptNumber,
    City,
    State,
    ZipCode,
}

impl AddressField {
    pub const ALL: [AddressField; 5] = [
        AddressField::StreetAddress,
        AddressField::AptNumber,
        AddressField::City,
        AddressField::State,
        AddressField::ZipCode,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Working copy of one address being edited.
#[derive(Debug, Clone)]
pub struct AddressForm {
    form: Form,
}

impl AddressForm {
    pub fn new(address: &Address) -> Self {
        let form = Form::new(vec![
            FormField::new("Street Address", address.street_address.clone(), REQUIRED),
            FormField::new("Apt Number", address.apt_number.clone().unwrap_or_default(), OPTIONAL),
            FormField::new("City", address.city.clone(), REQUIRED),
            FormField::new("State", address.state.clone(), REQUIRED),
            FormField::new("Zip Code", address.zip_code.clone(), ZIP_CODE),
        ]);
        Self { form }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn field(&self, field: AddressField) -> &FormField {
        self.form.field(field.index())
    }

    pub fn input_mut(&mut self, field: AddressField) -> &mut TextInput {
        &mut self.form.field_mut(field.index()).input
    }

    pub fn focused(&self) -> AddressField {
        AddressField::ALL[self.form.focus()]
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

    pub fn is_valid(&self) -> bool {
        self.form.is_valid()
    }

    /// Copy all five fields out of the form.
    pub fn to_address(&self) -> Address {
        let value = |field: AddressField| self.field(field).value().trim().to_string();
        let apt = value(AddressField::AptNumber);
        Address {
            street_address: value(AddressField::StreetAddress),
            apt_number: if apt.is_empty() { None } else { Some(apt) },
            city: value(AddressField::City),
            state: value(AddressField::State),
            zip_code: value(AddressField::ZipCode),
        }
    }

    /// Valid form → edited address. Invalid → every field touched, `None`.
    pub fn submit(&mut self) -> Option<Address> {
        if self.form.try_submit() {
            Some(self.to_address())
        } else {
            None
        }
    }
}
