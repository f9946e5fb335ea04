use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rosterm::entities::{Address, Employee, EmployeePatch, NewEmployee};
use rosterm::forms::{AddressField, FieldError};
use rosterm::ui::components::dialogs::{
    AddressEditorDialog, AddressListDialog, DialogEvent, DialogResult, EmployeeCreationDialog, EmployeeEditDialog,
};
use rosterm::ui::components::DialogComponent;
use rosterm::ui::core::{Action, Component, DialogType};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn address(street: &str, zip: &str) -> Address {
    Address {
        street_address: street.to_string(),
        apt_number: Some("2C".to_string()),
        city: "Mobile".to_string(),
        state: "Alabama".to_string(),
        zip_code: zip.to_string(),
    }
}

fn employee_with(addresses: Vec<Address>) -> Employee {
    Employee {
        employee_id: "e-1".to_string(),
        first_name: "Ann".to_string(),
        last_name: "Lee".to_string(),
        addresses,
    }
}

fn type_text<T>(text: &str, mut send: impl FnMut(KeyEvent) -> DialogEvent<T>) {
    for c in text.chars() {
        send(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_short_zip_is_rejected_and_long_zip_accepted() {
    let mut editor = AddressEditorDialog::new(&address("1 Main St", "1234"), "Edit");

    assert_eq!(editor.handle_key(key(KeyCode::Enter)), DialogEvent::Pending);
    assert_eq!(
        editor.form().field(AddressField::ZipCode).visible_error(),
        Some(FieldError::TooShort { min: 5 })
    );

    for _ in 0..4 {
        editor.handle_key(key(KeyCode::Tab));
    }
    assert_eq!(editor.focused(), AddressField::ZipCode);
    editor.handle_key(key(KeyCode::Char('5')));

    match editor.handle_key(key(KeyCode::Enter)) {
        DialogEvent::Closed(DialogResult::Submitted(saved)) => {
            assert_eq!(saved, address("1 Main St", "12345"));
        }
        other => panic!("expected a submitted address, got {:?}", other),
    }
}

#[test]
fn test_zip_with_letters_is_rejected() {
    let mut editor = AddressEditorDialog::new(&address("1 Main St", "12a45"), "Edit");
    assert!(editor.handle_key(key(KeyCode::Enter)).is_pending());
    assert_eq!(
        editor.form().field(AddressField::ZipCode).visible_error(),
        Some(FieldError::InvalidCharacters)
    );
}

#[test]
fn test_zip_with_dashes_is_accepted() {
    let mut editor = AddressEditorDialog::new(&address("1 Main St", "35203-1234"), "Edit");
    assert!(matches!(
        editor.handle_key(key(KeyCode::Enter)),
        DialogEvent::Closed(DialogResult::Submitted(_))
    ));
}

#[test]
fn test_cancel_returns_cancelled_regardless_of_street() {
    for street in ["", "1 Main St"] {
        let original = address(street, "12345");
        let mut editor = AddressEditorDialog::new(&original, "Edit");
        type_text("changed", |k| editor.handle_key(k));
        assert_eq!(editor.handle_key(key(KeyCode::Esc)), DialogEvent::cancelled());
        assert_eq!(original.street_address, street);
    }
}

#[test]
fn test_errors_only_show_for_touched_fields() {
    let mut editor = AddressEditorDialog::new(&Address::placeholder(), "New");
    assert_eq!(editor.form().field(AddressField::StreetAddress).visible_error(), None);

    editor.handle_key(key(KeyCode::Tab));
    assert_eq!(
        editor.form().field(AddressField::StreetAddress).visible_error(),
        Some(FieldError::Required)
    );
    assert_eq!(editor.form().field(AddressField::City).visible_error(), None);
    // Apartment number is optional
    assert_eq!(editor.form().field(AddressField::AptNumber).error(), None);
}

#[test]
fn test_address_list_refuses_to_remove_last_address() {
    let mut dialog = AddressListDialog::new(&employee_with(vec![address("1 Main St", "12345")]));

    assert!(dialog.handle_key(key(KeyCode::Char('d'))).is_pending());
    assert_eq!(dialog.addresses().len(), 1);
    assert!(dialog.message().is_some());
    assert!(!dialog.is_dirty());

    // Nothing changed, so saving closes without a result
    assert_eq!(dialog.handle_key(key(KeyCode::Char('s'))), DialogEvent::cancelled());
}

#[test]
fn test_address_list_add_edit_remove_and_save() {
    let original = employee_with(vec![address("1 Main St", "12345"), address("2 Side St", "54321")]);
    let mut dialog = AddressListDialog::new(&original);

    // Add a third address through the nested editor
    dialog.handle_key(key(KeyCode::Char('a')));
    assert!(dialog.is_editing());
    type_text("3 Hill Rd", |k| dialog.handle_key(k));
    dialog.handle_key(key(KeyCode::Tab));
    dialog.handle_key(key(KeyCode::Tab));
    type_text("Huntsville", |k| dialog.handle_key(k));
    dialog.handle_key(key(KeyCode::Tab));
    type_text("Alabama", |k| dialog.handle_key(k));
    dialog.handle_key(key(KeyCode::Tab));
    type_text("35801", |k| dialog.handle_key(k));
    dialog.handle_key(key(KeyCode::Enter));
    assert!(!dialog.is_editing());
    assert_eq!(dialog.addresses().len(), 3);
    assert_eq!(dialog.selected(), 2);
    assert_eq!(dialog.addresses()[2].city, "Huntsville");
    assert_eq!(dialog.addresses()[2].apt_number, None);

    // Remove the first one
    dialog.handle_key(key(KeyCode::Char('k')));
    dialog.handle_key(key(KeyCode::Char('k')));
    dialog.handle_key(key(KeyCode::Char('d')));
    assert_eq!(dialog.addresses().len(), 2);

    match dialog.handle_key(key(KeyCode::Char('s'))) {
        DialogEvent::Closed(DialogResult::Submitted(addresses)) => {
            assert_eq!(addresses.len(), 2);
            assert_eq!(addresses[0].street_address, "2 Side St");
            assert_eq!(addresses[1].street_address, "3 Hill Rd");
        }
        other => panic!("expected submitted addresses, got {:?}", other),
    }

    // The employee handed in is never modified
    assert_eq!(original.addresses.len(), 2);
}

#[test]
fn test_address_list_nested_cancel_keeps_working_copy() {
    let mut dialog = AddressListDialog::new(&employee_with(vec![address("1 Main St", "12345")]));
    dialog.handle_key(key(KeyCode::Char('e')));
    type_text(" Apt", |k| dialog.handle_key(k));
    dialog.handle_key(key(KeyCode::Esc));

    assert!(!dialog.is_editing());
    assert_eq!(dialog.addresses()[0].street_address, "1 Main St");
    assert_eq!(dialog.handle_key(key(KeyCode::Esc)), DialogEvent::cancelled());
}

#[test]
fn test_creation_returns_single_draft() {
    let mut dialog = EmployeeCreationDialog::new();
    type_text("Cy", |k| dialog.handle_key(k));
    dialog.handle_key(key(KeyCode::Tab));
    type_text("Young", |k| dialog.handle_key(k));

    match dialog.handle_key(key(KeyCode::Enter)) {
        DialogEvent::Closed(DialogResult::Submitted(drafts)) => {
            assert_eq!(drafts, vec![NewEmployee::new("Cy", "Young")]);
        }
        other => panic!("expected drafts, got {:?}", other),
    }
}

#[test]
fn test_creation_batches_queued_drafts() {
    let mut dialog = EmployeeCreationDialog::new();
    type_text("Cy", |k| dialog.handle_key(k));
    dialog.handle_key(key(KeyCode::Tab));
    type_text("Young", |k| dialog.handle_key(k));
    dialog.handle_key(ctrl('n'));
    assert_eq!(dialog.queued().len(), 1);

    type_text("Di", |k| dialog.handle_key(k));
    dialog.handle_key(key(KeyCode::Tab));
    type_text("Prince", |k| dialog.handle_key(k));

    match dialog.handle_key(key(KeyCode::Enter)) {
        DialogEvent::Closed(DialogResult::Submitted(drafts)) => {
            let names: Vec<&str> = drafts.iter().map(|d| d.last_name.as_str()).collect();
            assert_eq!(names, vec!["Young", "Prince"]);
        }
        other => panic!("expected drafts, got {:?}", other),
    }
}

#[test]
fn test_creation_requires_both_names() {
    let mut dialog = EmployeeCreationDialog::new();
    type_text("Solo", |k| dialog.handle_key(k));
    assert!(dialog.handle_key(key(KeyCode::Enter)).is_pending());
    assert!(dialog.queued().is_empty());
    assert_eq!(dialog.handle_key(key(KeyCode::Esc)), DialogEvent::cancelled());
}

#[test]
fn test_edit_returns_patch_for_same_id() {
    let employee = employee_with(vec![Address::placeholder()]);
    let mut dialog = EmployeeEditDialog::new(&employee);
    dialog.handle_key(key(KeyCode::Tab));
    dialog.handle_key(key(KeyCode::Backspace));
    dialog.handle_key(key(KeyCode::Backspace));
    type_text("i", |k| dialog.handle_key(k));

    assert_eq!(
        dialog.handle_key(key(KeyCode::Enter)),
        DialogEvent::submitted(EmployeePatch {
            employee_id: "e-1".to_string(),
            first_name: "Ann".to_string(),
            last_name: "Li".to_string(),
        })
    );
}

#[test]
fn test_container_maps_address_save_to_action() {
    let mut container = DialogComponent::new();
    let employee = employee_with(vec![address("1 Main St", "12345"), address("2 Side St", "54321")]);
    container.update(Action::ShowDialog(DialogType::AddressList { employee }));
    assert!(container.is_visible());

    container.handle_key_events(key(KeyCode::Char('d')));
    match container.handle_key_events(key(KeyCode::Char('s'))) {
        Action::SaveAddresses { employee_id, addresses } => {
            assert_eq!(employee_id, "e-1");
            assert_eq!(addresses.len(), 1);
        }
        other => panic!("unexpected action: {:?}", other),
    }
    assert!(!container.is_visible());
}

#[test]
fn test_container_cancel_hides_without_request() {
    let mut container = DialogComponent::new();
    container.update(Action::ShowDialog(DialogType::EmployeeCreation));
    let action = container.handle_key_events(key(KeyCode::Esc));
    assert!(matches!(action, Action::HideDialog));
    assert!(!container.is_visible());
}

#[test]
fn test_delete_confirmation_carries_id_and_index() {
    let mut container = DialogComponent::new();
    container.update(Action::ShowDialog(DialogType::DeleteConfirmation {
        employee: employee_with(vec![Address::placeholder()]),
        index: 4,
    }));

    assert!(matches!(container.handle_key_events(key(KeyCode::Char('x'))), Action::None));
    match container.handle_key_events(key(KeyCode::Enter)) {
        Action::DeleteEmployee { employee_id, index } => {
            assert_eq!(employee_id, "e-1");
            assert_eq!(index, 4);
        }
        other => panic!("unexpected action: {:?}", other),
    }
}

#[test]
fn test_whitespace_only_required_field_is_rejected_and_values_are_trimmed() {
    let mut editor = AddressEditorDialog::new(&address("   ", "12345"), "Edit");
    assert!(editor.handle_key(key(KeyCode::Enter)).is_pending());
    assert_eq!(
        editor.form().field(AddressField::StreetAddress).visible_error(),
        Some(FieldError::Required)
    );

    let mut editor = AddressEditorDialog::new(&address("  1 Main St ", "12345"), "Edit");
    match editor.handle_key(key(KeyCode::Enter)) {
        DialogEvent::Closed(DialogResult::Submitted(saved)) => assert_eq!(saved.street_address, "1 Main St"),
        other => panic!("expected a submitted address, got {:?}", other),
    }
}
