//! Full-pass scenarios: field walks, violation kinds, verdicts, and the
//! custom-validation contract.

use formguard_engine::prelude::*;
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;

fn engine() -> ValidationEngine<RecordingPresenter> {
    ValidationEngine::new(RecordingPresenter::new())
}

#[test]
fn happy_path_signup_form_submits() {
    let form = FormModel::build([
        FieldSpec::new("email", ControlType::Email)
            .with_group("contact")
            .with_required()
            .with_value("user@example.com"),
        FieldSpec::new("age", ControlType::Number)
            .with_group("profile")
            .with_min("2")
            .with_max("120")
            .with_value("30"),
        FieldSpec::new("password", ControlType::Text)
            .with_group("secret")
            .with_required()
            .with_value("hunter2!"),
        FieldSpec::new("confirm", ControlType::Text)
            .with_group("secret")
            .with_required()
            .with_same_as("password")
            .with_value("hunter2!"),
        FieldSpec::new("send", ControlType::Submit),
    ])
    .unwrap();

    let mut engine = engine();
    assert!(engine.run_pass(&form));
    assert!(engine.presenter().is_clear());
}

#[test]
fn every_required_empty_field_raises_on_its_group() {
    let form = FormModel::build([
        FieldSpec::new("email", ControlType::Email)
            .with_group("contact")
            .with_required(),
        FieldSpec::new("city", ControlType::Text)
            .with_group("address")
            .with_required(),
        FieldSpec::new("pick", ControlType::Radio)
            .with_name("plan")
            .with_group("plans")
            .with_required(),
    ])
    .unwrap();

    let mut engine = engine();
    assert!(!engine.run_pass(&form));
    for group in ["contact", "address", "plans"] {
        assert!(
            engine.presenter().has_violation(group, ViolationKind::Required),
            "missing required violation on {group}"
        );
    }
}

#[test]
fn checked_required_checkbox_counts_as_empty() {
    // Checkbox emptiness reports the checked state as-is, so a checked
    // required checkbox trips the required rule.
    let form = FormModel::build([FieldSpec::new("terms", ControlType::Checkbox)
        .with_group("consent")
        .with_required()
        .with_checked()])
    .unwrap();

    let mut engine = engine();
    assert!(!engine.run_pass(&form));
    assert!(engine
        .presenter()
        .has_violation("consent", ViolationKind::Required));
}

#[test]
fn optional_empty_fields_raise_nothing() {
    let form = FormModel::build([
        FieldSpec::new("nickname", ControlType::Text).with_group("profile"),
        FieldSpec::new("homepage", ControlType::Text).with_group("profile"),
    ])
    .unwrap();

    let mut engine = engine();
    assert!(engine.run_pass(&form));
    assert!(engine.presenter().is_clear());
}

#[test]
fn numeric_violations_surface_as_value_kind() {
    for bad in ["5", "8", "1", "2.5"] {
        let form = FormModel::build([FieldSpec::new("n", ControlType::Number)
            .with_group("numbers")
            .with_min("2")
            .with_max("7")
            .with_step("2")
            .with_value(bad)])
        .unwrap();

        let mut engine = engine();
        assert!(!engine.run_pass(&form), "{bad} should be rejected");
        assert!(
            engine.presenter().has_violation("numbers", ViolationKind::Value),
            "{bad} should raise a value violation"
        );
    }

    let form = FormModel::build([FieldSpec::new("n", ControlType::Number)
        .with_group("numbers")
        .with_min("2")
        .with_max("7")
        .with_step("2")
        .with_value("4")])
    .unwrap();
    let mut engine = engine();
    assert!(engine.run_pass(&form));
}

#[test]
fn uppercase_email_is_rejected() {
    let form = FormModel::build([FieldSpec::new("email", ControlType::Email)
        .with_group("contact")
        .with_value("A@B.com")])
    .unwrap();

    let mut engine = engine();
    assert!(!engine.run_pass(&form));
    assert!(engine
        .presenter()
        .has_violation("contact", ViolationKind::Value));
}

#[test]
fn same_as_mismatch_raises_special() {
    let form = FormModel::build([
        FieldSpec::new("a", ControlType::Text).with_group("pair").with_value("x"),
        FieldSpec::new("b", ControlType::Text)
            .with_group("pair")
            .with_same_as("a")
            .with_value("y"),
    ])
    .unwrap();

    let mut engine = engine();
    assert!(!engine.run_pass(&form));
    assert!(engine.presenter().has_violation("pair", ViolationKind::Special));
}

#[test]
fn same_as_match_raises_nothing() {
    let form = FormModel::build([
        FieldSpec::new("a", ControlType::Text).with_group("pair").with_value("x"),
        FieldSpec::new("b", ControlType::Text)
            .with_group("pair")
            .with_same_as("a")
            .with_value("x"),
    ])
    .unwrap();

    let mut engine = engine();
    assert!(engine.run_pass(&form));
    assert!(engine.presenter().is_clear());
}

#[test]
fn maxlength_overflow_raises_value() {
    let form = FormModel::build([FieldSpec::new("bio", ControlType::TextArea)
        .with_group("profile")
        .with_max_length(10)
        .with_value("a very long biography")])
    .unwrap();

    let mut engine = engine();
    assert!(!engine.run_pass(&form));
    assert!(engine
        .presenter()
        .has_violation("profile", ViolationKind::Value));
}

#[test]
fn groups_are_marked_once_per_failure() {
    let form = FormModel::build([
        FieldSpec::new("first", ControlType::Text)
            .with_group("names")
            .with_required(),
        FieldSpec::new("last", ControlType::Text)
            .with_group("names")
            .with_required(),
    ])
    .unwrap();

    let mut engine = engine();
    assert!(!engine.run_pass(&form));
    // Two failing fields in one group: two marks, no suppression.
    assert_eq!(engine.presenter().marked_groups().len(), 2);
}

#[test]
fn passes_are_idempotent() {
    let form = FormModel::build([
        FieldSpec::new("email", ControlType::Email)
            .with_group("contact")
            .with_required()
            .with_value("not-an-address"),
        FieldSpec::new("n", ControlType::Number)
            .with_group("numbers")
            .with_step("3")
            .with_value("4"),
    ])
    .unwrap();

    let mut engine = engine();
    let first = engine.run_pass(&form);
    let first_violations = engine.presenter().violations().to_vec();

    let second = engine.run_pass(&form);
    let second_violations = engine.presenter().violations().to_vec();

    assert_eq!(first, second);
    assert_eq!(first_violations, second_violations);
}

#[test]
fn custom_validations_run_reversed_and_exhaustively() {
    let form = FormModel::build([FieldSpec::new("note", ControlType::Text)
        .with_group("notes")
        .with_value("fine")])
    .unwrap();

    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut engine = engine();

    let log = Rc::clone(&calls);
    engine.add_validation(move || {
        log.borrow_mut().push("p1");
        true
    });
    let log = Rc::clone(&calls);
    engine.add_validation(move || {
        log.borrow_mut().push("p2");
        false
    });

    assert!(!engine.run_pass(&form));
    assert_eq!(*calls.borrow(), vec!["p2", "p1"]);

    // The registry persists: a second pass runs both again.
    assert!(!engine.run_pass(&form));
    assert_eq!(calls.borrow().len(), 4);
}

#[test]
fn custom_validation_failure_blocks_an_otherwise_clean_form() {
    let form = FormModel::build([FieldSpec::new("note", ControlType::Text)
        .with_group("notes")
        .with_value("fine")])
    .unwrap();

    let mut engine = engine();
    engine.add_validation(|| false);

    assert!(!engine.run_pass(&form));
    // Field checks raised nothing; only the verdict flipped.
    assert!(engine.presenter().is_clear());
}
