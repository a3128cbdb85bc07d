//! Property tests over the rule evaluator and the pass verdict.

use formguard_engine::prelude::*;
use proptest::prelude::*;

fn number_form(spec: FieldSpec) -> FormModel {
    FormModel::build([spec]).unwrap()
}

proptest! {
    #[test]
    fn unconstrained_digit_strings_validate(value in "[0-9]{1,6}") {
        let form = number_form(
            FieldSpec::new("n", ControlType::Number)
                .with_group("g")
                .with_value(value.clone()),
        );
        prop_assert!(check_number(form.field("n").unwrap()).is_ok());
    }

    #[test]
    fn values_with_a_non_digit_never_validate(value in "[0-9]{0,3}[a-z.@#][0-9a-z]{0,3}") {
        let form = number_form(
            FieldSpec::new("n", ControlType::Number)
                .with_group("g")
                .with_value(value.clone()),
        );
        prop_assert!(check_number(form.field("n").unwrap()).is_err());
    }

    #[test]
    fn multiples_of_the_step_validate(step in 1u32..20, k in 0u32..50) {
        let form = number_form(
            FieldSpec::new("n", ControlType::Number)
                .with_group("g")
                .with_step(step.to_string())
                .with_value((step * k).to_string()),
        );
        prop_assert!(check_number(form.field("n").unwrap()).is_ok());
    }

    #[test]
    fn off_step_values_never_validate(step in 2u32..20, k in 0u32..50) {
        // step * k + 1 is never on a step counted from zero when step >= 2.
        let value = step * k + 1;
        let form = number_form(
            FieldSpec::new("n", ControlType::Number)
                .with_group("g")
                .with_step(step.to_string())
                .with_value(value.to_string()),
        );
        prop_assert!(check_number(form.field("n").unwrap()).is_err());
    }

    #[test]
    fn required_text_verdict_tracks_emptiness(value in "[ -~]{0,12}") {
        let form = FormModel::build([
            FieldSpec::new("t", ControlType::Text)
                .with_group("g")
                .with_required()
                .with_value(value.clone()),
        ]).unwrap();

        let mut engine = ValidationEngine::new(RecordingPresenter::new());
        let verdict = engine.run_pass(&form);
        prop_assert_eq!(verdict, !value.is_empty());
    }

    #[test]
    fn repeated_passes_agree(value in "[ -~]{0,12}", required: bool) {
        let form = FormModel::build([
            FieldSpec::new("t", ControlType::Text)
                .with_group("g")
                .with_value(value.clone())
                .with_max_length(6),
            if required {
                FieldSpec::new("u", ControlType::Text).with_group("g").with_required()
            } else {
                FieldSpec::new("u", ControlType::Text).with_group("g")
            },
        ]).unwrap();

        let mut engine = ValidationEngine::new(RecordingPresenter::new());
        let first = engine.run_pass(&form);
        let first_violations = engine.presenter().violations().to_vec();
        let second = engine.run_pass(&form);

        prop_assert_eq!(first, second);
        prop_assert_eq!(first_violations, engine.presenter().violations().to_vec());
    }
}
