//! Prompts driven end to end with a scripted renderer and a recording
//! process. Nothing touches the terminal and nothing really exits.

use std::time::Duration;

use askwell::{
    process::catch_exit, Answer, ConfirmRequest, Error, Extract, FarewellTable, MockExit,
    MockProcess, MockRenderer, PromptRequest, Prompter, ReturnType, SelectRequest, Settings,
    ValidationSpec, DEFAULT_ERROR_REPORT, DEFAULT_EXIT_PAUSE, DEFAULT_FAREWELL, EXIT_ERROR,
    EXIT_OK,
};

fn age_request() -> PromptRequest<'static> {
    PromptRequest::new("Age:").spec(ValidationSpec::IntInRange { min: 0, max: 120 })
}

#[test]
fn text_in_range_returns_integer() {
    let renderer = MockRenderer::default().typing("25");
    let process = MockProcess::default();
    let prompter = Prompter::new(&renderer, &process);

    let answer = prompter.ask_text(age_request()).expect("answered");
    assert_eq!(answer, Answer::Integer(25));
    assert_eq!(*renderer.captured_messages.borrow(), vec!["Age:"]);
    assert!(process.exit_codes.borrow().is_empty());
}

#[test]
fn out_of_range_input_is_asked_again() {
    let renderer = MockRenderer::default()
        .typing("-5")
        .typing("121")
        .typing("abc")
        .typing(" 42 ");
    let process = MockProcess::default();
    let prompter = Prompter::new(&renderer, &process);

    let answer = prompter.ask_text(age_request()).expect("answered");
    assert_eq!(answer, Answer::Integer(42));
    assert_eq!(*renderer.rejected_inputs.borrow(), vec!["-5", "121", "abc"]);
}

#[test]
fn negative_numbers_are_accepted_when_in_range() {
    let renderer = MockRenderer::default().typing("-3");
    let process = MockProcess::default();
    let prompter = Prompter::new(&renderer, &process);

    assert_eq!(prompter.integer("Offset:", -10, 10).expect("answered"), -3);
}

#[test]
fn float_range_rejects_two_decimal_points() {
    let renderer = MockRenderer::default().typing("1.2.3").typing("7.5");
    let process = MockProcess::default();
    let prompter = Prompter::new(&renderer, &process);

    assert!((prompter.float("Grade:", 0.0, 10.0).expect("answered") - 7.5).abs() < f64::EPSILON);
    assert_eq!(*renderer.rejected_inputs.borrow(), vec!["1.2.3"]);
}

#[test]
fn text_is_trimmed_unless_asked_not_to() {
    let renderer = MockRenderer::default().typing("  Ada  ").typing("  Ada  ");
    let process = MockProcess::default();
    let prompter = Prompter::new(&renderer, &process);

    assert_eq!(prompter.text("Name:").expect("answered"), "Ada");
    let untrimmed = prompter
        .ask_text(PromptRequest::new("Name:").trim(false))
        .expect("answered");
    assert_eq!(untrimmed, Answer::Text("  Ada  ".to_string()));
}

#[test]
fn custom_predicate_is_authoritative() {
    let renderer = MockRenderer::default().typing("short").typing("long enough");
    let process = MockProcess::default();
    let prompter = Prompter::new(&renderer, &process);

    let answer = prompter
        .ask_text(PromptRequest::new("Password:").validate(|s| s.len() >= 8))
        .expect("answered");
    assert_eq!(answer.as_text(), Some("long enough"));
    assert_eq!(*renderer.rejected_inputs.borrow(), vec!["short"]);
}

#[test]
fn boolean_return_type_coerces_text() {
    let renderer = MockRenderer::default().typing("maybe").typing("Yes");
    let process = MockProcess::default();
    let prompter = Prompter::new(&renderer, &process);

    let answer = prompter
        .ask_text(PromptRequest::new("Subscribe?").return_type(ReturnType::Boolean))
        .expect("answered");
    assert_eq!(answer, Answer::Boolean(true));
    assert_eq!(*renderer.rejected_inputs.borrow(), vec!["maybe"]);
}

#[test]
fn select_extracts_first_character() {
    let renderer = MockRenderer::default().selecting(2);
    let process = MockProcess::default();
    let prompter = Prompter::new(&renderer, &process);

    let answer = prompter
        .select("Pick:", vec!["Create", "Edit", "Delete"])
        .expect("answered");
    assert_eq!(answer, "D");
}

#[test]
fn select_defaults_to_lettered_menu() {
    let renderer = MockRenderer::default().selecting(1);
    let process = MockProcess::default();
    let prompter = Prompter::new(&renderer, &process);

    let answer = prompter
        .ask_select(SelectRequest::default())
        .expect("answered");
    assert_eq!(answer, Answer::Text("B".to_string()));
    assert_eq!(
        *renderer.captured_choices.borrow(),
        vec![vec!["A.".to_string(), "B.".to_string(), "C.".to_string()]]
    );
    assert_eq!(
        *renderer.captured_messages.borrow(),
        vec![askwell::DEFAULT_SELECT_MESSAGE]
    );
}

#[test]
fn select_converts_extracted_slice() {
    let renderer = MockRenderer::default().selecting(0);
    let process = MockProcess::default();
    let prompter = Prompter::new(&renderer, &process);

    let answer = prompter
        .ask_select(
            SelectRequest::new("Level:")
                .choices(["10 - expert", "5 - casual"])
                .extract(Extract::range(0, 2))
                .return_type(ReturnType::Integer),
        )
        .expect("answered");
    assert_eq!(answer, Answer::Integer(10));
}

#[test]
fn confirm_returns_answer_verbatim() {
    let renderer = MockRenderer::default().confirming(true).confirming(false);
    let process = MockProcess::default();
    let prompter = Prompter::new(&renderer, &process);

    assert!(prompter.confirm("Continue?").expect("answered"));
    assert!(!prompter
        .ask_confirm(ConfirmRequest::new("Delete everything?").default_answer(false))
        .expect("answered"));
}

#[test]
fn cancel_without_callback_exits_with_farewell() {
    let renderer = MockRenderer::default().cancelling_text();
    let process = MockProcess::default();
    let prompter = Prompter::new(&renderer, &process);

    let exit = catch_exit(|| prompter.ask_text(age_request())).expect_err("exits");
    assert_eq!(exit, MockExit { code: EXIT_OK });
    assert_eq!(
        *process.printed.borrow(),
        vec![(DEFAULT_FAREWELL.to_string(), true)]
    );
    assert_eq!(*process.pauses.borrow(), vec![DEFAULT_EXIT_PAUSE]);
    assert_eq!(*process.exit_codes.borrow(), vec![EXIT_OK]);
}

#[test]
fn cancelled_select_and_confirm_exit_too() {
    let renderer = MockRenderer::default()
        .cancelling_select()
        .cancelling_confirm();
    let process = MockProcess::default();
    let prompter = Prompter::new(&renderer, &process);

    assert_eq!(
        catch_exit(|| prompter.select("Pick:", vec!["Create"])).expect_err("exits"),
        MockExit { code: EXIT_OK }
    );
    assert_eq!(
        catch_exit(|| prompter.confirm("Continue?")).expect_err("exits"),
        MockExit { code: EXIT_OK }
    );
    assert_eq!(*process.exit_codes.borrow(), vec![EXIT_OK, EXIT_OK]);
}

#[test]
fn on_cancel_can_substitute_a_value() {
    let renderer = MockRenderer::default().cancelling_text().cancelling_confirm();
    let process = MockProcess::default();
    let prompter = Prompter::new(&renderer, &process);

    let answer = prompter
        .ask_text(age_request().on_cancel(|| Answer::Integer(18)))
        .expect("substituted");
    assert_eq!(answer, Answer::Integer(18));

    let confirmed = prompter
        .ask_confirm(ConfirmRequest::new("Continue?").on_cancel(|| true))
        .expect("substituted");
    assert!(confirmed);
    assert!(process.printed.borrow().is_empty());
    assert!(process.exit_codes.borrow().is_empty());
}

#[test]
fn on_cancel_can_exit_on_its_own() {
    let renderer = MockRenderer::default().cancelling_select();
    let process = MockProcess::default();
    let prompter = Prompter::new(&renderer, &process);

    let exit = catch_exit(|| {
        prompter.ask_select(
            SelectRequest::new("Pick:").on_cancel(|| prompter.exit_with("Nothing picked")),
        )
    })
    .expect_err("exits");
    assert_eq!(exit.code, EXIT_OK);
    assert_eq!(
        *process.printed.borrow(),
        vec![("Nothing picked".to_string(), true)]
    );
}

#[test]
fn unsupported_validation_code_is_a_configuration_error() {
    let result = PromptRequest::new("Value:").validation("4.0", 0.0, 1.0);
    assert!(matches!(
        result,
        Err(Error::Core(askwell_core::Error::UnsupportedValidationCode { .. }))
    ));
}

#[test]
fn configuration_errors_are_returned_before_prompting() {
    let renderer = MockRenderer::default();
    let process = MockProcess::default();
    let prompter = Prompter::new(&renderer, &process);

    let float_as_integer = prompter.ask_text(
        PromptRequest::new("Ratio:")
            .spec(ValidationSpec::FloatInRange { min: 0.0, max: 1.0 })
            .return_type(ReturnType::Integer),
    );
    assert!(matches!(
        float_as_integer,
        Err(Error::Core(askwell_core::Error::UnsupportedReturnType { .. }))
    ));

    let empty_range = prompter.integer("Age:", 10, 1);
    assert!(matches!(
        empty_range,
        Err(Error::Core(askwell_core::Error::InvalidRange { .. }))
    ));

    let empty_menu = prompter.select::<String>("Pick:", vec![]);
    assert!(matches!(
        empty_menu,
        Err(Error::Core(askwell_core::Error::EmptyChoices))
    ));

    let letters_as_numbers = prompter.ask_select(
        SelectRequest::new("Pick:")
            .choices(["Create", "Edit"])
            .return_type(ReturnType::Integer),
    );
    assert!(matches!(
        letters_as_numbers,
        Err(Error::Core(askwell_core::Error::Conversion { .. }))
    ));

    assert!(renderer.captured_messages.borrow().is_empty());
    assert!(process.exit_codes.borrow().is_empty());
}

#[test]
fn exit_uses_module_farewell() {
    let renderer = MockRenderer::default();
    let process = MockProcess::default();
    let prompter = Prompter::new(&renderer, &process)
        .farewells(FarewellTable::from_iter([("grade_calculator", "Good luck!")]))
        .exit_pause(Duration::ZERO);

    let grades = prompter.with_module("grade_calculator");
    assert_eq!(grades.module(), Some("grade_calculator"));
    assert_eq!(catch_exit(|| grades.exit()), Err(MockExit { code: EXIT_OK }));

    let other = prompter.with_module("unknown");
    assert_eq!(
        catch_exit(|| other.exit_with("Custom bye")),
        Err(MockExit { code: EXIT_OK })
    );
    assert_eq!(catch_exit(|| prompter.exit()), Err(MockExit { code: EXIT_OK }));

    assert_eq!(
        *process.printed.borrow(),
        vec![
            ("Good luck!".to_string(), true),
            ("Custom bye".to_string(), true),
            (DEFAULT_FAREWELL.to_string(), true),
        ]
    );
    assert_eq!(*process.pauses.borrow(), vec![Duration::ZERO; 3]);
}

#[test]
fn exit_error_prints_report_and_exits_with_one() {
    let renderer = MockRenderer::default();
    let process = MockProcess::default();
    let prompter = Prompter::new(&renderer, &process);

    assert_eq!(
        catch_exit(|| prompter.exit_error("disk full")),
        Err(MockExit { code: EXIT_ERROR })
    );
    assert_eq!(catch_exit(|| prompter.abort()), Err(MockExit { code: 1 }));
    assert_eq!(
        *process.printed.borrow(),
        vec![
            ("disk full".to_string(), false),
            (DEFAULT_ERROR_REPORT.to_string(), false),
        ]
    );
}

#[test]
fn prompter_from_settings_uses_configured_messages() {
    let mut settings = Settings::with_defaults().expect("default settings");
    settings.default_farewell = "Bye!".to_string();
    settings.exit_pause_ms = 250;

    let renderer = MockRenderer::default().cancelling_text();
    let process = MockProcess::default();
    let prompter = Prompter::from_settings(&renderer, &process, &settings);

    assert_eq!(
        catch_exit(|| prompter.text("Name:")).expect_err("exits"),
        MockExit { code: EXIT_OK }
    );
    let passwords = prompter.with_module("password_generator");
    assert_eq!(catch_exit(|| passwords.exit()), Err(MockExit { code: EXIT_OK }));

    assert_eq!(
        *process.printed.borrow(),
        vec![
            ("Bye!".to_string(), true),
            ("Keep your passwords safe!".to_string(), true),
        ]
    );
    assert_eq!(
        *process.pauses.borrow(),
        vec![Duration::from_millis(250); 2]
    );
}

#[test]
fn named_validator_gates_text() {
    let settings = Settings::with_defaults().expect("default settings");
    let renderer = MockRenderer::default()
        .typing("ada")
        .typing("ada@example.com");
    let process = MockProcess::default();
    let prompter = Prompter::new(&renderer, &process);

    let answer = prompter
        .ask_text(PromptRequest::new("Email:").spec(settings.validator("email").expect("email")))
        .expect("answered");
    assert_eq!(answer.as_text(), Some("ada@example.com"));
    assert_eq!(*renderer.rejected_inputs.borrow(), vec!["ada"]);
}

#[test]
fn exhausted_script_surfaces_renderer_error() {
    let renderer = MockRenderer::default();
    let process = MockProcess::default();
    let prompter = Prompter::new(&renderer, &process);

    assert!(matches!(prompter.confirm("Continue?"), Err(Error::Prompt(_))));
}
