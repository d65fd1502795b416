use crate::api::ApiError;
use crate::form_state::{FormField, FormState, Phase};
use crate::types::{MessageResponse, Role, UserRecord};

fn sample_student_record() -> UserRecord {
    UserRecord {
        id: "64a1f0c2b5e9".to_string(),
        name: "Asha Verma".to_string(),
        email: "asha@school.test".to_string(),
        image_url: "https://img.school.test/asha.png".to_string(),
        roll_number: Some("17".to_string()),
        division: Some("div-7a".to_string()),
        role: Role::Student,
    }
}

fn filled_student_form() -> FormState {
    let mut state = FormState::new();
    state.edit(FormField::Name, "Asha Verma".to_string());
    state.edit(FormField::Email, "asha@school.test".to_string());
    state.edit(FormField::Password, "secret123".to_string());
    state.edit(FormField::ImageUrl, "https://img.school.test/asha.png".to_string());
    state.edit(FormField::RollNumber, "17".to_string());
    state.edit(FormField::Division, "div-7a".to_string());
    state
}

fn filled_faculty_form() -> FormState {
    let mut state = FormState::new();
    state.edit(FormField::Name, "Ravi Iyer".to_string());
    state.edit(FormField::Email, "ravi@school.test".to_string());
    state.edit(FormField::Password, "secret123".to_string());
    state.edit(FormField::ImageUrl, "https://img.school.test/ravi.png".to_string());
    state
}

#[test]
fn test_hydrates_fields_from_record() {
    let state = FormState::from_record(&sample_student_record());

    assert_eq!(state.name, "Asha Verma");
    assert_eq!(state.email, "asha@school.test");
    assert_eq!(state.image_url, "https://img.school.test/asha.png");
    assert_eq!(state.roll_number, "17");
    assert_eq!(state.division, "div-7a");
    // The password is never echoed back into the form.
    assert_eq!(state.password, "");
    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(state.message, None);
}

#[test]
fn test_hydrates_absent_optionals_as_empty() {
    let mut record = sample_student_record();
    record.roll_number = None;
    record.division = None;

    let state = FormState::from_record(&record);
    assert_eq!(state.roll_number, "");
    assert_eq!(state.division, "");
}

#[test]
fn test_edit_routes_values_to_the_right_fields() {
    let mut state = FormState::new();
    state.edit(FormField::Name, "a".to_string());
    state.edit(FormField::Email, "b".to_string());
    state.edit(FormField::Password, "c".to_string());
    state.edit(FormField::ImageUrl, "d".to_string());
    state.edit(FormField::RollNumber, "e".to_string());
    state.edit(FormField::Division, "f".to_string());

    assert_eq!(state.name, "a");
    assert_eq!(state.email, "b");
    assert_eq!(state.password, "c");
    assert_eq!(state.image_url, "d");
    assert_eq!(state.roll_number, "e");
    assert_eq!(state.division, "f");
}

#[test]
fn test_student_without_division_is_rejected() {
    let mut state = filled_student_form();
    state.edit(FormField::Division, String::new());

    let payload = state.begin_submit(Role::Student, false);

    assert!(payload.is_none());
    assert_eq!(state.message.as_deref(), Some("Choose a class from dropdown."));
    // Rejections stay local: no request starts.
    assert_eq!(state.phase, Phase::Idle);
}

#[test]
fn test_division_message_wins_on_an_empty_student_form() {
    // Everything is missing, but the class prompt has priority.
    let mut state = FormState::new();
    let payload = state.begin_submit(Role::Student, false);

    assert!(payload.is_none());
    assert_eq!(state.message.as_deref(), Some("Choose a class from dropdown."));
}

#[test]
fn test_name_and_email_are_required() {
    let mut state = filled_faculty_form();
    state.edit(FormField::Name, "  ".to_string());
    assert!(state.begin_submit(Role::Faculty, false).is_none());
    assert_eq!(state.message.as_deref(), Some("Name is required."));

    let mut state = filled_faculty_form();
    state.edit(FormField::Email, String::new());
    assert!(state.begin_submit(Role::Faculty, false).is_none());
    assert_eq!(state.message.as_deref(), Some("Email is required."));
}

#[test]
fn test_password_required_only_when_creating() {
    let mut state = filled_faculty_form();
    state.edit(FormField::Password, String::new());

    assert!(state.begin_submit(Role::Faculty, false).is_none());
    assert_eq!(state.message.as_deref(), Some("Password is required."));

    // Edit mode has no password field, so nothing to require.
    let mut state = filled_faculty_form();
    state.edit(FormField::Password, String::new());
    assert!(state.begin_submit(Role::Faculty, true).is_some());
}

#[test]
fn test_division_required_when_editing_a_student() {
    let mut state = FormState::from_record(&sample_student_record());
    state.edit(FormField::Division, String::new());

    assert!(state.begin_submit(Role::Student, true).is_none());
    assert_eq!(state.message.as_deref(), Some("Choose a class from dropdown."));
}

#[test]
fn test_payload_carries_form_values_verbatim() {
    let mut state = filled_student_form();
    state.edit(FormField::RollNumber, "42".to_string());

    let payload = state.begin_submit(Role::Student, false).unwrap();

    assert_eq!(payload.name, "Asha Verma");
    assert_eq!(payload.email, "asha@school.test");
    assert_eq!(payload.password, "secret123");
    assert_eq!(payload.image_url, "https://img.school.test/asha.png");
    assert_eq!(payload.roll_number, "42");
    assert_eq!(payload.division, "div-7a");
    assert_eq!(payload.role, Role::Student);
}

#[test]
fn test_successful_begin_submit_enters_submitting_and_clears_message() {
    let mut state = filled_student_form();
    state.edit(FormField::Division, String::new());
    assert!(state.begin_submit(Role::Student, false).is_none());
    assert!(state.message.is_some());

    state.edit(FormField::Division, "div-7a".to_string());
    assert!(state.begin_submit(Role::Student, false).is_some());
    assert_eq!(state.phase, Phase::Submitting);
    assert_eq!(state.message, None);
    assert!(state.is_busy());
}

#[test]
fn test_submit_and_delete_are_ignored_while_busy() {
    let mut state = filled_faculty_form();
    assert!(state.begin_submit(Role::Faculty, false).is_some());

    // A second click while the request is in flight does nothing.
    assert!(state.begin_submit(Role::Faculty, false).is_none());
    assert!(!state.begin_delete());
    assert_eq!(state.phase, Phase::Submitting);
    assert_eq!(state.message, None);
}

#[test]
fn test_begin_delete_enters_deleting() {
    let mut state = FormState::from_record(&sample_student_record());

    assert!(state.begin_delete());
    assert_eq!(state.phase, Phase::Deleting);
    assert!(state.is_busy());
    assert!(!state.begin_delete());
}

#[test]
fn test_finish_success_shows_message_and_navigates() {
    let mut state = filled_faculty_form();
    state.begin_submit(Role::Faculty, false).unwrap();

    let navigate = state.finish(Ok(MessageResponse {
        message: "Saved".to_string(),
    }));

    assert!(navigate);
    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(state.message.as_deref(), Some("Saved"));
}

#[test]
fn test_finish_server_failure_shows_opaque_message() {
    let mut state = filled_faculty_form();
    state.begin_submit(Role::Faculty, false).unwrap();

    let navigate = state.finish(Err(ApiError::ServerFailure));

    assert!(!navigate);
    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(state.message.as_deref(), Some("Something went wrong."));
}

#[test]
fn test_finish_rejection_shows_backend_message() {
    let mut state = filled_faculty_form();
    state.begin_submit(Role::Faculty, false).unwrap();

    let navigate = state.finish(Err(ApiError::Rejected("Email already in use.".to_string())));

    assert!(!navigate);
    assert_eq!(state.message.as_deref(), Some("Email already in use."));
    // The form stays populated for correction.
    assert_eq!(state.email, "ravi@school.test");
    assert!(!state.is_busy());
}

#[test]
fn test_finish_transport_failure_shows_error_text() {
    let mut state = FormState::from_record(&sample_student_record());
    assert!(state.begin_delete());

    let navigate = state.finish(Err(ApiError::Transport(
        "Request failed: connection refused".to_string(),
    )));

    assert!(!navigate);
    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(
        state.message.as_deref(),
        Some("Request failed: connection refused")
    );
}

#[test]
fn test_delete_success_navigates() {
    let mut state = FormState::from_record(&sample_student_record());
    assert!(state.begin_delete());

    let navigate = state.finish(Ok(MessageResponse {
        message: "User deleted.".to_string(),
    }));

    assert!(navigate);
    assert_eq!(state.message.as_deref(), Some("User deleted."));
}
