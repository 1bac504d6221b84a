use crate::tests::utils::{body_string, get, post_form, test_state};

#[test]
fn contact_page_shows_form_and_office() {
    let state = test_state();
    let resp = get(&state, "/contact");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains(r#"action="/contact""#));
    assert!(body.contains("Selling a Property"));
    assert!(body.contains("123 Real Estate Avenue"));
    assert!(body.contains("Send Message"));
}

#[test]
fn valid_submission_is_stored_and_acknowledged() {
    let state = test_state();
    let resp = post_form(
        &state,
        "/contact",
        "name=Ada+Lovelace&email=ada%40example.com&phone=&subject=Buying+a+Property&message=Is+the+cabin+free%3F",
    );

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Your message has been sent successfully"));

    let stored = state.inbox.messages();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].form.name, "Ada Lovelace");
    assert_eq!(stored[0].form.email, "ada@example.com");
    assert_eq!(stored[0].form.message, "Is the cabin free?");
    assert!(body.contains(&stored[0].reference));
}

#[test]
fn invalid_submission_is_rerendered_with_errors() {
    let state = test_state();
    let resp = post_form(&state, "/contact", "name=Ada&email=nope&subject=Spam&message=");

    assert_eq!(resp.status(), 422);
    let body = body_string(resp);
    assert!(body.contains("Please correct the highlighted fields."));
    assert!(body.contains("Please enter a valid email address."));
    assert!(body.contains("Please select a subject."));
    assert!(body.contains("Please enter a message."));
    assert!(body.contains(r#"value="Ada""#));
    assert_eq!(state.inbox.count(), 0);
}

#[test]
fn oversized_form_is_rejected() {
    let state = test_state();
    let huge = format!("name=Ada&message={}", "a".repeat(70 * 1024));
    let resp = post_form(&state, "/contact", &huge);

    assert_eq!(resp.status(), 400);
    assert_eq!(state.inbox.count(), 0);
}
