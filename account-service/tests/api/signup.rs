use crate::helpers::{get_random_email, TestContext};
use account_service::domain::AccountResponse;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_422_if_malformed_email(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.signup(String::from("not-an-email"), String::from("abcdef")).await;
    assert_eq!(response.status().as_u16(), 422, "Invalid email");
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_422_if_password_too_short(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.signup(get_random_email(), String::from("abc")).await;
    assert_eq!(response.status().as_u16(), 422, "Password is too short");
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_201_if_fields_are_valid(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let email = get_random_email();

    let response = app.signup(email.clone(), String::from("abcdef")).await;
    assert_eq!(response.status().as_u16(), 201);

    let expected_response = AccountResponse {
        message: "User created successfully!".to_owned(),
    };
    assert_eq!(
        response
            .json::<AccountResponse>()
            .await
            .expect("Could not deserialize response body to AccountResponse"),
        expected_response
    );
    assert_eq!(app.stored_password(&email).await, Some("abcdef".to_string()));
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_409_if_email_already_exists(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let email = get_random_email();

    let response = app.signup(email.clone(), String::from("abcdef")).await;
    assert_eq!(response.status().as_u16(), 201);

    let response = app.signup(email.clone(), String::from("ghijkl")).await;
    assert_eq!(response.status().as_u16(), 409);
    assert_eq!(app.stored_password(&email).await, Some("abcdef".to_string()));
}
