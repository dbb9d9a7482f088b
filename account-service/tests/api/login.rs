use crate::helpers::{get_random_email, TestApp};

#[tokio::test]
async fn should_return_422_if_malformed_email() {
    let app = TestApp::new().await;

    let response = app.login(String::new(), String::from("abcdef")).await;

    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn should_return_401_if_user_not_found() {
    let app = TestApp::new().await;

    let response = app.login(get_random_email(), String::from("abcdef")).await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_401_if_password_is_wrong() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.seed_user(&email, "abcdef").await;

    let response = app.login(email, String::from("abcdeg")).await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_200_after_signup() {
    let app = TestApp::new().await;
    let email = get_random_email();

    let response = app.signup(email.clone(), String::from("abcdef")).await;
    assert_eq!(response.status().as_u16(), 201);

    let response = app.login(email, String::from("abcdef")).await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn should_accept_a_stored_password_shorter_than_the_signup_minimum() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.seed_user(&email, "old").await;

    let response = app.login(email.clone(), String::from("old")).await;
    assert_eq!(response.status().as_u16(), 200);

    let response = app.login(email, String::from("wrong")).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_401_not_422_for_a_short_wrong_password() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.seed_user(&email, "abcdef").await;

    let response = app.login(email, String::from("abc")).await;

    assert_eq!(response.status().as_u16(), 401);
}
