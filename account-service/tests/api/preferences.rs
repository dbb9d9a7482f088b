use crate::helpers::TestApp;
use account_service::domain::{Language, LanguagePreferenceResponse};
use account_service::utils::SELECTED_LANGUAGE_KEY;

#[tokio::test]
async fn language_defaults_to_english() {
    let app = TestApp::new().await;

    let response = app.get_language().await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.json::<LanguagePreferenceResponse>().await.unwrap(),
        LanguagePreferenceResponse {
            language: Language::En,
            rtl: false,
        }
    );
}

#[tokio::test]
async fn selected_language_is_persisted() {
    let app = TestApp::new().await;

    let response = app.set_language("ar").await;
    assert_eq!(response.status().as_u16(), 200);

    let response = app.get_language().await;
    assert_eq!(
        response.json::<LanguagePreferenceResponse>().await.unwrap(),
        LanguagePreferenceResponse {
            language: Language::Ar,
            rtl: true,
        }
    );
    assert_eq!(
        app.storage
            .read()
            .await
            .get_item(SELECTED_LANGUAGE_KEY)
            .await
            .unwrap(),
        Some("ar".to_string())
    );
}

#[tokio::test]
async fn unsupported_language_is_rejected() {
    let app = TestApp::new().await;

    let response = app.set_language("fr").await;

    assert_eq!(response.status().as_u16(), 422);
    assert_eq!(
        app.get_language().await.json::<LanguagePreferenceResponse>().await.unwrap().language,
        Language::En
    );
}
