use std::time::Duration;

use contact_form::client::{ContactApiClient, ContactForm, SENT_FEEDBACK};
use wiremock::matchers::{any, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::spawn_app;

fn api_client(endpoint: String) -> ContactApiClient {
    ContactApiClient::new(endpoint, Duration::from_secs(5)).expect("Failed to build client")
}

#[tokio::test]
async fn a_form_submitted_against_the_server_is_delivered() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;
    let api = api_client(app.contact_endpoint());

    // Act
    let form = ContactForm::default()
        .with_name("Ann")
        .with_email("ann@example.com")
        .with_message("Hi")
        .submit(&api)
        .await;

    // Assert
    assert_eq!(form.feedback(), Some(SENT_FEEDBACK));
    assert_eq!(form.name(), "");
    assert!(!form.is_loading());
}

#[tokio::test]
async fn a_provider_failure_surfaces_the_server_message() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;
    let api = api_client(app.contact_endpoint());

    // Act
    let form = ContactForm::default()
        .with_name("Ann")
        .with_email("ann@example.com")
        .with_message("Hi")
        .submit(&api)
        .await;

    // Assert
    assert_eq!(
        form.feedback(),
        Some("Failed to send email. Please try again later.")
    );
    assert_eq!(form.message(), "Hi");
}
