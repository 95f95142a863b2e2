use contact_form::configuration::{Settings, get_configuration};
use contact_form::startup::Application;
use contact_form::telemetry;
use once_cell::sync::Lazy;
use wiremock::MockServer;

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // The sink is part of the subscriber's type, hence the two branches.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        telemetry::init_subscriber(subscriber);
    } else {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        telemetry::init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub fn contact_endpoint(&self) -> String {
        format!("{}/contact", &self.address)
    }

    pub async fn post_contact<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.api_client
            .post(self.contact_endpoint())
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_contact_raw(&self, content_type: &str, body: String) -> reqwest::Response {
        self.api_client
            .post(self.contact_endpoint())
            .header("Content-Type", content_type)
            .body(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// JSON bodies of every request that reached the mail provider.
    pub async fn sent_emails(&self) -> Vec<serde_json::Value> {
        self.email_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|request| serde_json::from_slice(&request.body).unwrap())
            .collect()
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

pub async fn spawn_app_with_recipient(recipient: &str) -> TestApp {
    spawn_app_with(|c| c.email_client.recipient_email = Some(recipient.to_owned())).await
}

/// Spin up an instance of the web server against a mock mail provider.
/// `customise` runs last, after the test defaults are applied.
pub async fn spawn_app_with(customise: impl FnOnce(&mut Settings)) -> TestApp {
    // The first time `initialise` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    // Launch a mock server to stand in for the mail provider's API
    let email_server = MockServer::start().await;

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration");
        // Assign random OS port
        c.application.port = 0;
        c.email_client.base_url = email_server.uri();
        c.email_client.sender_email = "contact@example.com".into();
        c.email_client.recipient_email = None;
        customise(&mut c);
        c
    };

    let app = Application::build(configuration)
        .await
        .expect("Failed to build application");
    let address = format!("http://127.0.0.1:{}", app.port());

    // Tokio spins up a new runtime for each test, shutting down and cleaning up
    // after the test ran. Therefore, no cleanup needed.
    let _ = tokio::spawn(app.run_until_stopped());

    TestApp {
        address,
        email_server,
        api_client: reqwest::Client::new(),
    }
}
