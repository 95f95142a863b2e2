use actix_web::{HttpResponse, web};

use crate::handler::{ContactResponse, handle};
use crate::mail_sender::ContactMailer;

/// The body is taken as raw bytes so that a malformed payload still gets the
/// contact form's own 400 message instead of actix's extractor error.
/// A body that cannot be read at all, e.g. one over the payload limit, is
/// handled like an empty one.
pub async fn contact(
    body: Result<web::Bytes, actix_web::Error>,
    mailer: web::Data<ContactMailer>,
) -> HttpResponse {
    let body = body.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to read the contact form body");
        web::Bytes::new()
    });
    handle(&body, mailer.get_ref()).await.into()
}

impl From<ContactResponse> for HttpResponse {
    fn from(response: ContactResponse) -> Self {
        HttpResponse::build(response.status_code()).json(response)
    }
}
