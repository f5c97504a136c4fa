use std::ops::{Deref, DerefMut};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::Error as JsonError;
use tracing::{debug, warn};

use crate::error::AppError;

/// JSON body extractor with standardized error handling.
///
/// Deserializes request bodies and converts parse failures into the service's
/// 400 error shape with a sanitized message, instead of actix-web's default
/// error payload.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    /// Extract the inner value from the ValidatedJson wrapper
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(_req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let mut payload = payload.take();

        Box::pin(async move {
            // Collect the request body into BytesMut
            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    warn!(error = %e, "Failed to read request body chunk");
                    AppError::bad_request("failed to read request body".to_string())
                })?;
                body.extend_from_slice(&chunk);
            }

            // Attempt to parse JSON
            let parsed = serde_json::from_slice::<T>(&body).map_err(|e| {
                let detail = classify_json_error(&e);
                debug!(body_size = body.len(), detail = %detail, "JSON parsing failed");
                AppError::bad_request(detail)
            })?;

            Ok(ValidatedJson(parsed))
        })
    }
}

/// Classify serde_json::Error and return a sanitized error message
fn classify_json_error(error: &JsonError) -> String {
    match error.classify() {
        serde_json::error::Category::Syntax => {
            let line = error.line();
            format!("invalid JSON at line {line}")
        }
        serde_json::error::Category::Eof => "invalid JSON: unexpected end of input".to_string(),
        serde_json::error::Category::Data => {
            "invalid JSON: wrong types for one or more fields".to_string()
        }
        serde_json::error::Category::Io => "invalid JSON: I/O error while reading body".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct Probe {
        #[allow(dead_code)]
        value: u32,
    }

    #[test]
    fn syntax_errors_report_the_line() {
        let err = serde_json::from_str::<Probe>("{\n\"value\": ,}").unwrap_err();
        assert_eq!(classify_json_error(&err), "invalid JSON at line 2");
    }

    #[test]
    fn truncated_bodies_report_eof() {
        let err = serde_json::from_str::<Probe>("{\"value\":").unwrap_err();
        assert_eq!(
            classify_json_error(&err),
            "invalid JSON: unexpected end of input"
        );
    }

    #[test]
    fn type_mismatches_report_data_category() {
        let err = serde_json::from_str::<Probe>("{\"value\": \"nope\"}").unwrap_err();
        assert_eq!(
            classify_json_error(&err),
            "invalid JSON: wrong types for one or more fields"
        );
    }
}
