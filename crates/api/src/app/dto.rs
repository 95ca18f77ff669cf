use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

// -------------------------
// Request DTOs
// -------------------------

/// Query string of `PATCH /checkout` and `PATCH /return`, kept as raw pairs
/// so a repeated key resolves to its first value.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct CirculationQuery(Vec<(String, String)>);

impl CirculationQuery {
    /// First value of `id`, or the empty string when absent.
    pub fn id(&self) -> &str {
        self.0
            .iter()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value.as_str())
            .unwrap_or_default()
    }
}

// -------------------------
// Response helpers
// -------------------------

const INDENT: &[u8] = b"    ";

/// JSON response body written with four-space indentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndentedJson<T>(pub T);

fn to_vec_indented<T: Serialize>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut body = Vec::with_capacity(128);
    let mut ser =
        serde_json::Serializer::with_formatter(&mut body, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;
    Ok(body)
}

impl<T: Serialize> IntoResponse for IndentedJson<T> {
    fn into_response(self) -> Response {
        match to_vec_indented(&self.0) {
            Ok(body) => (
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json; charset=utf-8"),
                )],
                body,
            )
                .into_response(),
            Err(e) => {
                tracing::error!("failed to encode response body: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
        }
    }
}
