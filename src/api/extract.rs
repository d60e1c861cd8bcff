use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::ApiError;

/// Request body decoded from either a JSON object or an urlencoded form.
///
/// Form values arrive as strings; JSON values keep their types. A request
/// with no content type and no body decodes as if it carried no fields.
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let fields = match content_kind(&req)? {
            Some(ContentKind::Json) => {
                let Json(fields) = Json::<Map<String, Value>>::from_request(req, state).await?;
                fields
            }
            Some(ContentKind::Form) => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state).await?;
                pairs
                    .into_iter()
                    .map(|(key, value)| (key, Value::String(value)))
                    .collect()
            }
            None => {
                let body = Bytes::from_request(req, state).await?;
                if !body.is_empty() {
                    return Err(ApiError::UnsupportedMediaType("none".to_string()));
                }
                Map::new()
            }
        };

        let input = serde_json::from_value(Value::Object(fields))?;
        Ok(Payload(input))
    }
}

enum ContentKind {
    Json,
    Form,
}

fn content_kind(req: &Request) -> Result<Option<ContentKind>, ApiError> {
    let Some(header) = req.headers().get(CONTENT_TYPE) else {
        return Ok(None);
    };
    let content_type = header
        .to_str()
        .map_err(|_| ApiError::UnsupportedMediaType("unreadable".to_string()))?;
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match mime.as_str() {
        "application/json" => Ok(Some(ContentKind::Json)),
        "application/x-www-form-urlencoded" => Ok(Some(ContentKind::Form)),
        m if m.starts_with("application/") && m.ends_with("+json") => Ok(Some(ContentKind::Json)),
        _ => Err(ApiError::UnsupportedMediaType(mime)),
    }
}
