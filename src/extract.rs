use crate::errors::ApiError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON body extractor with the leniency the web client relies on.
///
/// Unlike axum's `Json`, this one:
/// - does not require a `Content-Type` header
/// - decodes only the first JSON value and ignores anything after it
/// - treats a literal `null` body as `T::default()`
///
/// An empty body, invalid JSON or a wrongly typed field becomes
/// [`ApiError::Decode`] carrying serde_json's message.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::Decode(e.body_text()))?;

        decode_first(&bytes).map(JsonBody)
    }
}

fn decode_first<T>(bytes: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    match serde_json::Deserializer::from_slice(bytes)
        .into_iter::<Option<T>>()
        .next()
    {
        Some(Ok(value)) => Ok(value.unwrap_or_default()),
        Some(Err(e)) => Err(ApiError::Decode(e.to_string())),
        None => Err(ApiError::Decode("EOF".to_string())),
    }
}
