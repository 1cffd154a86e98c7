//! JSON body extractor that names the field a body failed to decode at.
//!
//! `web::Json<T>` reports every serde failure against the whole body. This
//! extractor reads the body as a [`Value`] first, so syntax, content-type
//! and size failures still flow through
//! [`json_error_handler`](super::error::json_error_handler), then decodes
//! `T` while tracking the path, so a string sent for `rating` is reported
//! under `rating` and a number in a palette under
//! `visualUniverse.palette[0]`.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, web};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::Error;
use crate::inbound::http::validation::FieldErrors;

/// Field name used when a failure has no narrower path, such as an unknown
/// top-level key.
const BODY: &str = "body";

/// Typed request body decoded with field-path error reporting.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T> JsonBody<T> {
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for JsonBody<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let body = web::Json::<Value>::from_request(req, payload);
        Box::pin(async move {
            let web::Json(value) = body.await?;
            decode(value).map(JsonBody).map_err(actix_web::Error::from)
        })
    }
}

/// Decode `value` into `T`, naming the failing path in the error envelope.
pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    serde_path_to_error::deserialize(value).map_err(|err| {
        let path = err.path().to_string();
        let field = if path == "." { BODY.to_owned() } else { path };
        let mut errors = FieldErrors::new();
        errors.undecodable(field, err.into_inner().to_string());
        errors.into_error()
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase", deny_unknown_fields)]
    struct Body {
        #[serde(rename = "rating")]
        _rating: Option<i64>,
        #[serde(rename = "visualUniverse")]
        _visual_universe: Option<Nested>,
    }

    #[derive(Debug, Deserialize)]
    struct Nested {
        #[serde(rename = "palette")]
        _palette: Option<Vec<String>>,
    }

    fn first_field(err: &Error) -> Option<&str> {
        err.details()
            .and_then(|details| details.pointer("/errors/0/field"))
            .and_then(Value::as_str)
    }

    #[rstest]
    #[case(json!({"rating": "5"}), "rating")]
    #[case(json!({"visualUniverse": {"palette": [7]}}), "visualUniverse.palette[0]")]
    #[case(json!({"visualUniverse": {"palette": ["#000000", false]}}), "visualUniverse.palette[1]")]
    #[case(json!({"unexpected": true}), "body")]
    #[case(json!([1, 2]), "body")]
    fn failures_name_the_offending_path(#[case] value: Value, #[case] field: &str) {
        let err = decode::<Body>(value).expect_err("decode fails");
        assert_eq!(first_field(&err), Some(field));
        assert_eq!(
            err.details()
                .and_then(|details| details.pointer("/errors/0/code"))
                .and_then(Value::as_str),
            Some("invalid_value")
        );
    }

    #[rstest]
    fn well_typed_bodies_decode() {
        assert!(decode::<Body>(json!({"rating": 4, "visualUniverse": null})).is_ok());
    }
}
