use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, Error, HttpResponse};
use serde::Serialize;

/// Envelope shared by every JSON response of the service.
#[derive(Debug, Serialize)]
pub struct JsonResponse<T> {
    pub status: String,
    pub message: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<T>>,
}

pub struct JsonResponseBuilder<T> {
    message: String,
    id: Option<String>,
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T: Serialize> JsonResponse<T> {
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder {
            message: String::new(),
            id: None,
            item: None,
            list: None,
        }
    }
}

impl<T: Serialize> JsonResponseBuilder<T> {
    pub fn set_msg<S: Into<String>>(mut self, msg: S) -> Self {
        self.message = msg.into();
        self
    }

    pub fn set_id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    fn into_json_response(self, code: StatusCode, fallback: &str) -> JsonResponse<T> {
        let message = if self.message.trim().is_empty() {
            fallback.to_string()
        } else {
            self.message
        };
        let status = if code.is_success() { "OK" } else { "Error" };

        JsonResponse {
            status: status.to_string(),
            message,
            code: code.as_u16(),
            id: self.id,
            item: self.item,
            list: self.list,
        }
    }

    pub fn into_http_response(self, code: StatusCode) -> HttpResponse {
        let fallback = code.canonical_reason().unwrap_or("Error");
        HttpResponse::build(code).json(self.into_json_response(code, fallback))
    }

    pub fn ok<S: Into<String>>(self, msg: S) -> web::Json<JsonResponse<T>> {
        web::Json(self.set_msg(msg).into_json_response(StatusCode::OK, "Success"))
    }

    fn into_error<S: Into<String>>(self, code: StatusCode, msg: S) -> Error {
        let msg = msg.into();
        let response = self.set_msg(msg.clone()).into_http_response(code);
        InternalError::from_response(msg, response).into()
    }

    pub fn bad_request<S: Into<String>>(self, msg: S) -> Error {
        self.into_error(StatusCode::BAD_REQUEST, msg)
    }

    pub fn form_error<S: Into<String>>(self, msg: S) -> Error {
        self.into_error(StatusCode::UNPROCESSABLE_ENTITY, msg)
    }

    pub fn unauthorized<S: Into<String>>(self, msg: S) -> Error {
        self.into_error(StatusCode::UNAUTHORIZED, msg)
    }

    pub fn not_found<S: Into<String>>(self, msg: S) -> Error {
        self.into_error(StatusCode::NOT_FOUND, msg)
    }

    pub fn internal_server_error<S: Into<String>>(self, msg: S) -> Error {
        self.into_error(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }
}
