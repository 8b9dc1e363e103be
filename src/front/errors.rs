use derive_more::{Display, Error};
use log::error;
use ntex::{http, web};

/// Errors caused by the caller's request; bodies mirror what the Graph API
/// tooling expects to read back.
#[derive(Debug, Display, Error)]
pub enum UserError {
    UrlNotFound,
    VerificationFailed,
    MalformedPayload,
    MissingQueryParam(#[error(not(source))] String),
}

impl web::error::WebResponseError for UserError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        error!("{:#?}", self);

        let body = match self {
            UserError::UrlNotFound => "Not Found".to_string(),
            UserError::VerificationFailed => "Forbidden".to_string(),
            UserError::MalformedPayload => "Bad Request".to_string(),
            UserError::MissingQueryParam(param) => format!("Missing {}", param),
        };

        web::HttpResponse::build(self.status_code())
            .set_header("content-type", "text/plain; charset=utf-8")
            .body(body)
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            UserError::UrlNotFound => http::StatusCode::NOT_FOUND,
            UserError::VerificationFailed => http::StatusCode::FORBIDDEN,
            UserError::MalformedPayload => http::StatusCode::BAD_REQUEST,
            UserError::MissingQueryParam(_) => http::StatusCode::BAD_REQUEST,
        }
    }
}

/// Upstream call failures. The response body stays generic; the error detail
/// is only logged server-side.
#[derive(Debug, Display, Error)]
pub enum ServerError {
    AccessTokenExchangeError(#[error(not(source))] String),
    LongLivedTokenExchangeError(#[error(not(source))] String),
}

impl ServerError {
    fn get_error_message(&self) -> String {
        match self {
            ServerError::AccessTokenExchangeError(msg) => {
                format!("[AccessTokenExchangeError] {:#?}", msg)
            }
            ServerError::LongLivedTokenExchangeError(msg) => {
                format!("[LongLivedTokenExchangeError] {:#?}", msg)
            }
        }
    }
}

impl web::error::WebResponseError for ServerError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        error!("{}", self.get_error_message());

        let body = match self {
            ServerError::AccessTokenExchangeError(_) => "Error fetching access token",
            ServerError::LongLivedTokenExchangeError(_) => "Error fetching long-lived access token",
        };

        web::HttpResponse::build(self.status_code())
            .set_header("content-type", "text/plain; charset=utf-8")
            .body(body)
    }

    fn status_code(&self) -> http::StatusCode {
        http::StatusCode::INTERNAL_SERVER_ERROR
    }
}
