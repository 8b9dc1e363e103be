//! Handlers not linked to a specific url

use crate::front::errors;
use ntex::web;

/// Return a [UrlNotFound](errors::UserError::UrlNotFound) error for urls not defined
pub async fn serve_not_found() -> Result<web::HttpResponse, web::Error> {
    Err(errors::UserError::UrlNotFound.into())
}

#[cfg(test)]
mod tests {
    use crate::{config, front, webhook};
    use ntex::web::{self, test};

    #[ntex::test]
    async fn test_unknown_route_returns_404() {
        let app_config = config::tests::test_config();
        let srv = test::server(move || {
            web::App::new()
                .state(front::AppState::new(app_config.clone()))
                .configure(webhook::routes::instagram)
                .default_service(web::route().to(super::serve_not_found))
        });

        let response = srv.get("/nope").send().await.unwrap();
        assert_eq!(response.status().as_u16(), 404);

        // Known path, unrouted method
        let response = srv
            .request(ntex::http::Method::DELETE, srv.url("/webhook"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 404);
    }
}
