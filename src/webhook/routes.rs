use ntex::web;

/// Configures webhook routes for the Instagram Graph API.
///
/// These routes are public endpoints that don't require authentication;
/// Meta authenticates itself through the verification handshake token.
///
/// # Routes
/// - `GET /webhook` - subscription verification handshake
/// - `POST /webhook` - webhook event receiver
pub fn instagram(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/webhook").service((super::instagram::verify, super::instagram::receive)),
    );
}
