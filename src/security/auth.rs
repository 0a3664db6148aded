use rocket::request::{FromRequest, Outcome, Request};

// ── Client IP request guard ──

/// Extracts the real client IP from the request.
/// Checks headers in priority order:
///   1. CF-Connecting-IP (Cloudflare)
///   2. X-Real-IP (nginx proxy_set_header)
///   3. X-Forwarded-For (first IP in the chain = original client)
///   4. Rocket's client_ip() (socket peer address)
pub struct ClientIp(pub String);

fn first_header<'r>(request: &'r Request<'_>, name: &str) -> Option<&'r str> {
    request
        .headers()
        .get_one(name)
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for ClientIp {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        for name in ["CF-Connecting-IP", "X-Real-IP", "X-Forwarded-For"] {
            if let Some(ip) = first_header(request, name) {
                return Outcome::Success(ClientIp(ip.to_string()));
            }
        }

        // Fallback to Rocket's socket peer address
        let ip = request
            .client_ip()
            .map(|ip| ip.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        Outcome::Success(ClientIp(ip))
    }
}
