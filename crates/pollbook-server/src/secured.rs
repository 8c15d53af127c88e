// Authorization guard for request handlers

// Re-export so the macro expansion can reach these via $crate
pub use pollbook_auth::model::AuthContext;

/// Yields the authenticated operator's username, or returns a uniform 401
/// from the surrounding handler.
///
/// Any authenticated operator may act on any voter; there is no per-station
/// or per-role scoping. Missing, invalid, and expired tokens are collapsed
/// into one outward signal on purpose.
#[macro_export]
macro_rules! authenticated {
    ($req:expr) => {{
        let __operator: Option<String> = {
            let __extensions = actix_web::HttpMessage::extensions(&$req);
            match __extensions.get::<$crate::secured::AuthContext>() {
                Some(__ctx) if __ctx.is_authenticated() => Some(__ctx.username.clone()),
                Some(__ctx) => {
                    if __ctx.token_provided {
                        tracing::debug!(
                            path = %$req.path(),
                            error = %__ctx.jwt_error_string(),
                            "rejected token"
                        );
                    }
                    None
                }
                None => None,
            }
        };

        match __operator {
            Some(__username) => __username,
            None => {
                return $crate::model::response::ErrorResult::http_response_unauthorized(
                    $req.path(),
                );
            }
        }
    }};
}
