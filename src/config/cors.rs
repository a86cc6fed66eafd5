use actix_cors::Cors;

/// Any origin may read the API.
pub fn configure_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET"])
        .allow_any_header()
        .max_age(3600) // Cache preflight responses for 1 hour
}
