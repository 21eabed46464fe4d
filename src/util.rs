// Return 500 with the error preserved
pub fn e500<T: std::fmt::Display + std::fmt::Debug + 'static>(e: T) -> actix_web::Error {
    actix_web::error::ErrorInternalServerError(e)
}
