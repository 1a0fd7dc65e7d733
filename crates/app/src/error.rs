use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("registry error: {0}")]
    Registry(String),
    #[error("{0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_errors_carry_context() {
        let err = AppError::Registry("capability x registered more than once".to_string());
        assert_eq!(
            err.to_string(),
            "registry error: capability x registered more than once"
        );
    }

    #[test]
    fn not_found_shows_bare_message() {
        let err = AppError::NotFound("no implementation registered for x".to_string());
        assert_eq!(err.to_string(), "no implementation registered for x");
    }
}
