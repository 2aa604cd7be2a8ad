use thiserror::Error;

/// Authorization errors for dashboard and function endpoints
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Admin access required")]
    AdminRequired,
}
