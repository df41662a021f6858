use crate::generation::generator::ResumeGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds immutable configuration only; nothing here is mutated per request.
#[derive(Clone)]
pub struct AppState {
    pub generator: ResumeGenerator,
}
