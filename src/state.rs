use crate::catalog::Catalogue;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub catalogue: Arc<Catalogue>,
}

impl AppState {
    pub fn new(catalogue: Catalogue) -> Self {
        Self {
            catalogue: Arc::new(catalogue),
        }
    }
}
