use std::sync::Arc;
use crate::context::structs::data_context::DataContext;

/// Application data injected into every API handler.
#[derive(Clone)]
pub struct ApiServiceData {
    pub context: Arc<DataContext>,
}
