use std::collections::BTreeMap;
use std::sync::Arc;
use parking_lot::Mutex;
use tokio::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct CacheConnectorMemory {
    pub(crate) entries: Arc<Mutex<BTreeMap<String, (String, Instant)>>>,
}
