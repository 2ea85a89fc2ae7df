use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use extractor_client::ExtractorClient;
use profile_handle::Handle;
use profile_record::ProfileRecord;

use crate::raster_client::RasterClient;

/// The profile currently held in the preview slot.
#[derive(Debug, Clone)]
pub struct LoadedProfile {
    pub handle: Handle,
    pub record: ProfileRecord,
}

/// Shared application state passed to all route handlers
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<ExtractorClient>,
    pub rasterizer: Arc<RasterClient>,
    /// Single preview slot. A new load simply overwrites it: concurrent
    /// loads are not cancelled, whichever response lands last wins.
    pub profile: Arc<RwLock<Option<LoadedProfile>>>,
    pub started_at: DateTime<Utc>,
}
