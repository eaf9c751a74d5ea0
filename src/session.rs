//! Per-guest session state and the background tasks scoped to it.
//!
//! Each session owns one itinerary engine plus two cosmetic background
//! tasks: a one-shot fetch of the road-route geometry and a repeating camera
//! rotation tick for the map. Both task handles are kept on the session and
//! aborted when it is torn down, so nothing can touch session state after
//! the session is gone.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};
use uuid::Uuid;

use crate::models::addon::AddOnCatalog;
use crate::models::property::PropertyConfig;
use crate::services::itinerary_engine::ItineraryEngine;
use crate::services::proximity_service::{ProximityService, RouteGeometry};

const ROTATION_TICK_MS: u64 = 100;
const ROTATION_STEP_DEGREES: f64 = 0.1;

pub struct Session {
    pub engine: ItineraryEngine,
    route: Arc<Mutex<RouteGeometry>>,
    bearing: Arc<Mutex<f64>>,
    tasks: Vec<JoinHandle<()>>,
}

impl Session {
    fn start(engine: ItineraryEngine, proximity: ProximityService) -> Self {
        let route = Arc::new(Mutex::new(RouteGeometry::empty()));
        let bearing = Arc::new(Mutex::new(0.0_f64));

        let property = engine.property().clone();
        let route_slot = Arc::clone(&route);
        let fetch_task = tokio::spawn(async move {
            let request =
                ProximityService::build_route_request(property.location, property.beach_access);
            let geometry = proximity.fetch_route(&request).await;
            let mut slot = route_slot
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *slot = geometry;
        });

        let bearing_slot = Arc::clone(&bearing);
        let rotation_task = tokio::spawn(async move {
            let mut tick = interval(Duration::from_millis(ROTATION_TICK_MS));
            loop {
                tick.tick().await;
                let mut bearing = bearing_slot
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                *bearing = (*bearing + ROTATION_STEP_DEGREES) % 360.0;
            }
        });

        Self {
            engine,
            route,
            bearing,
            tasks: vec![fetch_task, rotation_task],
        }
    }

    /// Latest route geometry; the empty LineString until the fetch lands or
    /// forever if the routing collaborator is unreachable.
    pub fn route_geometry(&self) -> RouteGeometry {
        self.route
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn camera_bearing(&self) -> f64 {
        *self.bearing.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

/// Registry of live sessions, shared with the route handlers as app data.
/// Sessions are in-memory only and die with the process.
pub struct SessionManager {
    catalog: AddOnCatalog,
    property: PropertyConfig,
    proximity: ProximityService,
    sessions: Mutex<HashMap<Uuid, Session>>,
}

impl SessionManager {
    pub fn new(
        catalog: AddOnCatalog,
        property: PropertyConfig,
        proximity: ProximityService,
    ) -> Self {
        Self {
            catalog,
            property,
            proximity,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn catalog(&self) -> &AddOnCatalog {
        &self.catalog
    }

    pub fn property(&self) -> &PropertyConfig {
        &self.property
    }

    pub fn create(&self) -> Uuid {
        let engine = ItineraryEngine::new(self.catalog.clone(), self.property.clone());
        let session = Session::start(engine, self.proximity.clone());
        let session_id = Uuid::new_v4();

        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(session_id, session);

        session_id
    }

    /// Runs `f` against the named session while the registry lock is held,
    /// so mutations are processed one at a time to completion.
    pub fn with_session<R>(&self, session_id: Uuid, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        sessions.get_mut(&session_id).map(f)
    }

    /// Tears the session down; dropping it aborts its background tasks.
    pub fn close(&self, session_id: Uuid) -> bool {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&session_id)
            .is_some()
    }
}
