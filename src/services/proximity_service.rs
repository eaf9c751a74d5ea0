//! Proximity Service
//!
//! Computes the straight-line distance between the property and the nearest
//! beach access point, and shapes the request handed to the external routing
//! collaborator for the map's road-route overlay.
//!
//! ## Behavior
//! - Distance is computed locally (haversine) and is always available.
//! - The road-route geometry comes from an OSRM-shaped routing service; any
//!   failure there degrades to an empty geometry so the map simply draws no
//!   route line. The distance figure is unaffected.
//! - Override the routing endpoint with the `ROUTING_URL` environment
//!   variable (read in `main`, not here).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::property::GeoPoint;

pub const EARTH_RADIUS_MILES: f64 = 3958.7613;

const DEFAULT_ROUTING_URL: &str = "https://router.project-osrm.org";
const ROUTING_PROFILE: &str = "driving";

/// Opaque descriptor handed to the routing collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRequest {
    pub origin: GeoPoint,
    pub destination: GeoPoint,
    pub profile: String,
}

/// GeoJSON LineString as returned by the routing collaborator, passed through
/// unchanged to the map renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<[f64; 2]>,
}

impl RouteGeometry {
    pub fn empty() -> Self {
        Self {
            kind: "LineString".to_string(),
            coordinates: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct RoutingResponse {
    #[serde(default)]
    routes: Vec<RoutedLeg>,
}

#[derive(Debug, Deserialize)]
struct RoutedLeg {
    geometry: RouteGeometry,
}

#[derive(Clone)]
pub struct ProximityService {
    http_client: reqwest::Client,
    routing_url: String,
}

impl ProximityService {
    pub fn new(routing_url: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http_client,
            routing_url: routing_url.unwrap_or_else(|| DEFAULT_ROUTING_URL.to_string()),
        })
    }

    pub fn routing_url(&self) -> &str {
        &self.routing_url
    }

    /// Great-circle distance in miles between two coordinates.
    pub fn distance_miles(a: GeoPoint, b: GeoPoint) -> f64 {
        let lat1 = a.lat.to_radians();
        let lat2 = b.lat.to_radians();
        let d_lat = (b.lat - a.lat).to_radians();
        let d_lon = (b.lon - a.lon).to_radians();

        let s = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * s.sqrt().atan2((1.0 - s).sqrt());

        EARTH_RADIUS_MILES * c
    }

    /// Display label for a distance; anything under a tenth of a mile is
    /// reported as "<0.1 mi".
    pub fn format_distance(miles: f64) -> String {
        if miles < 0.1 {
            "<0.1 mi".to_string()
        } else {
            format!("{:.1} mi", miles)
        }
    }

    pub fn build_route_request(origin: GeoPoint, destination: GeoPoint) -> RouteRequest {
        RouteRequest {
            origin,
            destination,
            profile: ROUTING_PROFILE.to_string(),
        }
    }

    /// Fetches the road-route geometry for the map overlay. Never errors:
    /// a failed request, a malformed body, or an empty `routes` array all
    /// degrade to the empty geometry.
    pub async fn fetch_route(&self, request: &RouteRequest) -> RouteGeometry {
        match self.try_fetch_route(request).await {
            Ok(geometry) => geometry,
            Err(err) => {
                eprintln!("Route fetch failed, map will draw no route: {}", err);
                RouteGeometry::empty()
            }
        }
    }

    async fn try_fetch_route(
        &self,
        request: &RouteRequest,
    ) -> Result<RouteGeometry, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!(
            "{}/route/v1/{}/{},{};{},{}?overview=full&geometries=geojson",
            self.routing_url,
            request.profile,
            request.origin.lon,
            request.origin.lat,
            request.destination.lon,
            request.destination.lat
        );

        let response = self.http_client.get(&url).send().await?;
        let response_text = response.text().await?;

        let geometry = decode_route_geometry(&response_text)
            .map_err(|e| format!("Failed to parse routing response: {}", e))?;

        Ok(geometry)
    }
}

fn decode_route_geometry(body: &str) -> Result<RouteGeometry, serde_json::Error> {
    let response: RoutingResponse = serde_json::from_str(body)?;
    Ok(first_route_geometry(response))
}

fn first_route_geometry(body: RoutingResponse) -> RouteGeometry {
    body.routes
        .into_iter()
        .next()
        .map(|leg| leg.geometry)
        .unwrap_or_else(RouteGeometry::empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_degree_of_latitude() {
        let a = GeoPoint { lon: 0.0, lat: 0.0 };
        let b = GeoPoint { lon: 0.0, lat: 1.0 };
        let miles = ProximityService::distance_miles(a, b);
        assert!((miles - 69.0933).abs() < 0.01, "got {}", miles);
    }

    #[test]
    fn test_distance_is_symmetric_and_zero_at_same_point() {
        let a = GeoPoint {
            lon: -86.2794,
            lat: 30.3693,
        };
        let b = GeoPoint {
            lon: -86.2771,
            lat: 30.3659,
        };
        let forward = ProximityService::distance_miles(a, b);
        let backward = ProximityService::distance_miles(b, a);
        assert!((forward - backward).abs() < 1e-12);
        assert_eq!(ProximityService::distance_miles(a, a), 0.0);
        // Cottage to beach access is a short walk, well under a mile.
        assert!(forward > 0.1 && forward < 1.0, "got {}", forward);
    }

    #[test]
    fn test_format_under_a_tenth_of_a_mile() {
        // Roughly 0.05 miles of latitude.
        let a = GeoPoint { lon: 0.0, lat: 0.0 };
        let b = GeoPoint {
            lon: 0.0,
            lat: 0.05 / 69.0933,
        };
        let miles = ProximityService::distance_miles(a, b);
        assert!(miles < 0.1);
        assert_eq!(ProximityService::format_distance(miles), "<0.1 mi");
    }

    #[test]
    fn test_format_rounds_to_one_decimal() {
        assert_eq!(ProximityService::format_distance(1.27), "1.3 mi");
        assert_eq!(ProximityService::format_distance(0.1), "0.1 mi");
        assert_eq!(ProximityService::format_distance(12.04), "12.0 mi");
    }

    #[test]
    fn test_route_request_uses_driving_profile() {
        let a = GeoPoint { lon: 1.0, lat: 2.0 };
        let b = GeoPoint { lon: 3.0, lat: 4.0 };
        let request = ProximityService::build_route_request(a, b);
        assert_eq!(request.profile, "driving");
        assert_eq!(request.origin, a);
        assert_eq!(request.destination, b);
    }

    #[test]
    fn test_first_route_geometry_reads_routes_zero() {
        let body: RoutingResponse = serde_json::from_str(
            r#"{"routes":[{"geometry":{"type":"LineString","coordinates":[[-86.27,30.36],[-86.28,30.37]]}},{"geometry":{"type":"LineString","coordinates":[]}}]}"#,
        )
        .unwrap();
        let geometry = first_route_geometry(body);
        assert_eq!(geometry.kind, "LineString");
        assert_eq!(geometry.coordinates.len(), 2);
    }

    #[test]
    fn test_empty_routes_falls_back_to_empty_geometry() {
        let body: RoutingResponse = serde_json::from_str(r#"{"routes":[]}"#).unwrap();
        assert!(first_route_geometry(body).is_empty());

        // A response with no routes field at all degrades the same way.
        let body: RoutingResponse = serde_json::from_str(r#"{"code":"NoRoute"}"#).unwrap();
        assert!(first_route_geometry(body).is_empty());
    }

    #[test]
    fn test_malformed_body_is_a_decode_error() {
        assert!(decode_route_geometry("<html>502 Bad Gateway</html>").is_err());
        assert!(decode_route_geometry("").is_err());
        // A routes array holding the wrong shape fails the same way.
        assert!(decode_route_geometry(r#"{"routes":[{"geometry":"oops"}]}"#).is_err());
    }

    #[tokio::test]
    async fn test_malformed_routing_body_degrades_to_empty() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        // One-shot collaborator that answers 200 with a non-JSON body.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let _ = socket
                    .write_all(
                        b"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 8\r\n\r\nnot json",
                    )
                    .await;
            }
        });

        let service = ProximityService::new(Some(format!("http://{}", addr))).unwrap();
        let request = ProximityService::build_route_request(
            GeoPoint { lon: 0.0, lat: 0.0 },
            GeoPoint { lon: 1.0, lat: 1.0 },
        );
        let geometry = service.fetch_route(&request).await;
        assert!(geometry.is_empty());
        assert_eq!(geometry.kind, "LineString");
    }

    #[tokio::test]
    async fn test_unreachable_collaborator_degrades_to_empty() {
        let service = ProximityService::new(Some("http://127.0.0.1:9".to_string())).unwrap();
        let request = ProximityService::build_route_request(
            GeoPoint { lon: 0.0, lat: 0.0 },
            GeoPoint { lon: 1.0, lat: 1.0 },
        );
        let geometry = service.fetch_route(&request).await;
        assert!(geometry.is_empty());
        assert_eq!(geometry.kind, "LineString");
    }
}
