//! Route planning over a day's activities
//!
//! Resolves activity titles to ordered stops, one sequential lookup at a
//! time. Lookups are memoized by exact query string for the planner's
//! lifetime; only successful resolutions are cached. A failed or empty
//! lookup drops that stop and the batch continues.

use std::collections::HashMap;

use tracing::{debug, warn};

use itinstore::DayPlan;

use super::{Coordinate, Geocoder};

/// One resolved stop on a day's route
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStop {
    pub name: String,
    pub coord: Coordinate,
}

/// An ordered route through a day.
///
/// `center` carries the fixed fallback location when nothing resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub stops: Vec<RouteStop>,
    pub center: Option<Coordinate>,
}

impl Route {
    /// The connecting path, in stop order
    pub fn path(&self) -> Vec<Coordinate> {
        self.stops.iter().map(|s| s.coord).collect()
    }
}

/// Resolves day plans to routes through a [`Geocoder`]
pub struct RoutePlanner<G> {
    geocoder: G,
    cache: HashMap<String, Coordinate>,
    query_suffix: String,
    fallback: Coordinate,
}

impl<G: Geocoder> RoutePlanner<G> {
    pub fn new(geocoder: G, query_suffix: impl Into<String>, fallback: Coordinate) -> Self {
        Self {
            geocoder,
            cache: HashMap::new(),
            query_suffix: query_suffix.into(),
            fallback,
        }
    }

    /// Resolve the day's activities to an ordered route
    pub async fn plan(&mut self, day: &DayPlan) -> Route {
        let mut stops = Vec::new();

        for activity in &day.activities {
            let place = activity.title.trim();
            if place.is_empty() {
                continue;
            }
            let query = format!("{}, {}", place, self.query_suffix);
            if let Some(coord) = self.lookup(&query).await {
                stops.push(RouteStop {
                    name: place.to_string(),
                    coord,
                });
            }
        }

        let center = if stops.is_empty() { Some(self.fallback) } else { None };
        Route { stops, center }
    }

    async fn lookup(&mut self, query: &str) -> Option<Coordinate> {
        if let Some(coord) = self.cache.get(query) {
            debug!(%query, "lookup: cache hit");
            return Some(*coord);
        }
        match self.geocoder.geocode(query).await {
            Ok(Some(coord)) => {
                self.cache.insert(query.to_string(), coord);
                Some(coord)
            }
            Ok(None) => {
                debug!(%query, "lookup: no match");
                None
            }
            Err(e) => {
                warn!(%query, error = %e, "lookup: geocoding failed, skipping stop");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    const FALLBACK: Coordinate = Coordinate {
        lat: 41.9028,
        lon: 12.4964,
    };

    /// Test geocoder: known places resolve, "offline" errors, rest miss
    struct MockGeocoder {
        calls: Mutex<Vec<String>>,
    }

    impl MockGeocoder {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Geocoder for MockGeocoder {
        async fn geocode(&self, query: &str) -> Result<Option<Coordinate>, GeoError> {
            self.calls.lock().unwrap().push(query.to_string());
            if query.starts_with("offline") {
                return Err(GeoError::InvalidResponse("status 503".to_string()));
            }
            if query.starts_with("Colosseum") {
                return Ok(Some(Coordinate {
                    lat: 41.8902,
                    lon: 12.4922,
                }));
            }
            if query.starts_with("Pantheon") {
                return Ok(Some(Coordinate {
                    lat: 41.8986,
                    lon: 12.4769,
                }));
            }
            Ok(None)
        }
    }

    fn day_with(titles: &[&str]) -> DayPlan {
        let mut day = DayPlan::new("Test day");
        for title in titles {
            day.activities.push(itinstore::Activity {
                time: String::new(),
                title: title.to_string(),
                category: String::new(),
                notes: String::new(),
            });
        }
        day
    }

    #[tokio::test]
    async fn test_plan_resolves_in_order() {
        let mut planner = RoutePlanner::new(MockGeocoder::new(), "Rome, Italy", FALLBACK);
        let day = day_with(&["Colosseum", "Pantheon"]);

        let route = planner.plan(&day).await;
        assert_eq!(route.stops.len(), 2);
        assert_eq!(route.stops[0].name, "Colosseum");
        assert_eq!(route.stops[1].name, "Pantheon");
        assert!(route.center.is_none());
        assert_eq!(route.path().len(), 2);
    }

    #[tokio::test]
    async fn test_plan_appends_query_suffix() {
        let planner_geocoder = MockGeocoder::new();
        let mut planner = RoutePlanner::new(planner_geocoder, "Rome, Italy", FALLBACK);
        let day = day_with(&["Colosseum"]);

        planner.plan(&day).await;
        let calls = planner.geocoder.calls.lock().unwrap().clone();
        assert_eq!(calls, vec!["Colosseum, Rome, Italy".to_string()]);
    }

    #[tokio::test]
    async fn test_plan_memoizes_duplicate_queries() {
        let mut planner = RoutePlanner::new(MockGeocoder::new(), "Rome, Italy", FALLBACK);
        let day = day_with(&["Colosseum", "Colosseum", "Colosseum"]);

        let route = planner.plan(&day).await;
        assert_eq!(route.stops.len(), 3);
        assert_eq!(planner.geocoder.call_count(), 1);
    }

    #[tokio::test]
    async fn test_plan_failures_do_not_abort_batch() {
        let mut planner = RoutePlanner::new(MockGeocoder::new(), "Rome, Italy", FALLBACK);
        let day = day_with(&["offline cafe", "Colosseum"]);

        let route = planner.plan(&day).await;
        assert_eq!(route.stops.len(), 1);
        assert_eq!(route.stops[0].name, "Colosseum");
    }

    #[tokio::test]
    async fn test_plan_failures_are_not_cached() {
        let mut planner = RoutePlanner::new(MockGeocoder::new(), "Rome, Italy", FALLBACK);
        let day = day_with(&["offline cafe", "offline cafe"]);

        planner.plan(&day).await;
        // Both lookups hit the geocoder; errors never enter the cache
        assert_eq!(planner.geocoder.call_count(), 2);
    }

    #[tokio::test]
    async fn test_plan_unresolved_day_centers_on_fallback() {
        let mut planner = RoutePlanner::new(MockGeocoder::new(), "Rome, Italy", FALLBACK);
        let day = day_with(&["nowhere special"]);

        let route = planner.plan(&day).await;
        assert!(route.stops.is_empty());
        assert_eq!(route.center, Some(FALLBACK));
    }

    #[tokio::test]
    async fn test_plan_skips_blank_titles() {
        let mut planner = RoutePlanner::new(MockGeocoder::new(), "Rome, Italy", FALLBACK);
        let day = day_with(&["   ", "Colosseum"]);

        let route = planner.plan(&day).await;
        assert_eq!(route.stops.len(), 1);
        assert_eq!(planner.geocoder.call_count(), 1);
    }
}
