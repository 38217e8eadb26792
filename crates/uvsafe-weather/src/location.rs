//! Start location resolution with fallback.

use crate::types::{Location, LocationError};
use std::future::Future;

/// Something that can report where the user is.
pub trait LocationSource {
    fn current_location(&self) -> impl Future<Output = Result<Location, LocationError>> + Send;
}

/// A position supplied up front, e.g. from command-line coordinates.
#[derive(Debug, Clone)]
pub struct FixedLocation(pub Location);

impl LocationSource for FixedLocation {
    async fn current_location(&self) -> Result<Location, LocationError> {
        if !self.0.is_in_range() {
            return Err(LocationError::Other(format!(
                "coordinates out of range: {}, {}",
                self.0.latitude, self.0.longitude
            )));
        }
        Ok(self.0.clone())
    }
}

/// No positioning available on this host.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl LocationSource for Unavailable {
    async fn current_location(&self) -> Result<Location, LocationError> {
        Err(LocationError::ServiceUnavailable)
    }
}

/// Ask `source` for the current location, falling back to `fallback` on any error.
pub async fn resolve_start_location<S: LocationSource>(source: &S, fallback: Location) -> Location {
    match source.current_location().await {
        Ok(location) => {
            tracing::info!("Got location: {}, {}", location.latitude, location.longitude);
            location
        }
        Err(e) => {
            tracing::warn!("{}; using fallback location {}", e, fallback.label());
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Denied;

    impl LocationSource for Denied {
        async fn current_location(&self) -> Result<Location, LocationError> {
            Err(LocationError::PermissionDenied)
        }
    }

    fn new_york() -> Location {
        Location::new(40.7128, -74.0060).with_name("New York")
    }

    #[tokio::test]
    async fn test_fixed_location_is_used() {
        let here = Location::new(-33.8688, 151.2093);
        let resolved = resolve_start_location(&FixedLocation(here.clone()), new_york()).await;
        assert_eq!(resolved, here);
    }

    #[tokio::test]
    async fn test_permission_denied_falls_back() {
        let resolved = resolve_start_location(&Denied, new_york()).await;
        assert_eq!(resolved, new_york());
    }

    #[tokio::test]
    async fn test_unavailable_falls_back() {
        let resolved = resolve_start_location(&Unavailable, new_york()).await;
        assert_eq!(resolved.name.as_deref(), Some("New York"));
    }

    #[tokio::test]
    async fn test_out_of_range_fixed_location_falls_back() {
        let bogus = FixedLocation(Location::new(123.0, 0.0));
        assert!(matches!(
            bogus.current_location().await,
            Err(LocationError::Other(_))
        ));
        let resolved = resolve_start_location(&bogus, new_york()).await;
        assert_eq!(resolved, new_york());
    }
}
