/// Simulated device geolocation
///
/// Desktop hosts have no portable positioning service, so the demo
/// fakes the GPS fix: a short acquisition delay, then fixed demo
/// coordinates. Setting CIVIC_PULSE_NO_GPS exercises the failure
/// path a real provider would have.

use std::time::Duration;
use thiserror::Error;

/// Simulated fix acquisition time
const FIX_DELAY: Duration = Duration::from_millis(600);

/// Demo coordinates (San Francisco civic center area)
const DEMO_COORDS: Coordinates = Coordinates {
    latitude: 37.7749,
    longitude: -122.4194,
};

/// A resolved device position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Format for the location field, six decimal places each
    pub fn to_field_string(&self) -> String {
        format!("{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Why a position could not be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("no location provider is available on this device")]
    Unavailable,
}

/// Request the current position.
///
/// One-shot: resolves exactly once with coordinates or an error.
/// No retry, no cancellation.
pub async fn current_position() -> Result<Coordinates, LocationError> {
    tokio::time::sleep(FIX_DELAY).await;

    if std::env::var_os("CIVIC_PULSE_NO_GPS").is_some() {
        return Err(LocationError::Unavailable);
    }

    Ok(DEMO_COORDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_string_has_six_decimal_places() {
        let coords = Coordinates {
            latitude: 37.7749,
            longitude: -122.4194,
        };
        assert_eq!(coords.to_field_string(), "37.774900, -122.419400");
    }

    #[tokio::test]
    async fn test_current_position_resolves_once() {
        // CIVIC_PULSE_NO_GPS is unset in the test environment, so the
        // simulated fix succeeds with the demo coordinates.
        let coords = current_position().await.unwrap();
        assert_eq!(coords, DEMO_COORDS);
    }
}
