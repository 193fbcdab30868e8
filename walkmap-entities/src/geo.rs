use thiserror::Error;

const LAT_DEG_MIN: f64 = -90.0;
const LAT_DEG_MAX: f64 = 90.0;
const LNG_DEG_MIN: f64 = -180.0;
const LNG_DEG_MAX: f64 = 180.0;

/// A geographical position in degrees (WGS 84).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MapPointError {
    #[error("Latitude out of range")]
    Lat,
    #[error("Longitude out of range")]
    Lng,
}

impl MapPoint {
    /// Creates a point without checking the coordinate ranges.
    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Result<Self, MapPointError> {
        if !is_valid_lat_deg(lat) {
            return Err(MapPointError::Lat);
        }
        if !is_valid_lng_deg(lng) {
            return Err(MapPointError::Lng);
        }
        Ok(Self { lat, lng })
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }
}

fn is_valid_lat_deg(deg: f64) -> bool {
    (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&deg)
}

fn is_valid_lng_deg(deg: f64) -> bool {
    (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&deg)
}
