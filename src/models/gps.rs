use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GpsCoords {
    pub lat: f32,
    pub lng: f32,
}

impl FromStr for GpsCoords {
    type Err = AppError;

    /// Parses `"lng,lat"`, longitude first.
    fn from_str(s: &str) -> AppResult<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 2 {
            return Err(AppError::Config(format!(
                "invalid number of coordinates in '{}', expected 'lng,lat'",
                s
            )));
        }
        let lng = parts[0]
            .parse::<f32>()
            .map_err(|_| AppError::Config(format!("invalid longitude '{}'", parts[0])))?;
        let lat = parts[1]
            .parse::<f32>()
            .map_err(|_| AppError::Config(format!("invalid latitude '{}'", parts[1])))?;
        Ok(Self { lat, lng })
    }
}

impl fmt::Display for GpsCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lng, self.lat)
    }
}
