use thiserror::Error;

use crate::libraries::geodistance::distance_km;
use crate::models::GeoPoint;

/// Configuration for check-in validation
#[derive(Debug, Clone)]
pub struct CheckInPolicyConfig {
    /// Maximum distance from the client site in kilometers
    pub max_site_distance_km: f64,
}

impl Default for CheckInPolicyConfig {
    fn default() -> Self {
        Self {
            max_site_distance_km: 0.5,
        }
    }
}

/// Result of evaluating a check-in against the client site
#[derive(Debug, Clone)]
pub struct CheckInCheckResult {
    pub passed: bool,
    /// Distance from the site in km, when the device reported a location
    pub distance_km: Option<f64>,
    pub error: Option<CheckInPolicyError>,
}

#[derive(Debug, Clone, Error)]
pub enum CheckInPolicyError {
    #[error("Invalid coordinates provided.")]
    InvalidCoordinates,

    #[error("You are {distance_km:.2} km away from the client site.")]
    TooFarFromSite { distance_km: f64 },
}

/// Validates incoming check-ins against the registered client site
pub struct CheckInPolicy {
    config: CheckInPolicyConfig,
}

impl CheckInPolicy {
    pub fn new() -> Self {
        Self {
            config: CheckInPolicyConfig::default(),
        }
    }

    pub fn with_config(config: CheckInPolicyConfig) -> Self {
        Self { config }
    }

    /// Evaluate a reported device location against the client site.
    ///
    /// A check-in without coordinates passes with no recorded distance;
    /// GPS is optional in the field app.
    pub fn evaluate(&self, reported: Option<&GeoPoint>, site: &GeoPoint) -> CheckInCheckResult {
        let Some(reported) = reported else {
            return CheckInCheckResult {
                passed: true,
                distance_km: None,
                error: None,
            };
        };

        if !reported.is_valid() {
            return CheckInCheckResult {
                passed: false,
                distance_km: None,
                error: Some(CheckInPolicyError::InvalidCoordinates),
            };
        }

        let distance = distance_km(reported, site);

        if distance > self.config.max_site_distance_km {
            return CheckInCheckResult {
                passed: false,
                distance_km: Some(distance),
                error: Some(CheckInPolicyError::TooFarFromSite {
                    distance_km: distance,
                }),
            };
        }

        CheckInCheckResult {
            passed: true,
            distance_km: Some(distance),
            error: None,
        }
    }
}

impl Default for CheckInPolicy {
    fn default() -> Self {
        Self::new()
    }
}
