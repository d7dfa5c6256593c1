use serde::{Deserialize, Serialize};

use crate::FindError;

/// Tuning for the reflected-region sweep.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinderParams {
    /// Fine probing step used to scan past an excluded stretch, radians.
    /// Must be positive.
    #[serde(default = "default_angle_increment_rad")]
    pub angle_increment_rad: f64,

    /// Extra angular buffer on both ends of the sweep window, keeping
    /// accepted regions away from the source region itself, radians.
    /// Must be non-negative.
    #[serde(default)]
    pub min_distance_rad: f64,
}

fn default_angle_increment_rad() -> f64 {
    0.1
}

impl Default for FinderParams {
    fn default() -> Self {
        Self {
            angle_increment_rad: default_angle_increment_rad(),
            min_distance_rad: 0.0,
        }
    }
}

impl FinderParams {
    /// Reject out-of-domain tuning before any sweep work starts.
    pub(crate) fn validate(&self) -> Result<(), FindError> {
        if !(self.angle_increment_rad > 0.0 && self.angle_increment_rad.is_finite()) {
            return Err(FindError::InvalidAngleIncrement(self.angle_increment_rad));
        }
        if !(self.min_distance_rad >= 0.0 && self.min_distance_rad.is_finite()) {
            return Err(FindError::InvalidMinDistance(self.min_distance_rad));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(FinderParams::default().validate().is_ok());
    }

    #[test]
    fn non_positive_increment_is_rejected() {
        for bad in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let params = FinderParams {
                angle_increment_rad: bad,
                ..FinderParams::default()
            };
            assert!(matches!(
                params.validate(),
                Err(FindError::InvalidAngleIncrement(_))
            ));
        }
    }

    #[test]
    fn negative_min_distance_is_rejected() {
        let params = FinderParams {
            min_distance_rad: -0.01,
            ..FinderParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(FindError::InvalidMinDistance(_))
        ));
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let params: FinderParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params, FinderParams::default());
    }
}
