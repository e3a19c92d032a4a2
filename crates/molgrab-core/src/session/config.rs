use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid value for '{field}': {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// How source coordinates map into the displayed world, and how big the
/// rendered primitives are.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Uniform scale from source units (Angstroms) to world units (meters).
    pub scale: f64,
    /// World-space offset applied after scaling, placing the molecule in
    /// front of the viewer.
    pub translation: [f64; 3],
    /// Display and collision radius of an atom sphere, in world units.
    pub atom_radius: f64,
    /// Radius of a bond cylinder, in world units.
    pub bond_radius: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            scale: 0.05,
            translation: [0.0, 1.2, -0.5],
            atom_radius: 0.05,
            bond_radius: 0.01,
        }
    }
}

/// Pinch-grab behavior.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InteractionConfig {
    /// Maximum fingertip-to-atom distance for a pinch to pick up an atom,
    /// in world units.
    pub grab_radius: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self { grab_radius: 0.08 }
    }
}

/// Fixed-step physics parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhysicsConfig {
    /// Fixed timestep in seconds, advanced once per render callback.
    pub timestep: f64,
    /// Gravity in world units per second squared.
    pub gravity: [f64; 3],
    /// Joint relaxation passes per step.
    pub solver_iterations: usize,
    /// Per-frame multiplicative velocity damping factor in (0, 1].
    pub velocity_damping: f64,
    /// Optional cap on a joint's corrective force; `None` is rigid.
    pub constraint_max_force: Option<f64>,
    /// Height of the fixed floor plane, or `None` for no floor.
    pub floor_height: Option<f64>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: 1.0 / 60.0,
            gravity: [0.0, -10.0, 0.0],
            solver_iterations: 10,
            velocity_damping: 1.0 / 1.05,
            constraint_max_force: None,
            floor_height: Some(0.0),
        }
    }
}

/// Complete configuration for one interactive scene.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    pub display: DisplayConfig,
    pub interaction: InteractionConfig,
    pub physics: PhysicsConfig,
}

impl SessionConfig {
    /// Parses a configuration from TOML text; absent fields keep their
    /// defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the numeric invariants the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.display.scale > 0.0) {
            return Err(ConfigError::Invalid {
                field: "display.scale",
                reason: "must be positive",
            });
        }
        if !(self.physics.timestep > 0.0) {
            return Err(ConfigError::Invalid {
                field: "physics.timestep",
                reason: "must be positive",
            });
        }
        if !(self.physics.velocity_damping > 0.0 && self.physics.velocity_damping <= 1.0) {
            return Err(ConfigError::Invalid {
                field: "physics.velocity_damping",
                reason: "must be in (0, 1]",
            });
        }
        if self.physics.solver_iterations == 0 {
            return Err(ConfigError::Invalid {
                field: "physics.solver_iterations",
                reason: "must be at least 1",
            });
        }
        if !(self.interaction.grab_radius > 0.0) {
            return Err(ConfigError::Invalid {
                field: "interaction.grab_radius",
                reason: "must be positive",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let config = SessionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.physics.timestep, 1.0 / 60.0);
        assert_eq!(config.physics.gravity, [0.0, -10.0, 0.0]);
        assert_eq!(config.physics.floor_height, Some(0.0));
        assert!(config.physics.constraint_max_force.is_none());
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config = SessionConfig::from_toml_str("").unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config = SessionConfig::from_toml_str(
            "[display]\nscale = 0.02\n\n[physics]\nsolver_iterations = 4\n",
        )
        .unwrap();
        assert_eq!(config.display.scale, 0.02);
        assert_eq!(config.physics.solver_iterations, 4);
        assert_eq!(config.display.atom_radius, 0.05);
        assert_eq!(config.interaction.grab_radius, 0.08);
    }

    #[test]
    fn out_of_range_damping_is_rejected() {
        let err = SessionConfig::from_toml_str("[physics]\nvelocity_damping = 1.5\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "physics.velocity_damping",
                ..
            }
        ));
    }

    #[test]
    fn zero_timestep_is_rejected() {
        let err = SessionConfig::from_toml_str("[physics]\ntimestep = 0.0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "physics.timestep",
                ..
            }
        ));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(SessionConfig::from_toml_str("[display]\nscail = 0.1\n").is_err());
    }
}
