//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`EMBER_SECTION__KEY`)
//!
//! The emitter, renderer and integrator sections are tagged enums; their
//! `build_*` methods turn the declarative config into boxed strategy
//! objects for a [`ParticleSystem`].

use ember_core::{
    AlphaMode, ArcEmitter, BoxEmitter, DiscEmitter, Emitter, LineEmitter, ParticleRenderer,
    ParticleSystem, PointEmitter, RectangleEmitter, RingEmitter, SphereEmitter,
    TangentRingEmitter, Vec3,
};
use ember_physics::{BallisticIntegrator, Integrator, LinearIntegrator};
use ember_render::{LineRenderer, PointRenderer, SparkleRenderer};
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// System-wide simulation parameters
    #[serde(default)]
    pub system: SystemConfig,
    /// Emission shape
    #[serde(default)]
    pub emitter: EmitterConfig,
    /// Renderer variant
    #[serde(default)]
    pub renderer: RendererConfig,
    /// Motion integration
    #[serde(default)]
    pub physics: PhysicsConfig,
    /// Headless demo loop parameters
    #[serde(default)]
    pub demo: DemoConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`EMBER_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // EMBER_SYSTEM__POOL_SIZE=512 -> system.pool_size = 512
        figment = figment.merge(Env::prefixed("EMBER_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Build a ready-to-start [`ParticleSystem`] from this configuration
    pub fn build_system(&self) -> Result<ParticleSystem, ConfigError> {
        let emitter = self.emitter.build(self.system.seed);
        let renderer = self.renderer.build()?;
        let integrator = self.physics.build()?;

        let mut system = ParticleSystem::new(self.system.pool_size, emitter, renderer)
            .with_birth_rate(self.system.birth_rate)
            .with_lifespan(self.system.lifespan)
            .with_lifespan_spread(self.system.lifespan_spread)
            .with_integrator(integrator);
        if let Some(seed) = self.system.seed {
            system = system.with_seed(seed);
        }
        Ok(system)
    }
}

/// System-wide simulation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Number of particle slots in the pool
    pub pool_size: usize,
    /// Births per second
    pub birth_rate: f32,
    /// Base lifespan in seconds
    pub lifespan: f32,
    /// Additive uniform lifespan perturbation
    pub lifespan_spread: f32,
    /// RNG seed for deterministic runs; omit for entropy seeding
    pub seed: Option<u64>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            pool_size: 256,
            birth_rate: 20.0,
            lifespan: 2.0,
            lifespan_spread: 0.0,
            seed: None,
        }
    }
}

/// Emission shape, tagged by `type`
///
/// Angles are written in degrees in configuration files and converted to
/// radians when the emitter is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EmitterConfig {
    Point {
        #[serde(default)]
        point: Vec3,
        #[serde(default)]
        velocity: Vec3,
    },
    Line {
        endpoint_a: Vec3,
        endpoint_b: Vec3,
        #[serde(default)]
        amplitude: f32,
    },
    Rectangle {
        width: f32,
        height: f32,
        #[serde(default)]
        amplitude: f32,
    },
    Disc {
        radius: f32,
        #[serde(default)]
        radius_spread: f32,
        #[serde(default)]
        amplitude: f32,
    },
    Box {
        half_extents: Vec3,
        #[serde(default)]
        amplitude: f32,
    },
    Sphere {
        radius: f32,
        #[serde(default)]
        radius_spread: f32,
        #[serde(default)]
        amplitude: f32,
    },
    Ring {
        radius: f32,
        #[serde(default)]
        radius_spread: f32,
        #[serde(default)]
        amplitude: f32,
    },
    Arc {
        radius: f32,
        start_degrees: f32,
        end_degrees: f32,
        #[serde(default)]
        radius_spread: f32,
        #[serde(default)]
        amplitude: f32,
    },
    TangentRing {
        radius: f32,
        #[serde(default)]
        radius_spread: f32,
        #[serde(default)]
        amplitude: f32,
    },
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self::Point {
            point: Vec3::ZERO,
            velocity: Vec3::ZERO,
        }
    }
}

impl EmitterConfig {
    /// Build the configured emitter, seeding its RNG when a seed is given
    pub fn build(&self, seed: Option<u64>) -> Box<dyn Emitter> {
        match *self {
            Self::Point { point, velocity } => {
                Box::new(PointEmitter::new(point).with_velocity(velocity))
            }
            Self::Line {
                endpoint_a,
                endpoint_b,
                amplitude,
            } => {
                let e = LineEmitter::new(endpoint_a, endpoint_b).with_amplitude(amplitude);
                seeded(e, seed, LineEmitter::with_seed)
            }
            Self::Rectangle {
                width,
                height,
                amplitude,
            } => {
                let e = RectangleEmitter::new(width, height).with_amplitude(amplitude);
                seeded(e, seed, RectangleEmitter::with_seed)
            }
            Self::Disc {
                radius,
                radius_spread,
                amplitude,
            } => {
                let e = DiscEmitter::new(radius)
                    .with_radius_spread(radius_spread)
                    .with_amplitude(amplitude);
                seeded(e, seed, DiscEmitter::with_seed)
            }
            Self::Box {
                half_extents,
                amplitude,
            } => {
                let e = BoxEmitter::new(half_extents).with_amplitude(amplitude);
                seeded(e, seed, BoxEmitter::with_seed)
            }
            Self::Sphere {
                radius,
                radius_spread,
                amplitude,
            } => {
                let e = SphereEmitter::new(radius)
                    .with_radius_spread(radius_spread)
                    .with_amplitude(amplitude);
                seeded(e, seed, SphereEmitter::with_seed)
            }
            Self::Ring {
                radius,
                radius_spread,
                amplitude,
            } => {
                let e = RingEmitter::new(radius)
                    .with_radius_spread(radius_spread)
                    .with_amplitude(amplitude);
                seeded(e, seed, RingEmitter::with_seed)
            }
            Self::Arc {
                radius,
                start_degrees,
                end_degrees,
                radius_spread,
                amplitude,
            } => {
                let e = ArcEmitter::new(
                    radius,
                    start_degrees.to_radians(),
                    end_degrees.to_radians(),
                )
                .with_radius_spread(radius_spread)
                .with_amplitude(amplitude);
                seeded(e, seed, ArcEmitter::with_seed)
            }
            Self::TangentRing {
                radius,
                radius_spread,
                amplitude,
            } => {
                let e = TangentRingEmitter::new(radius)
                    .with_radius_spread(radius_spread)
                    .with_amplitude(amplitude);
                seeded(e, seed, TangentRingEmitter::with_seed)
            }
        }
    }
}

fn seeded<E: Emitter + 'static>(
    emitter: E,
    seed: Option<u64>,
    with_seed: fn(E, u64) -> E,
) -> Box<dyn Emitter> {
    match seed {
        Some(s) => Box::new(with_seed(emitter, s)),
        None => Box::new(emitter),
    }
}

/// Renderer variant, tagged by `type`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RendererConfig {
    Line {
        head_color: [f32; 4],
        tail_color: [f32; 4],
        #[serde(default = "default_alpha_mode")]
        alpha_mode: String,
    },
    Point {
        head_color: [f32; 4],
        tail_color: [f32; 4],
        #[serde(default = "default_alpha_mode")]
        alpha_mode: String,
        #[serde(default = "default_point_size")]
        point_size: f32,
    },
    Sparkle {
        center_color: [f32; 4],
        edge_color: [f32; 4],
        birth_radius: f32,
        death_radius: f32,
    },
}

fn default_alpha_mode() -> String {
    AlphaMode::LifeFraction.name().to_string()
}

fn default_point_size() -> f32 {
    1.0
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self::Line {
            head_color: [1.0, 1.0, 1.0, 1.0],
            tail_color: [1.0, 1.0, 1.0, 0.0],
            alpha_mode: default_alpha_mode(),
        }
    }
}

impl RendererConfig {
    /// Build the configured renderer
    ///
    /// Fails on an unrecognized `alpha_mode` name rather than rendering
    /// with the invalid sentinel.
    pub fn build(&self) -> Result<Box<dyn ParticleRenderer>, ConfigError> {
        match self {
            Self::Line {
                head_color,
                tail_color,
                alpha_mode,
            } => Ok(Box::new(
                LineRenderer::new(*head_color, *tail_color)
                    .with_alpha_mode(parse_alpha_mode(alpha_mode)?),
            )),
            Self::Point {
                head_color,
                tail_color,
                alpha_mode,
                point_size,
            } => Ok(Box::new(
                PointRenderer::new(*head_color, *tail_color)
                    .with_alpha_mode(parse_alpha_mode(alpha_mode)?)
                    .with_point_size(*point_size),
            )),
            Self::Sparkle {
                center_color,
                edge_color,
                birth_radius,
                death_radius,
            } => Ok(Box::new(
                SparkleRenderer::new(*center_color, *edge_color)
                    .with_radii(*birth_radius, *death_radius),
            )),
        }
    }
}

fn parse_alpha_mode(name: &str) -> Result<AlphaMode, ConfigError> {
    match AlphaMode::from_name(name) {
        AlphaMode::Invalid => Err(ConfigError::new(format!(
            "unknown alpha_mode '{}' (expected 'life_fraction' or 'constant')",
            name
        ))),
        mode => Ok(mode),
    }
}

/// Motion integration configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Integrator name: "linear" or "ballistic"
    pub integrator: String,
    /// Gravity for the ballistic integrator
    pub gravity: [f32; 3],
    /// Velocity damping coefficient for the ballistic integrator
    pub drag: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            integrator: "linear".to_string(),
            gravity: [0.0, -9.81, 0.0],
            drag: 0.0,
        }
    }
}

impl PhysicsConfig {
    /// Build the configured integrator
    pub fn build(&self) -> Result<Box<dyn Integrator>, ConfigError> {
        match self.integrator.as_str() {
            "linear" => Ok(Box::new(LinearIntegrator)),
            "ballistic" => Ok(Box::new(
                BallisticIntegrator::new(Vec3::from(self.gravity)).with_drag(self.drag),
            )),
            other => Err(ConfigError::new(format!(
                "unknown integrator '{}' (expected 'linear' or 'ballistic')",
                other
            ))),
        }
    }
}

/// Headless demo loop parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Simulated seconds to run before draining
    pub duration_seconds: f32,
    /// Fixed ticks per simulated second
    pub tick_rate: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            duration_seconds: 5.0,
            tick_rate: 60.0,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn new(message: String) -> Self {
        ConfigError { message }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.system.pool_size, 256);
        assert_eq!(config.physics.integrator, "linear");
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("pool_size"));
        assert!(toml.contains("birth_rate"));
    }

    #[test]
    fn test_build_system_from_defaults() {
        let config = AppConfig::default();
        let system = config.build_system().unwrap();
        assert_eq!(system.pool().capacity(), 256);
    }

    #[test]
    fn test_emitter_config_degrees_to_radians() {
        let config = EmitterConfig::Arc {
            radius: 1.0,
            start_degrees: 0.0,
            end_degrees: 180.0,
            radius_spread: 0.0,
            amplitude: 0.0,
        };
        let emitter = config.build(Some(1));
        let mut dump = String::new();
        emitter.describe(&mut dump).unwrap();
        // describe prints back in degrees
        assert!(dump.contains("start: 0.0°"));
        assert!(dump.contains("end: 180.0°"));
    }

    #[test]
    fn test_invalid_alpha_mode_is_error() {
        let config = RendererConfig::Line {
            head_color: [1.0; 4],
            tail_color: [0.0; 4],
            alpha_mode: "shimmer".to_string(),
        };
        let err = config.build().map(|_| ()).unwrap_err();
        assert!(err.to_string().contains("shimmer"));
    }

    #[test]
    fn test_invalid_integrator_is_error() {
        let config = PhysicsConfig {
            integrator: "verlet".to_string(),
            ..PhysicsConfig::default()
        };
        assert!(config.build().is_err());
    }

    #[test]
    fn test_emitter_config_toml_round_trip() {
        let toml_src = r#"
            type = "ring"
            radius = 2.0
            radius_spread = 0.1
            amplitude = 1.5
        "#;
        let config: EmitterConfig = toml::from_str(toml_src).unwrap();
        let emitter = config.build(None);
        let mut dump = String::new();
        emitter.describe(&mut dump).unwrap();
        assert!(dump.starts_with("RingEmitter"));
    }
}
