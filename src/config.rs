//! Campfire variant configuration
//!
//! Variants are described in TOML, one table per variant under `[variants]`,
//! and turned into `CampfireBlockData` against a block registry.

use crate::error::{EngineError, EngineResult, OptionExt};
use crate::world::blocks::campfire::{
    AmbientParticles, CampfireBlockData, ManhattanFireSpread, ParticleKind,
    DEFAULT_WATER_TICK_DELAY,
};
use crate::world::core::{BlockRegistry, BlockTag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Namespace the stock blocks are registered under
pub const BLOCK_NAMESPACE: &str = "engine";

/// All configured campfire variants, keyed by block name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampfireConfig {
    #[serde(default)]
    pub variants: BTreeMap<String, VariantConfig>,
}

/// Behavior parameters of one campfire variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantConfig {
    pub spawn_particles: bool,
    pub fire_damage: f32,
    #[serde(default = "default_water_tick_delay")]
    pub water_tick_delay: u32,
    #[serde(default)]
    pub fire_spread: bool,
    #[serde(default)]
    pub ambient_particles: Vec<AmbientParticleConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmbientParticleConfig {
    pub particle: String,
    pub one_in: u32,
}

fn default_water_tick_delay() -> u32 {
    DEFAULT_WATER_TICK_DELAY
}

impl VariantConfig {
    pub fn new(spawn_particles: bool, fire_damage: f32) -> Self {
        Self {
            spawn_particles,
            fire_damage,
            water_tick_delay: DEFAULT_WATER_TICK_DELAY,
            fire_spread: false,
            ambient_particles: Vec::new(),
        }
    }

    fn validate(&self, name: &str) -> EngineResult<()> {
        if !self.fire_damage.is_finite() || self.fire_damage < 0.0 {
            return Err(invalid(
                name,
                "fire_damage",
                self.fire_damage,
                "must be finite and non-negative",
            ));
        }
        if self.water_tick_delay == 0 {
            return Err(invalid(name, "water_tick_delay", 0, "must be positive"));
        }
        for ambient in &self.ambient_particles {
            if ambient.one_in == 0 {
                return Err(invalid(
                    name,
                    "ambient_particles.one_in",
                    0,
                    "must be positive",
                ));
            }
            if ambient.particle.is_empty() {
                return Err(EngineError::MissingConfig {
                    field: format!("variants.{}.ambient_particles.particle", name),
                });
            }
        }
        Ok(())
    }
}

fn invalid(variant: &str, field: &str, value: impl ToString, reason: &str) -> EngineError {
    EngineError::InvalidConfig {
        field: format!("variants.{}.{}", variant, field),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

impl CampfireConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> EngineResult<Self> {
        let config: CampfireConfig = toml::from_str(source)?;
        config.validate()?;
        log::debug!("Parsed campfire config with {} variants", config.variants.len());
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| EngineError::IoError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        log::info!("Loading campfire config from {}", path.display());
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> EngineResult<()> {
        for (name, variant) in &self.variants {
            variant.validate(name)?;
        }
        Ok(())
    }

    /// The stock variants: a plain campfire and a soul campfire
    pub fn builtin() -> Self {
        let mut soul = VariantConfig::new(false, 2.0);
        soul.ambient_particles.push(AmbientParticleConfig {
            particle: "soul".to_string(),
            one_in: 4,
        });

        let mut variants = BTreeMap::new();
        variants.insert("campfire".to_string(), VariantConfig::new(true, 1.0));
        variants.insert("soul_campfire".to_string(), soul);
        Self { variants }
    }

    pub fn variant(&self, name: &str) -> EngineResult<&VariantConfig> {
        self.variants
            .get(name)
            .ok_or_engine(|| EngineError::ResourceNotFound {
                resource_type: "campfire variant".to_string(),
                id: name.to_string(),
            })
    }
}

/// Build the behavior data of variant `name`, resolving its block id in `registry`
pub fn build_block_data(
    registry: &BlockRegistry,
    name: &str,
    variant: &VariantConfig,
) -> EngineResult<CampfireBlockData> {
    variant.validate(name)?;

    let block_name = format!("{}:{}", BLOCK_NAMESPACE, name);
    let id = registry
        .get_id(&block_name)
        .ok_or_engine(|| EngineError::ResourceNotFound {
            resource_type: "block".to_string(),
            id: block_name.clone(),
        })?;
    if !registry.has_tag(id, BlockTag::Campfires) {
        return Err(EngineError::InvalidConfig {
            field: format!("variants.{}", name),
            value: block_name,
            reason: "block is not tagged as a campfire".to_string(),
        });
    }

    let mut data = CampfireBlockData::new(id, variant.spawn_particles, variant.fire_damage);
    data.water_tick_delay = variant.water_tick_delay;
    for ambient in &variant.ambient_particles {
        data = data.with_ambience(Arc::new(AmbientParticles {
            particle: ParticleKind::from_name(&ambient.particle),
            one_in: ambient.one_in,
        }));
    }
    if variant.fire_spread {
        data = data.with_fire_spread(Arc::new(ManhattanFireSpread::default()));
    }

    log::debug!(
        "Built campfire variant '{}' (block {}, damage {}, {} ambience)",
        name,
        id,
        variant.fire_damage,
        data.ambience.len()
    );
    Ok(data)
}

/// Build every configured variant, in name order
pub fn build_all(
    registry: &BlockRegistry,
    config: &CampfireConfig,
) -> EngineResult<Vec<CampfireBlockData>> {
    config
        .variants
        .iter()
        .map(|(name, variant)| build_block_data(registry, name, variant))
        .collect()
}
