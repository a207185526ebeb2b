//! Per-field value populations.

use crate::error::SamplerError;
use crate::sampler::SeededCategoricalSampler;
use crate::seed::field_seed;
use fieldbench_core::FieldCatalog;

/// One field's candidate values bound to its seeded sampler.
///
/// Populations are built once per generation run, in catalog order, and live
/// for the whole run; the only mutation is the sampler's generator state
/// advancing on each draw.
pub struct FieldPopulation {
    name: String,
    sampler: SeededCategoricalSampler,
}

impl FieldPopulation {
    /// Build one population for a named value set.
    ///
    /// The sampler seed is derived from the base seed and the field name via
    /// [`field_seed`](crate::seed::field_seed), so any two callers holding
    /// the same catalog and base seed end up with bit-identical samplers.
    pub fn new(name: &str, values: Vec<String>, base_seed: u64) -> Result<Self, SamplerError> {
        let sampler = SeededCategoricalSampler::new(values, field_seed(base_seed, name))?;
        Ok(Self {
            name: name.to_string(),
            sampler,
        })
    }

    /// Build populations for every catalog field, in declared order.
    pub fn build_all(
        catalog: &FieldCatalog,
        base_seed: u64,
    ) -> Result<Vec<FieldPopulation>, SamplerError> {
        catalog
            .iter()
            .map(|entry| FieldPopulation::new(&entry.name, entry.values.clone(), base_seed))
            .collect()
    }

    /// Field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Draw one value from this field's distribution.
    pub fn sample(&mut self) -> &str {
        self.sampler.sample()
    }

    /// The underlying sampler.
    pub fn sampler(&self) -> &SeededCategoricalSampler {
        &self.sampler
    }
}
