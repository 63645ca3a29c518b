use std::collections::HashMap;

use rand::RngCore;

use mbg_core::{FieldKind, FieldSpec, FieldValue};

pub mod primitives;
pub mod semantic;

/// Per-run sequence state, keyed by field name.
///
/// Created fresh for every generation run; nothing outlives the run that
/// owns it.
#[derive(Debug, Default, Clone)]
pub struct SequenceCounters {
    next: HashMap<String, i64>,
}

impl SequenceCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-then-increment the counter for `field`, seeding it with `start`
    /// on first use.
    pub fn next_value(&mut self, field: &str, start: i64) -> i64 {
        let slot = self.next.entry(field.to_string()).or_insert(start);
        let value = *slot;
        *slot = value.saturating_add(1);
        value
    }
}

/// Context handed to every generator call.
pub struct GeneratorContext<'a> {
    /// Name of the field being generated.
    pub field: &'a str,
    /// Zero-based index of the record being built.
    pub row_index: u64,
    pub sequences: &'a mut SequenceCounters,
}

/// Produces one value for one field kind.
///
/// Generators never fail: constraints that cannot be honored (for example
/// an inverted range in a recipe that skipped validation) are repaired, and
/// a field of another kind yields null.
pub trait FieldGenerator: Send + Sync {
    fn kind(&self) -> FieldKind;
    fn generate(
        &self,
        spec: &FieldSpec,
        ctx: &mut GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> FieldValue;
}

/// Kind-to-generator dispatch table.
pub struct GeneratorRegistry {
    generators: HashMap<FieldKind, Box<dyn FieldGenerator>>,
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorRegistry {
    /// Registry with every built-in generator.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        primitives::register(&mut registry);
        semantic::register(&mut registry);
        registry
    }

    pub fn empty() -> Self {
        Self {
            generators: HashMap::new(),
        }
    }

    /// Register a generator, replacing any previous one for the same kind.
    pub fn register_generator(&mut self, generator: Box<dyn FieldGenerator>) {
        self.generators.insert(generator.kind(), generator);
    }

    pub fn generator(&self, kind: FieldKind) -> Option<&dyn FieldGenerator> {
        self.generators.get(&kind).map(|generator| generator.as_ref())
    }

    pub fn is_registered(&self, kind: FieldKind) -> bool {
        self.generators.contains_key(&kind)
    }

    /// Generate one value for `spec`. Unrecognized specs and kinds without a
    /// registered generator produce null.
    pub fn generate(
        &self,
        spec: &FieldSpec,
        ctx: &mut GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> FieldValue {
        let Some(kind) = spec.kind() else {
            return FieldValue::Null;
        };
        match self.generator(kind) {
            Some(generator) => generator.generate(spec, ctx, rng),
            None => {
                tracing::warn!(field = ctx.field, kind = %kind, "no generator registered for kind");
                FieldValue::Null
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn every_kind_has_a_generator() {
        let registry = GeneratorRegistry::new();
        for kind in FieldKind::ALL {
            assert!(registry.is_registered(kind), "missing generator for {kind}");
        }
    }

    #[test]
    fn counters_read_then_increment_per_field() {
        let mut counters = SequenceCounters::new();
        assert_eq!(counters.next_value("id", 100), 100);
        assert_eq!(counters.next_value("id", 100), 101);
        assert_eq!(counters.next_value("nomor", 1), 1);
        assert_eq!(counters.next_value("id", 100), 102);
    }

    #[test]
    fn unrecognized_spec_yields_null() {
        let registry = GeneratorRegistry::new();
        let mut sequences = SequenceCounters::new();
        let mut ctx = GeneratorContext {
            field: "x",
            row_index: 0,
            sequences: &mut sequences,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let value = registry.generate(
            &FieldSpec::Unrecognized {
                tipe: Some("sambal".to_string()),
            },
            &mut ctx,
            &mut rng,
        );
        assert_eq!(value, FieldValue::Null);
    }

    #[test]
    fn empty_registry_yields_null() {
        let registry = GeneratorRegistry::empty();
        let mut sequences = SequenceCounters::new();
        let mut ctx = GeneratorContext {
            field: "id",
            row_index: 0,
            sequences: &mut sequences,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            registry.generate(&FieldSpec::Uuid, &mut ctx, &mut rng),
            FieldValue::Null
        );
    }
}
