use std::path::Path;
use std::time::Instant;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use mbg_core::{Recipe, RecipeDocument, Record, load_recipe, validate_recipe};

use crate::batch::new_batch_id;
use crate::checks::check_records;
use crate::errors::GenerationError;
use crate::generators::{GeneratorContext, GeneratorRegistry, SequenceCounters};
use crate::model::{GenerateOptions, GenerationResult};

const MAX_PREALLOCATED_RECORDS: usize = 100_000;

/// Check a requested record count. Zero and negative counts are rejected.
pub fn validate_count(count: i64) -> Result<u64, GenerationError> {
    if count <= 0 {
        return Err(GenerationError::InvalidCount(format!(
            "{count}; the count must be a positive integer"
        )));
    }
    Ok(count as u64)
}

/// Parse a record count given as text, rejecting anything that is not a
/// positive integer.
pub fn parse_count(raw: &str) -> Result<u64, GenerationError> {
    let trimmed = raw.trim();
    let count = trimmed.parse::<i64>().map_err(|_| {
        GenerationError::InvalidCount(format!(
            "\"{trimmed}\"; the count must be a positive integer"
        ))
    })?;
    validate_count(count)
}

/// Builds records from a compiled recipe.
pub struct RecordGenerator {
    registry: GeneratorRegistry,
}

impl Default for RecordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordGenerator {
    pub fn new() -> Self {
        Self::with_registry(GeneratorRegistry::new())
    }

    pub fn with_registry(registry: GeneratorRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }

    /// Generate `count` records, fields in declared order.
    ///
    /// Sequence counters live only for this call, so every call restarts
    /// sequences at their declared start.
    pub fn generate(
        &self,
        recipe: &Recipe,
        count: i64,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Record>, GenerationError> {
        let count = validate_count(count)?;
        let mut sequences = SequenceCounters::new();
        let capacity = usize::try_from(count).unwrap_or(0).min(MAX_PREALLOCATED_RECORDS);
        let mut records = Vec::with_capacity(capacity);

        for row_index in 0..count {
            let mut record = Record::with_capacity(recipe.fields.len());
            for field in &recipe.fields {
                let mut ctx = GeneratorContext {
                    field: &field.name,
                    row_index,
                    sequences: &mut sequences,
                };
                let value = self.registry.generate(&field.spec, &mut ctx, rng);
                record.insert(field.name.clone(), value);
            }
            records.push(record);
        }

        Ok(records)
    }
}

/// Entry point for a full generation run: validation, generation, and the
/// post-generation check.
pub struct GenerationEngine {
    options: GenerateOptions,
    generator: RecordGenerator,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self {
            options,
            generator: RecordGenerator::new(),
        }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Load a recipe file and run it.
    pub fn run_file(&self, path: &Path, count: i64) -> Result<GenerationResult, GenerationError> {
        let document = load_recipe(path)?;
        debug!(recipe = %path.display(), "recipe loaded");
        self.run(&document, count)
    }

    pub fn run(
        &self,
        document: &RecipeDocument,
        count: i64,
    ) -> Result<GenerationResult, GenerationError> {
        let requested = validate_count(count)?;
        let recipe = document.compile()?;

        let mut warnings = Vec::new();
        if self.options.economy {
            warn!(menu = %recipe.name, "economy mode: recipe validation and record checks skipped");
        } else {
            let validation = validate_recipe(document);
            if !validation.is_valid() {
                warn!(
                    menu = %recipe.name,
                    errors = validation.errors.len(),
                    "recipe failed validation"
                );
                return Err(GenerationError::ValidationFailure(
                    validation.error_messages(),
                ));
            }
            for warning in &validation.warnings {
                warn!(menu = %recipe.name, code = %warning.code, "{}", warning.message);
            }
            warnings = validation.warning_messages();
        }

        let batch_id = new_batch_id(&mut rand::rng());
        let seed = self.options.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        info!(
            batch_id = %batch_id,
            menu = %recipe.name,
            records = requested,
            seed,
            "generation started"
        );

        let start = Instant::now();
        let records = self.generator.generate(&recipe, count, &mut rng)?;
        let elapsed = start.elapsed();

        let report = if self.options.economy {
            None
        } else {
            let outcome = check_records(&records, &recipe);
            if !outcome.passed {
                warn!(
                    batch_id = %batch_id,
                    invalid = outcome.report.invalid_records,
                    "generated records failed checks"
                );
            }
            Some(outcome.report)
        };

        info!(
            batch_id = %batch_id,
            records = records.len(),
            duration_ms = elapsed.as_millis() as u64,
            "generation completed"
        );

        Ok(GenerationResult {
            records,
            batch_id,
            elapsed,
            report,
            warnings,
            menu: recipe.name,
            target: recipe.target,
            requested,
        })
    }
}
