use chrono::{DateTime, Datelike, NaiveDate, SecondsFormat, Utc};
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

use mbg_core::{FieldKind, FieldSpec, FieldValue};

use crate::generators::{FieldGenerator, GeneratorContext, GeneratorRegistry};
use crate::pattern;

const DEFAULT_SEQUENCE_START: i64 = 1;
const DEFAULT_NUMERIC_MIN: f64 = 0.0;
const DEFAULT_NUMERIC_MAX: f64 = 100.0;
const DEFAULT_TRUE_RATIO: f64 = 0.5;
/// Decimal places beyond this are not representable in an f64 anyway.
const MAX_DECIMALS: u32 = 15;

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(UuidGenerator {
        kind: FieldKind::Uuid,
    }));
    registry.register_generator(Box::new(UuidGenerator {
        kind: FieldKind::Reference,
    }));
    registry.register_generator(Box::new(SequenceGenerator));
    registry.register_generator(Box::new(NumericGenerator));
    registry.register_generator(Box::new(ChoiceGenerator));
    registry.register_generator(Box::new(BooleanGenerator));
    registry.register_generator(Box::new(DateGenerator));
    registry.register_generator(Box::new(DateTimeGenerator));
    registry.register_generator(Box::new(PatternGenerator));
}

/// Default lower bound for `tanggal` fields.
pub fn default_date_from() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Default upper bound for `tanggal` fields.
pub fn default_date_to() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or(NaiveDate::MAX)
}

/// Default lower bound for `waktu` fields, 2020-01-01T00:00:00Z.
pub fn default_instant_from() -> DateTime<Utc> {
    DateTime::from_timestamp(1_577_836_800, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Default upper bound for `waktu` fields, 2025-12-31T23:59:59Z.
pub fn default_instant_to() -> DateTime<Utc> {
    DateTime::from_timestamp(1_767_225_599, 0).unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Random RFC 4122 version 4 UUID, drawn from `rng`.
pub fn uuid_v4(rng: &mut dyn RngCore) -> String {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .hyphenated()
        .to_string()
}

/// Value in `[min, max]` (bounds swapped if inverted). With zero decimals the
/// value is an integer; otherwise a float rounded to `decimals` places.
pub fn numeric(min: f64, max: f64, decimals: u32, rng: &mut dyn RngCore) -> FieldValue {
    let (min, max) = ordered(min, max);
    if decimals == 0 {
        let low = min.ceil();
        let high = max.floor();
        if low > high || !low.is_finite() || !high.is_finite() {
            // No integer fits; `min` is the only value inside the bounds.
            return FieldValue::Float(min);
        }
        return FieldValue::Int(rng.random_range(low as i64..=high as i64));
    }

    let raw = if min == max || !(max - min).is_finite() {
        min
    } else {
        rng.random_range(min..=max)
    };
    let factor = 10f64.powi(decimals.min(MAX_DECIMALS) as i32);
    let rounded = ((raw * factor).round() / factor).clamp(min, max);
    FieldValue::Float(rounded)
}

pub fn boolean(true_ratio: f64, rng: &mut dyn RngCore) -> bool {
    let ratio = if true_ratio.is_nan() {
        DEFAULT_TRUE_RATIO
    } else {
        true_ratio.clamp(0.0, 1.0)
    };
    rng.random_bool(ratio)
}

/// Uniform date in `[from, to]`, rendered `YYYY-MM-DD`.
pub fn date_between(from: NaiveDate, to: NaiveDate, rng: &mut dyn RngCore) -> String {
    let (from, to) = if from <= to { (from, to) } else { (to, from) };
    let span = i64::from(to.num_days_from_ce() - from.num_days_from_ce());
    let offset = rng.random_range(0..=span);
    let date = from
        .checked_add_signed(chrono::Duration::days(offset))
        .unwrap_or(from);
    date.format("%Y-%m-%d").to_string()
}

/// Uniform instant in `[from, to]` at millisecond resolution, rendered
/// RFC 3339 in UTC with a `Z` suffix.
pub fn instant_between(from: DateTime<Utc>, to: DateTime<Utc>, rng: &mut dyn RngCore) -> String {
    let (from, to) = if from <= to { (from, to) } else { (to, from) };
    let low = from.timestamp_millis();
    let high = to.timestamp_millis();
    let millis = rng.random_range(low..=high);
    DateTime::from_timestamp_millis(millis)
        .unwrap_or(from)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn choice(options: &[FieldValue], rng: &mut dyn RngCore) -> FieldValue {
    options.choose(rng).cloned().unwrap_or(FieldValue::Null)
}

/// Effective `angka` range. A lone bound keeps its default partner when that
/// still leaves `min <= max`; otherwise the partner is one default span away.
pub fn numeric_bounds(min: Option<f64>, max: Option<f64>) -> (f64, f64) {
    let span = DEFAULT_NUMERIC_MAX - DEFAULT_NUMERIC_MIN;
    match (min, max) {
        (Some(min), Some(max)) => (min, max),
        (Some(min), None) if min > DEFAULT_NUMERIC_MAX => (min, min + span),
        (Some(min), None) => (min, DEFAULT_NUMERIC_MAX),
        (None, Some(max)) if max < DEFAULT_NUMERIC_MIN => (max - span, max),
        (None, Some(max)) => (DEFAULT_NUMERIC_MIN, max),
        (None, None) => (DEFAULT_NUMERIC_MIN, DEFAULT_NUMERIC_MAX),
    }
}

/// Effective `tanggal` range, completed the same way as [`numeric_bounds`].
pub fn date_bounds(from: Option<NaiveDate>, to: Option<NaiveDate>) -> (NaiveDate, NaiveDate) {
    let (default_from, default_to) = (default_date_from(), default_date_to());
    let span = default_to.signed_duration_since(default_from);
    match (from, to) {
        (Some(from), Some(to)) => (from, to),
        (Some(from), None) if from > default_to => {
            (from, from.checked_add_signed(span).unwrap_or(NaiveDate::MAX))
        }
        (Some(from), None) => (from, default_to),
        (None, Some(to)) if to < default_from => {
            (to.checked_sub_signed(span).unwrap_or(NaiveDate::MIN), to)
        }
        (None, Some(to)) => (default_from, to),
        (None, None) => (default_from, default_to),
    }
}

/// Effective `waktu` range, completed the same way as [`numeric_bounds`].
pub fn instant_bounds(
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let (default_from, default_to) = (default_instant_from(), default_instant_to());
    let span = default_to.signed_duration_since(default_from);
    match (from, to) {
        (Some(from), Some(to)) => (from, to),
        (Some(from), None) if from > default_to => (
            from,
            from.checked_add_signed(span).unwrap_or(DateTime::<Utc>::MAX_UTC),
        ),
        (Some(from), None) => (from, default_to),
        (None, Some(to)) if to < default_from => (
            to.checked_sub_signed(span).unwrap_or(DateTime::<Utc>::MIN_UTC),
            to,
        ),
        (None, Some(to)) => (default_from, to),
        (None, None) => (default_from, default_to),
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

struct UuidGenerator {
    kind: FieldKind,
}

impl FieldGenerator for UuidGenerator {
    fn kind(&self) -> FieldKind {
        self.kind
    }

    fn generate(
        &self,
        _spec: &FieldSpec,
        _ctx: &mut GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> FieldValue {
        FieldValue::Text(uuid_v4(rng))
    }
}

struct SequenceGenerator;

impl FieldGenerator for SequenceGenerator {
    fn kind(&self) -> FieldKind {
        FieldKind::Sequence
    }

    fn generate(
        &self,
        spec: &FieldSpec,
        ctx: &mut GeneratorContext<'_>,
        _rng: &mut dyn RngCore,
    ) -> FieldValue {
        let FieldSpec::Sequence { start } = spec else {
            return FieldValue::Null;
        };
        let start = start.unwrap_or(DEFAULT_SEQUENCE_START);
        FieldValue::Int(ctx.sequences.next_value(ctx.field, start))
    }
}

struct NumericGenerator;

impl FieldGenerator for NumericGenerator {
    fn kind(&self) -> FieldKind {
        FieldKind::Numeric
    }

    fn generate(
        &self,
        spec: &FieldSpec,
        _ctx: &mut GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> FieldValue {
        let FieldSpec::Numeric { min, max, decimals } = spec else {
            return FieldValue::Null;
        };
        let (min, max) = numeric_bounds(*min, *max);
        numeric(min, max, decimals.unwrap_or(0), rng)
    }
}

struct ChoiceGenerator;

impl FieldGenerator for ChoiceGenerator {
    fn kind(&self) -> FieldKind {
        FieldKind::Choice
    }

    fn generate(
        &self,
        spec: &FieldSpec,
        _ctx: &mut GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> FieldValue {
        match spec {
            FieldSpec::Choice { options } => choice(options, rng),
            _ => FieldValue::Null,
        }
    }
}

struct BooleanGenerator;

impl FieldGenerator for BooleanGenerator {
    fn kind(&self) -> FieldKind {
        FieldKind::Boolean
    }

    fn generate(
        &self,
        spec: &FieldSpec,
        _ctx: &mut GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> FieldValue {
        let FieldSpec::Boolean { true_ratio } = spec else {
            return FieldValue::Null;
        };
        FieldValue::Bool(boolean(true_ratio.unwrap_or(DEFAULT_TRUE_RATIO), rng))
    }
}

struct DateGenerator;

impl FieldGenerator for DateGenerator {
    fn kind(&self) -> FieldKind {
        FieldKind::Date
    }

    fn generate(
        &self,
        spec: &FieldSpec,
        _ctx: &mut GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> FieldValue {
        let FieldSpec::Date { from, to } = spec else {
            return FieldValue::Null;
        };
        let (from, to) = date_bounds(*from, *to);
        FieldValue::Text(date_between(from, to, rng))
    }
}

struct DateTimeGenerator;

impl FieldGenerator for DateTimeGenerator {
    fn kind(&self) -> FieldKind {
        FieldKind::DateTime
    }

    fn generate(
        &self,
        spec: &FieldSpec,
        _ctx: &mut GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> FieldValue {
        let FieldSpec::DateTime { from, to } = spec else {
            return FieldValue::Null;
        };
        let (from, to) = instant_bounds(*from, *to);
        FieldValue::Text(instant_between(from, to, rng))
    }
}

struct PatternGenerator;

impl FieldGenerator for PatternGenerator {
    fn kind(&self) -> FieldKind {
        FieldKind::Pattern
    }

    fn generate(
        &self,
        spec: &FieldSpec,
        _ctx: &mut GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> FieldValue {
        let FieldSpec::Pattern { pattern } = spec else {
            return FieldValue::Null;
        };
        match pattern.as_deref() {
            Some(pattern) => FieldValue::Text(pattern::expand(pattern, rng)),
            None => FieldValue::Text(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn uuid_is_version_4() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let value = uuid_v4(&mut rng);
        let parsed = uuid::Uuid::parse_str(&value).expect("parse uuid");
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(value, value.to_lowercase());
    }

    #[test]
    fn numeric_without_decimals_is_integer_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..200 {
            let value = numeric(17.0, 60.0, 0, &mut rng);
            let FieldValue::Int(value) = value else {
                panic!("expected integer, got {value:?}");
            };
            assert!((17..=60).contains(&value));
        }
    }

    #[test]
    fn numeric_with_decimals_is_rounded_and_clamped() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        for _ in 0..200 {
            let value = numeric(0.1, 0.3, 2, &mut rng).as_f64().expect("number");
            assert!((0.1..=0.3).contains(&value));
            assert_eq!((value * 100.0).round() / 100.0, value);
        }
    }

    #[test]
    fn numeric_swaps_inverted_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let value = numeric(10.0, 1.0, 0, &mut rng).as_i64().expect("integer");
        assert!((1..=10).contains(&value));
    }

    #[test]
    fn numeric_without_integer_in_range_returns_min() {
        let mut rng = ChaCha8Rng::seed_from_u64(14);
        assert_eq!(numeric(1.2, 1.8, 0, &mut rng), FieldValue::Float(1.2));
    }

    #[test]
    fn boolean_ratio_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(15);
        assert!((0..50).all(|_| boolean(1.0, &mut rng)));
        assert!((0..50).all(|_| !boolean(0.0, &mut rng)));
        assert!((0..50).all(|_| boolean(7.0, &mut rng)));
    }

    #[test]
    fn dates_stay_inside_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(16);
        let from = NaiveDate::from_ymd_opt(2024, 2, 27).expect("date");
        let to = NaiveDate::from_ymd_opt(2024, 3, 2).expect("date");
        for _ in 0..100 {
            let value = date_between(from, to, &mut rng);
            let parsed = NaiveDate::parse_from_str(&value, "%Y-%m-%d").expect("parse date");
            assert!(parsed >= from && parsed <= to);
        }
    }

    #[test]
    fn instants_render_with_millis_and_z() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let value = instant_between(default_instant_from(), default_instant_to(), &mut rng);
        assert!(value.ends_with('Z'), "{value}");
        assert_eq!(value.len(), "2020-01-01T00:00:00.000Z".len());
        let parsed = DateTime::parse_from_rfc3339(&value).expect("rfc3339");
        assert!(parsed.year() >= 2020 && parsed.year() <= 2025);
    }

    #[test]
    fn lone_bounds_get_a_partner_on_the_right_side() {
        assert_eq!(numeric_bounds(Some(20.0), None), (20.0, 100.0));
        assert_eq!(numeric_bounds(Some(200.0), None), (200.0, 300.0));
        assert_eq!(numeric_bounds(None, Some(-5.0)), (-105.0, -5.0));
        assert_eq!(numeric_bounds(None, None), (0.0, 100.0));

        let from = NaiveDate::from_ymd_opt(2030, 1, 1).expect("date");
        let (low, high) = date_bounds(Some(from), None);
        assert_eq!(low, from);
        assert!(high > from);

        let to = DateTime::from_timestamp(1_500_000_000, 0).expect("instant");
        let (low, high) = instant_bounds(None, Some(to));
        assert_eq!(high, to);
        assert!(low < to);
    }

    #[test]
    fn choice_of_empty_options_is_null() {
        let mut rng = ChaCha8Rng::seed_from_u64(18);
        assert_eq!(choice(&[], &mut rng), FieldValue::Null);
    }
}
