use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

use mbg_core::{FieldKind, FieldSpec, FieldValue};

use crate::generators::{FieldGenerator, GeneratorContext, GeneratorRegistry};
use crate::locale::id_id::{self, City};

const DEFAULT_PARAGRAPH_SENTENCES: u32 = 5;
const SENTENCE_MIN_WORDS: usize = 5;
const SENTENCE_MAX_WORDS: usize = 15;

pub fn register(registry: &mut GeneratorRegistry) {
    let text_generators: [(FieldKind, fn(&mut dyn RngCore) -> String); 11] = [
        (FieldKind::FullName, full_name),
        (FieldKind::FirstName, first_name),
        (FieldKind::LastName, last_name),
        (FieldKind::Phone, phone),
        (FieldKind::Address, address),
        (FieldKind::City, city),
        (FieldKind::Province, province),
        (FieldKind::PostalCode, postal_code),
        (FieldKind::Sentence, sentence),
        (FieldKind::Color, color),
        (FieldKind::Company, company),
    ];
    for (kind, produce) in text_generators {
        registry.register_generator(Box::new(TextGenerator { kind, produce }));
    }
    registry.register_generator(Box::new(EmailGenerator));
    registry.register_generator(Box::new(ParagraphGenerator));
    registry.register_generator(Box::new(UrlGenerator));
}

fn pick<'a>(values: &'a [&'a str], rng: &mut dyn RngCore) -> &'a str {
    values.choose(rng).copied().unwrap_or_default()
}

fn pick_city(rng: &mut dyn RngCore) -> Option<&'static City> {
    id_id::CITIES.choose(rng)
}

pub fn first_name(rng: &mut dyn RngCore) -> String {
    pick(id_id::FIRST_NAMES, rng).to_string()
}

pub fn last_name(rng: &mut dyn RngCore) -> String {
    pick(id_id::LAST_NAMES, rng).to_string()
}

pub fn full_name(rng: &mut dyn RngCore) -> String {
    let first = pick(id_id::FIRST_NAMES, rng);
    let last = pick(id_id::LAST_NAMES, rng);
    format!("{first} {last}")
}

/// Address-like email built from a random name, in one of four local-part
/// shapes. `domain` replaces the random provider when given.
pub fn email(domain: Option<&str>, rng: &mut dyn RngCore) -> String {
    let first = pick(id_id::FIRST_NAMES, rng).to_lowercase();
    let last = pick(id_id::LAST_NAMES, rng).to_lowercase();
    let local = match rng.random_range(0..4) {
        0 => format!("{first}.{last}"),
        1 => format!("{first}{last}"),
        2 => format!("{first}.{last}{}", rng.random_range(1..=99)),
        _ => format!("{first}{}", rng.random_range(100..=999)),
    };
    let domain = match domain.filter(|domain| !domain.trim().is_empty()) {
        Some(domain) => domain.trim().to_string(),
        None => pick(id_id::EMAIL_DOMAINS, rng).to_string(),
    };
    let local: String = local.chars().filter(|ch| !ch.is_whitespace()).collect();
    format!("{local}@{domain}")
}

/// Mobile number: operator prefix followed by eight digits.
pub fn phone(rng: &mut dyn RngCore) -> String {
    let mut number = pick(id_id::MOBILE_PREFIXES, rng).to_string();
    for _ in 0..8 {
        number.push(rng.random_range('0'..='9'));
    }
    number
}

pub fn address(rng: &mut dyn RngCore) -> String {
    let street = pick(id_id::STREETS, rng);
    let number = rng.random_range(1..=200);
    let rt = rng.random_range(1..=20);
    let rw = rng.random_range(1..=15);
    let (city, postal) = match pick_city(rng) {
        Some(city) => (city.name, pick(city.postal_codes, rng)),
        None => ("", ""),
    };
    format!("{street} No. {number}, RT {rt:03}/RW {rw:03}, {city} {postal}")
}

pub fn city(rng: &mut dyn RngCore) -> String {
    pick_city(rng)
        .map(|city| city.name.to_string())
        .unwrap_or_default()
}

pub fn province(rng: &mut dyn RngCore) -> String {
    pick(id_id::PROVINCES, rng).to_string()
}

pub fn postal_code(rng: &mut dyn RngCore) -> String {
    pick_city(rng)
        .map(|city| pick(city.postal_codes, rng).to_string())
        .unwrap_or_default()
}

pub fn company(rng: &mut dyn RngCore) -> String {
    let entity = pick(id_id::LEGAL_ENTITIES, rng);
    let first = pick(id_id::COMPANY_FIRST_WORDS, rng);
    let second = pick(id_id::COMPANY_SECOND_WORDS, rng);
    let suffix = pick(id_id::COMPANY_SUFFIXES, rng);
    if suffix.is_empty() {
        format!("{entity} {first} {second}")
    } else {
        format!("{entity} {first} {second} {suffix}")
    }
}

/// Five to fifteen lorem words, capitalised, ending with a period.
pub fn sentence(rng: &mut dyn RngCore) -> String {
    let count = rng.random_range(SENTENCE_MIN_WORDS..=SENTENCE_MAX_WORDS);
    let words: Vec<&str> = (0..count).map(|_| pick(id_id::LOREM_WORDS, rng)).collect();
    let mut text = capitalize(&words.join(" "));
    text.push('.');
    text
}

pub fn paragraph(sentences: u32, rng: &mut dyn RngCore) -> String {
    (0..sentences.max(1))
        .map(|_| sentence(rng))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `https://<domain>/<1-3 lorem words>`; without a domain, a random
/// `<lorem word>.com`.
pub fn url(domain: Option<&str>, rng: &mut dyn RngCore) -> String {
    let domain = match domain.map(str::trim).filter(|domain| !domain.is_empty()) {
        Some(domain) => domain.to_string(),
        None => format!("{}.com", pick(id_id::LOREM_WORDS, rng)),
    };
    let segments = rng.random_range(1..=3);
    let path: Vec<&str> = (0..segments)
        .map(|_| pick(id_id::LOREM_WORDS, rng))
        .collect();
    format!("https://{domain}/{}", path.join("/"))
}

pub fn color(rng: &mut dyn RngCore) -> String {
    pick(id_id::COLORS, rng).to_string()
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Kinds whose value depends on nothing but the RNG.
struct TextGenerator {
    kind: FieldKind,
    produce: fn(&mut dyn RngCore) -> String,
}

impl FieldGenerator for TextGenerator {
    fn kind(&self) -> FieldKind {
        self.kind
    }

    fn generate(
        &self,
        _spec: &FieldSpec,
        _ctx: &mut GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> FieldValue {
        FieldValue::Text((self.produce)(rng))
    }
}

struct EmailGenerator;

impl FieldGenerator for EmailGenerator {
    fn kind(&self) -> FieldKind {
        FieldKind::Email
    }

    fn generate(
        &self,
        spec: &FieldSpec,
        _ctx: &mut GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> FieldValue {
        let FieldSpec::Email { domain } = spec else {
            return FieldValue::Null;
        };
        FieldValue::Text(email(domain.as_deref(), rng))
    }
}

struct ParagraphGenerator;

impl FieldGenerator for ParagraphGenerator {
    fn kind(&self) -> FieldKind {
        FieldKind::Paragraph
    }

    fn generate(
        &self,
        spec: &FieldSpec,
        _ctx: &mut GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> FieldValue {
        let FieldSpec::Paragraph { sentences } = spec else {
            return FieldValue::Null;
        };
        FieldValue::Text(paragraph(
            sentences.unwrap_or(DEFAULT_PARAGRAPH_SENTENCES),
            rng,
        ))
    }
}

struct UrlGenerator;

impl FieldGenerator for UrlGenerator {
    fn kind(&self) -> FieldKind {
        FieldKind::Url
    }

    fn generate(
        &self,
        spec: &FieldSpec,
        _ctx: &mut GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> FieldValue {
        let FieldSpec::Url { domain } = spec else {
            return FieldValue::Null;
        };
        FieldValue::Text(url(domain.as_deref(), rng))
    }
}
