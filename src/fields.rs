//! Ready-made field generators backed by the `fake` crate.
//!
//! Every generator owns its own seeded RNG, so a schema built from the same
//! kinds and seed produces the same rows on every run.

use crate::schema::FieldGenerator;
use chrono::DateTime;
use fake::faker::address::en::CityName;
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::{Password, SafeEmail, Username};
use fake::faker::lorem::en::{Sentence, Word};
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::faker::phone_number::en::PhoneNumber;
use fake::{Fake, Faker};
use fake::rand::rngs::StdRng;
use fake::rand::SeedableRng;
use serde::{Deserialize, Deserializer, Serialize};

/// 2024-01-01T00:00:00Z, upper bound for generated dates
const MAX_TIMESTAMP: i64 = 1_704_067_200;

const DEFAULT_PASSWORD_LENGTH: usize = 12;

/// Longest password a generator will produce
pub const MAX_PASSWORD_LENGTH: usize = 1024;

/// Kind of value a generated column holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    /// Incrementing integer
    Sequence {
        #[serde(default = "default_sequence_start")]
        start: i64,
    },
    /// The same value on every record
    Constant { value: String },
    /// Uniform integer in `min..=max`
    Integer { min: i64, max: i64 },
    Uuid,
    FirstName,
    LastName,
    Name,
    Email,
    Username,
    /// `length` characters, between 1 and [`MAX_PASSWORD_LENGTH`]
    Password {
        #[serde(
            default = "default_password_length",
            deserialize_with = "deserialize_password_length"
        )]
        length: usize,
    },
    Phone,
    City,
    Company,
    Word,
    Sentence,
    /// `YYYY-MM-DD`
    Date,
    /// `YYYY-MM-DD HH:MM:SS`
    Datetime,
    Boolean,
}

fn default_sequence_start() -> i64 {
    1
}

fn default_password_length() -> usize {
    DEFAULT_PASSWORD_LENGTH
}

fn check_password_length(length: usize) -> Result<usize, String> {
    if (1..=MAX_PASSWORD_LENGTH).contains(&length) {
        Ok(length)
    } else {
        Err(format!(
            "Invalid password length: {} (expected 1..={})",
            length, MAX_PASSWORD_LENGTH
        ))
    }
}

fn deserialize_password_length<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let length = usize::deserialize(deserializer)?;
    check_password_length(length).map_err(serde::de::Error::custom)
}

impl FieldKind {
    /// Kind names accepted when parsing from a string
    pub const NAMES: &'static [&'static str] = &[
        "sequence",
        "constant",
        "integer",
        "uuid",
        "first_name",
        "last_name",
        "name",
        "email",
        "username",
        "password",
        "phone",
        "city",
        "company",
        "word",
        "sentence",
        "date",
        "datetime",
        "boolean",
    ];

    /// Build a generator for this kind seeded with `seed`
    pub fn build(&self, seed: u64) -> FieldGenerator {
        let mut rng = StdRng::seed_from_u64(seed);

        match self.clone() {
            FieldKind::Sequence { start } => {
                let mut next = start;
                Box::new(move || {
                    let value = next;
                    next = next.wrapping_add(1);
                    value.to_string()
                })
            }
            FieldKind::Constant { value } => Box::new(move || value.clone()),
            FieldKind::Integer { min, max } => {
                let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
                Box::new(move || (lo..=hi).fake_with_rng::<i64, _>(&mut rng).to_string())
            }
            FieldKind::Uuid => Box::new(move || {
                format!(
                    "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
                    Faker.fake_with_rng::<u32, _>(&mut rng),
                    Faker.fake_with_rng::<u16, _>(&mut rng),
                    (Faker.fake_with_rng::<u16, _>(&mut rng) & 0x0FFF) | 0x4000, // Version 4
                    (Faker.fake_with_rng::<u16, _>(&mut rng) & 0x3FFF) | 0x8000, // Variant
                    Faker.fake_with_rng::<u64, _>(&mut rng) & 0xFFFF_FFFF_FFFF_u64
                )
            }),
            FieldKind::FirstName => Box::new(move || FirstName().fake_with_rng(&mut rng)),
            FieldKind::LastName => Box::new(move || LastName().fake_with_rng(&mut rng)),
            FieldKind::Name => Box::new(move || Name().fake_with_rng(&mut rng)),
            FieldKind::Email => Box::new(move || SafeEmail().fake_with_rng(&mut rng)),
            FieldKind::Username => Box::new(move || Username().fake_with_rng(&mut rng)),
            FieldKind::Password { length } => {
                let length = length.clamp(1, MAX_PASSWORD_LENGTH);
                Box::new(move || Password(length..length + 1).fake_with_rng(&mut rng))
            }
            FieldKind::Phone => Box::new(move || PhoneNumber().fake_with_rng(&mut rng)),
            FieldKind::City => Box::new(move || CityName().fake_with_rng(&mut rng)),
            FieldKind::Company => Box::new(move || CompanyName().fake_with_rng(&mut rng)),
            FieldKind::Word => Box::new(move || Word().fake_with_rng(&mut rng)),
            FieldKind::Sentence => Box::new(move || Sentence(3..8).fake_with_rng(&mut rng)),
            FieldKind::Date => Box::new(move || format_timestamp(&mut rng, "%Y-%m-%d")),
            FieldKind::Datetime => {
                Box::new(move || format_timestamp(&mut rng, "%Y-%m-%d %H:%M:%S"))
            }
            FieldKind::Boolean => {
                Box::new(move || Faker.fake_with_rng::<bool, _>(&mut rng).to_string())
            }
        }
    }
}

fn format_timestamp(rng: &mut StdRng, pattern: &str) -> String {
    let secs = (0..MAX_TIMESTAMP).fake_with_rng::<i64, _>(rng);
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.format(pattern).to_string())
        .unwrap_or_default()
}

impl std::str::FromStr for FieldKind {
    type Err = String;

    /// Parse `kind` or `kind=argument`, e.g. `email`, `sequence=100`,
    /// `constant=active`, `integer=1..99`, `password=16`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match s.split_once('=') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };

        let kind = match name.trim().to_lowercase().as_str() {
            "sequence" | "seq" => FieldKind::Sequence {
                start: parse_arg(arg, default_sequence_start(), "sequence start")?,
            },
            "constant" | "const" => FieldKind::Constant {
                value: arg.unwrap_or_default().to_string(),
            },
            "integer" | "int" => {
                let (min, max) = match arg {
                    Some(range) => parse_range(range)?,
                    None => (0, 1000),
                };
                FieldKind::Integer { min, max }
            }
            "uuid" => FieldKind::Uuid,
            "first_name" => FieldKind::FirstName,
            "last_name" => FieldKind::LastName,
            "name" | "full_name" => FieldKind::Name,
            "email" | "safe_email" => FieldKind::Email,
            "username" | "user_name" => FieldKind::Username,
            "password" => FieldKind::Password {
                length: check_password_length(parse_arg(
                    arg,
                    DEFAULT_PASSWORD_LENGTH,
                    "password length",
                )?)?,
            },
            "phone" | "phone_number" => FieldKind::Phone,
            "city" => FieldKind::City,
            "company" | "company_name" => FieldKind::Company,
            "word" => FieldKind::Word,
            "sentence" => FieldKind::Sentence,
            "date" => FieldKind::Date,
            "datetime" | "date_time" => FieldKind::Datetime,
            "boolean" | "bool" => FieldKind::Boolean,
            other => {
                return Err(format!(
                    "Unknown field kind: {}. Valid kinds: {}",
                    other,
                    Self::NAMES.join(", ")
                ))
            }
        };
        Ok(kind)
    }
}

fn parse_arg<T: std::str::FromStr>(arg: Option<&str>, default: T, what: &str) -> Result<T, String> {
    match arg {
        Some(a) => a
            .trim()
            .parse()
            .map_err(|_| format!("Invalid {}: {}", what, a)),
        None => Ok(default),
    }
}

fn parse_range(range: &str) -> Result<(i64, i64), String> {
    let (min, max) = range
        .split_once("..")
        .ok_or_else(|| format!("Invalid integer range: {} (expected MIN..MAX)", range))?;
    let min = min
        .trim()
        .parse()
        .map_err(|_| format!("Invalid integer range: {}", range))?;
    let max = max
        .trim()
        .parse()
        .map_err(|_| format!("Invalid integer range: {}", range))?;
    Ok((min, max))
}
