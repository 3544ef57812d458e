use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Where the random fill pass gets its randomness from.
///
/// Text and numeric seeds are reproducible on every platform. [`Seed::Random`]
/// and an empty text seed draw a value from the system clock instead. That
/// path is not reproducible, but the value it picks is reported
/// back (see [`Cave::seed`](crate::Cave::seed)) so the run can be repeated
/// with [`Seed::Value`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Seed {
    /// A text seed, hashed with FNV-1a over its UTF-8 bytes.
    Text(String),
    /// A raw 64-bit seed.
    Value(u64),
    /// A fresh time-derived seed on every resolution.
    Random,
}

impl Seed {
    /// Convenience constructor for [`Seed::Text`].
    pub fn text(s: impl Into<String>) -> Self {
        Seed::Text(s.into())
    }

    /// Whether [`resolve`](Self::resolve) returns the same value every time.
    pub fn is_deterministic(&self) -> bool {
        match self {
            Seed::Text(s) => !s.is_empty(),
            Seed::Value(_) => true,
            Seed::Random => false,
        }
    }

    /// Reduce the seed to the 64-bit value that seeds the generator.
    pub fn resolve(&self) -> u64 {
        match self {
            Seed::Text(s) if !s.is_empty() => hash_text(s),
            Seed::Text(_) => {
                let value = time_seed();
                log::warn!("empty seed, falling back to time-derived seed {}", value);
                value
            }
            Seed::Value(v) => *v,
            Seed::Random => {
                let value = time_seed();
                log::debug!("random seed {}", value);
                value
            }
        }
    }
}

impl Default for Seed {
    fn default() -> Self {
        Seed::Text("grotto".to_string())
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Text(s) => write!(f, "{:?}", s),
            Seed::Value(v) => write!(f, "{}", v),
            Seed::Random => f.write_str("random"),
        }
    }
}

// FNV-1a, 64-bit.
fn hash_text(s: &str) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for &byte in s.as_bytes() {
        h ^= byte as u64;
        h = h.wrapping_mul(0x100000001b3);
    }
    h
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
