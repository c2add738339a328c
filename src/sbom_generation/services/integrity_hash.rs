use crate::sbom_generation::domain::{Hash, HashAlgorithm};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use regex::Regex;
use std::fmt::Write;
use std::sync::LazyLock;

/// Integrity patterns in match priority order, most common first.
///
/// Lengths are fixed by the digest size: 64, 20, 32 and 48 bytes.
static INTEGRITY_PATTERNS: LazyLock<[(HashAlgorithm, Regex); 4]> = LazyLock::new(|| {
    [
        (HashAlgorithm::Sha512, pattern(r"^sha512-([a-z0-9+/]{86}==)$")),
        (HashAlgorithm::Sha1, pattern(r"^sha1-([a-z0-9+/]{27}=)$")),
        (HashAlgorithm::Sha256, pattern(r"^sha256-([a-z0-9+/]{43}=)$")),
        (HashAlgorithm::Sha384, pattern(r"^sha384-([a-z0-9+/]{64})$")),
    ]
});

fn pattern(source: &str) -> Regex {
    Regex::new(&format!("(?i){}", source)).expect("integrity pattern is a valid regex")
}

/// IntegrityHashExtractor service for npm `integrity` strings
///
/// Pure function over strings: nothing here can fail. An integrity value that
/// matches no known pattern, or whose payload is not decodable base64, simply
/// yields no hash.
pub struct IntegrityHashExtractor;

impl IntegrityHashExtractor {
    pub fn extract(integrity: Option<&str>) -> Option<Hash> {
        let integrity = integrity?;

        INTEGRITY_PATTERNS.iter().find_map(|(algorithm, regex)| {
            let payload = regex.captures(integrity)?.get(1)?.as_str();
            let digest = STANDARD.decode(payload).ok()?;
            Some(Hash {
                algorithm: *algorithm,
                content: to_hex(&digest),
            })
        })
    }
}

fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .fold(String::with_capacity(bytes.len() * 2), |mut hex, byte| {
            let _ = write!(hex, "{:02x}", byte);
            hex
        })
}
