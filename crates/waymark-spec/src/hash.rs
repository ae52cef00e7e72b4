//! Canonical hashing.
//!
//! Config and collection digests are computed as:
//! ```text
//! hash = hex(BLAKE3(JCS(json)))
//! ```
//! where JCS is the JSON Canonicalization Scheme (RFC 8785).

use crate::config::CollectionConfig;
use crate::error::SpecError;
use crate::record::GeneratedRecord;

/// Computes the canonical BLAKE3 hash of a configuration.
///
/// ```
/// use waymark_spec::{CollectionConfig, hash::canonical_config_hash};
///
/// let hash = canonical_config_hash(&CollectionConfig::builtin()).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn canonical_config_hash(config: &CollectionConfig) -> Result<String, SpecError> {
    let value = config.to_value()?;
    Ok(canonical_value_hash(&value))
}

/// Computes a digest over a record sequence with timestamps blanked.
///
/// Two runs with the same configuration and seed yield the same digest.
pub fn canonical_records_hash(records: &[GeneratedRecord]) -> Result<String, SpecError> {
    let mut hasher = blake3::Hasher::new();
    for record in records {
        let mut value = serde_json::to_value(record)?;
        if let Some(obj) = value.as_object_mut() {
            obj.remove("timestamp");
        }
        hasher.update(canonicalize_json(&value).as_bytes());
        hasher.update(b"\n");
    }
    Ok(hasher.finalize().to_hex().to_string())
}

/// Computes the canonical BLAKE3 hash of a JSON value.
pub fn canonical_value_hash(value: &serde_json::Value) -> String {
    blake3_hash_str(&canonicalize_json(value))
}

/// Canonicalizes a JSON value according to RFC 8785 (JCS).
///
/// Object keys are sorted, no insignificant whitespace is emitted, and
/// strings use minimal escaping.
pub fn canonicalize_json(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => format_jcs_number(n),
        serde_json::Value::String(s) => format_jcs_string(s),
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(canonicalize_json).collect();
            format!("[{}]", items.join(","))
        }
        serde_json::Value::Object(obj) => {
            let mut pairs: Vec<(&String, &serde_json::Value)> = obj.iter().collect();
            pairs.sort_by(|a, b| a.0.cmp(b.0));

            let items: Vec<String> = pairs
                .into_iter()
                .map(|(k, v)| format!("{}:{}", format_jcs_string(k), canonicalize_json(v)))
                .collect();
            format!("{{{}}}", items.join(","))
        }
    }
}

fn format_jcs_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() => {
            if f == 0.0 {
                return "0".to_string();
            }
            if f.fract() == 0.0 && f.abs() < 1e15 {
                return format!("{}", f as i64);
            }
            let s = format!("{}", f);
            if s.contains('.') && !s.contains('e') && !s.contains('E') {
                return s.trim_end_matches('0').trim_end_matches('.').to_string();
            }
            s
        }
        _ => "null".to_string(),
    }
}

fn format_jcs_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c < '\x20' => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result.push('"');
    result
}

/// Computes a BLAKE3 hash of arbitrary data as lowercase hex.
pub fn blake3_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Computes a BLAKE3 hash of a string as lowercase hex.
pub fn blake3_hash_str(s: &str) -> String {
    blake3_hash(s.as_bytes())
}
