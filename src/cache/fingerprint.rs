//! Value Fingerprinting Module
//!
//! Computes weak etags for cached values so callers can detect content
//! changes without comparing whole payloads.

use serde::Serialize;

// == Fingerprint ==
/// Computes a weak etag for a value.
///
/// The value is serialized to JSON and folded through a simple
/// order-dependent 32-bit rolling hash. The result is formatted as a weak
/// etag, e.g. `W/"1a2b3c4d"`.
///
/// Contract: this is change detection, not integrity. Distinct values may
/// collide occasionally and callers must tolerate that; equal etags do not
/// prove equal content. If a value refuses to serialize (for example a map
/// with non-string keys), the hash falls back to the serializer's error
/// text, trading precision for an infallible `set` path.
pub fn fingerprint<T: Serialize>(value: &T) -> String {
    let serialized = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(err) => err.to_string(),
    };

    let mut hash: u32 = 0;
    for byte in serialized.bytes() {
        hash = hash.wrapping_mul(31).wrapping_add(u32::from(byte));
    }

    format!("W/\"{:08x}\"", hash)
}
