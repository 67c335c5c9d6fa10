//! Link Header Parsing
//!
//! Parses an RFC 5988-style `Link` response header into a mapping of
//! relation name to link target. Total for malformed input: entries that
//! do not parse are dropped and the remainder is kept, so a bad header can
//! never fail a request - it only degrades pagination.

use std::collections::HashMap;

/// Parse a `Link` header value into relation-name -> target pairs.
///
/// Accepts the common serialization
/// `<{url}>; rel="next", <{url}>; rel="prev"`, with or without quotes
/// around the relation name. A relation listing several names
/// (`rel="next last"`) maps each name to the same target. Malformed
/// entries are skipped; a fully malformed header yields an empty map.
pub fn parse(header: &str) -> HashMap<String, String> {
    let mut relations = HashMap::new();

    for entry in header.split(',') {
        let mut parts = entry.split(';');
        let Some(target) = parts
            .next()
            .map(str::trim)
            .and_then(|t| t.strip_prefix('<'))
            .and_then(|t| t.strip_suffix('>'))
        else {
            continue;
        };

        for param in parts {
            let Some((key, value)) = param.split_once('=') else {
                continue;
            };
            if !key.trim().eq_ignore_ascii_case("rel") {
                continue;
            }
            for name in value.trim().trim_matches('"').split_whitespace() {
                relations.insert(name.to_ascii_lowercase(), target.to_string());
            }
        }
    }

    relations
}
