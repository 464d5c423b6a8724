//! Query-string mirror.
//!
//! The wizard's position is persisted in one URL query parameter so a
//! reload or a shared link restores the same step. The controller holds
//! canonical state; this module is the explicit serialize/deserialize
//! pair between that state and the query string. Writes preserve every
//! unrelated parameter.

/// Parameter carrying the current step name.
pub const STEP_PARAM: &str = "step";

/// Parameter carrying the catalogued object's id.
pub const OBJECT_ID_PARAM: &str = "oi";

/// Escape a query component: space becomes `+`, reserved characters
/// become `%XX`.
pub fn escape_component(component: &str) -> String {
    let mut out = String::with_capacity(component.len());
    for byte in component.bytes() {
        match byte {
            b' ' => out.push('+'),
            b'%' | b'&' | b'=' | b'+' | b'#' | b'?' => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
            // Non-ASCII bytes escape too, so multibyte input survives the
            // byte-level round trip.
            byte if !byte.is_ascii() => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
            _ => out.push(byte as char),
        }
    }
    out
}

/// Unescape a query component: `+` becomes space, `%XX` decodes to the
/// named byte. Malformed escapes pass through literally.
pub fn unescape_component(component: &str) -> String {
    let bytes = component.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                let decoded = (i + 2 < bytes.len())
                    .then(|| {
                        let hi = (bytes[i + 1] as char).to_digit(16)?;
                        let lo = (bytes[i + 2] as char).to_digit(16)?;
                        Some((hi * 16 + lo) as u8)
                    })
                    .flatten();
                match decoded {
                    Some(byte) => {
                        out.push(byte);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            other => {
                out.push(other);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Parse a query string (with or without the leading `?`) into ordered
/// key/value pairs.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (unescape_component(key), unescape_component(value)),
            None => (unescape_component(pair), String::new()),
        })
        .collect()
}

/// Format ordered key/value pairs back into a query string (no leading `?`).
pub fn format_query(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", escape_component(key), escape_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Read one parameter's value.
pub fn get_param(query: &str, key: &str) -> Option<String> {
    parse_query(query)
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

/// The mirrored step token, if the query carries one.
pub fn step_param(query: &str) -> Option<String> {
    get_param(query, STEP_PARAM)
}

/// The object id, if the query carries one.
pub fn object_id_param(query: &str) -> Option<String> {
    get_param(query, OBJECT_ID_PARAM)
}

/// Set (or add) the step parameter, keeping every other parameter and its
/// position intact.
pub fn with_step(query: &str, step: &str) -> String {
    let mut params = parse_query(query);
    let mut replaced = false;
    params.retain_mut(|(key, value)| {
        if key != STEP_PARAM {
            return true;
        }
        if replaced {
            // URLSearchParams-style set: one surviving occurrence.
            return false;
        }
        *value = step.to_string();
        replaced = true;
        true
    });
    if !replaced {
        params.push((STEP_PARAM.to_string(), step.to_string()));
    }
    format_query(&params)
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_round_trips() {
        for raw in ["object identification", "a&b=c", "100%", "plain", "café"] {
            assert_eq!(unescape_component(&escape_component(raw)), raw);
        }
    }

    #[test]
    fn space_uses_plus() {
        assert_eq!(escape_component("object identification"), "object+identification");
        assert_eq!(unescape_component("object+identification"), "object identification");
    }

    #[test]
    fn parse_ignores_leading_question_mark() {
        assert_eq!(
            parse_query("?oi=66f2&step=images"),
            vec![
                ("oi".to_string(), "66f2".to_string()),
                ("step".to_string(), "images".to_string()),
            ]
        );
        assert_eq!(parse_query(""), Vec::new());
    }

    #[test]
    fn with_step_preserves_unrelated_params() {
        let query = "oi=66f2&isAsignProtectRequested=true&step=about";
        assert_eq!(
            with_step(query, "secondary measurements"),
            "oi=66f2&isAsignProtectRequested=true&step=secondary+measurements"
        );
    }

    #[test]
    fn with_step_adds_when_absent() {
        assert_eq!(with_step("oi=66f2", "images"), "oi=66f2&step=images");
        assert_eq!(with_step("", "images"), "step=images");
    }

    #[test]
    fn with_step_collapses_duplicates() {
        assert_eq!(
            with_step("step=a&oi=1&step=b", "images"),
            "step=images&oi=1"
        );
    }

    #[test]
    fn step_and_object_id_accessors() {
        let query = "?oi=66f2&step=object+identification";
        assert_eq!(step_param(query).as_deref(), Some("object identification"));
        assert_eq!(object_id_param(query).as_deref(), Some("66f2"));
        assert_eq!(step_param("oi=1"), None);
    }

    #[test]
    fn malformed_escapes_pass_through() {
        assert_eq!(unescape_component("100%"), "100%");
        assert_eq!(unescape_component("%zz"), "%zz");
    }
}
