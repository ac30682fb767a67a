//! Repair of stringified list literals.
//!
//! The upstream dataset stores `genres` and `production_companies` as
//! array literals serialized into CSV cells, so a value can look like
//! `["Action", "Drama"]`, `['Action', 'Drama']`, or worse. Parsing is an
//! ordered chain of strategies; the first one that produces a non-empty
//! list wins, and exhaustion degrades to the whole string as a single
//! element. Nothing in here returns an error.

type Strategy = fn(&str) -> Option<Vec<String>>;

/// Attempt order: strict JSON, then quote normalization, then a plain
/// bracket/comma split.
const STRATEGIES: [Strategy; 3] = [strict_json, requoted_json, bracket_split];

/// Parse one embedded list cell. Empty input yields an empty list; any
/// other input yields at least one element.
pub fn parse_list(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }
    for parse in STRATEGIES {
        if let Some(items) = parse(raw) {
            return items;
        }
    }
    // Whole-string fallback, unless the cell was only list punctuation
    // (an empty literal like `[]` means "no categories", not one).
    let stripped =
        raw.trim_matches(|c: char| c.is_whitespace() || matches!(c, '[' | ']' | '\'' | '"' | ','));
    if stripped.is_empty() {
        Vec::new()
    } else {
        vec![raw.to_string()]
    }
}

fn cleaned(items: Vec<String>) -> Option<Vec<String>> {
    let items: Vec<String> = items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

fn strict_json(raw: &str) -> Option<Vec<String>> {
    serde_json::from_str::<Vec<String>>(raw).ok().and_then(cleaned)
}

/// `['A', 'B']` → `["A", "B"]`. A single quote only counts as a delimiter
/// when it sits against a bracket or comma, so an apostrophe inside a
/// name (`['Eon's Heirs']`) survives. Pre-existing double quotes would
/// terminate the rewritten strings early, so they get escaped.
fn requoted_json(raw: &str) -> Option<Vec<String>> {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len() + 8);
    for (i, &ch) in chars.iter().enumerate() {
        match ch {
            '\'' => {
                let opens = matches!(prev_significant(&chars, i), None | Some('[') | Some(','));
                let closes = matches!(next_significant(&chars, i), None | Some(']') | Some(','));
                out.push(if opens || closes { '"' } else { '\'' });
            }
            '"' => out.push_str("\\\""),
            _ => out.push(ch),
        }
    }
    serde_json::from_str::<Vec<String>>(&out).ok().and_then(cleaned)
}

/// Last structured attempt: strip the brackets and split on commas,
/// trimming stray quotes from each piece. Only applies to inputs that at
/// least look like a list; a bare string goes to the single-element
/// fallback instead (it may legitimately contain commas).
fn bracket_split(raw: &str) -> Option<Vec<String>> {
    let inner = raw.strip_prefix('[')?;
    let inner = inner.strip_suffix(']').unwrap_or(inner);
    cleaned(
        inner
            .split(',')
            .map(|s| {
                s.trim_matches(|c: char| c.is_whitespace() || c == '\'' || c == '"')
                    .to_string()
            })
            .collect(),
    )
}

fn prev_significant(chars: &[char], i: usize) -> Option<char> {
    chars[..i].iter().rev().find(|c| !c.is_whitespace()).copied()
}

fn next_significant(chars: &[char], i: usize) -> Option<char> {
    chars[i + 1..].iter().find(|c| !c.is_whitespace()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_json_passes_through() {
        assert_eq!(parse_list(r#"["Action", "Drama"]"#), vec!["Action", "Drama"]);
    }

    #[test]
    fn single_quoted_lists_are_requoted() {
        assert_eq!(
            parse_list("['Comedy', 'Romance']"),
            vec!["Comedy", "Romance"]
        );
    }

    #[test]
    fn apostrophes_inside_names_survive_requoting() {
        assert_eq!(
            parse_list("['Eon's Heirs', 'Danjaq']"),
            vec!["Eon's Heirs", "Danjaq"]
        );
    }

    #[test]
    fn unquoted_lists_fall_through_to_the_split() {
        assert_eq!(parse_list("[Action, Sci-Fi]"), vec!["Action", "Sci-Fi"]);
    }

    #[test]
    fn mixed_quoting_still_yields_the_items() {
        // Stage 2 produces invalid JSON here; stage 3 recovers.
        assert_eq!(parse_list(r#"['A', "B"]"#), vec!["A", "B"]);
    }

    #[test]
    fn bare_string_becomes_a_single_element() {
        assert_eq!(
            parse_list("Metro, Goldwyn & Mayer"),
            vec!["Metro, Goldwyn & Mayer"]
        );
    }

    #[test]
    fn empty_and_blank_inputs_yield_nothing() {
        assert!(parse_list("").is_empty());
        assert!(parse_list("   ").is_empty());
        assert!(parse_list("[]").is_empty());
    }
}
