//! Source column name normalization.
//!
//! Client exports carry arbitrary header text ("TV Spend (EUR)", "Ventes ").
//! [`default_normalizer`] is a best-effort canonicalization toward the
//! `[a-z0-9_]` alphabet the naming convention uses: lowercase, trim, strip
//! diacritics, separators to underscores, drop everything else, collapse
//! underscore runs. A custom normalizer can be injected on the mapper for
//! clients with unusual header schemes.

/// Injectable normalization strategy for source column names.
pub type Normalizer = dyn Fn(&str) -> String + Send + Sync;

/// Default normalization of a source (client) column name.
#[must_use]
pub fn default_normalizer(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut last_was_underscore = false;

    let mut push = |ch: char| {
        let mapped = if ch.is_whitespace() || ch == '-' {
            '_'
        } else if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' {
            ch
        } else {
            return;
        };
        if mapped == '_' && last_was_underscore {
            return;
        }
        last_was_underscore = mapped == '_';
        out.push(mapped);
    };

    for ch in raw.trim().chars() {
        match fold_diacritic(ch) {
            Some(folded) => folded.chars().for_each(&mut push),
            None => ch.to_lowercase().for_each(&mut push),
        }
    }
    out
}

/// Maps common Latin accented characters to their ASCII base letters.
/// Returns `None` for everything else.
fn fold_diacritic(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => "a",
        'ç' | 'Ç' => "c",
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => "e",
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => "i",
        'ñ' | 'Ñ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => "o",
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => "u",
        'ý' | 'ÿ' | 'Ý' => "y",
        'æ' | 'Æ' => "ae",
        'œ' | 'Œ' => "oe",
        'ß' => "ss",
        _ => return None,
    };
    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_replaces_separators() {
        assert_eq!(default_normalizer("TV Spend"), "tv_spend");
        assert_eq!(default_normalizer("tv-spend"), "tv_spend");
    }

    #[test]
    fn trims_and_collapses_underscores() {
        assert_eq!(default_normalizer("  Sales  "), "sales");
        assert_eq!(default_normalizer("tv  -  spend"), "tv_spend");
        assert_eq!(default_normalizer("a__b"), "a_b");
    }

    #[test]
    fn strips_diacritics() {
        assert_eq!(default_normalizer("Ventes Eté"), "ventes_ete");
        assert_eq!(default_normalizer("Größe"), "grosse");
    }

    #[test]
    fn drops_characters_outside_the_alphabet() {
        assert_eq!(default_normalizer("TV Spend (EUR)"), "tv_spend_eur");
        assert_eq!(default_normalizer("spend%"), "spend");
    }

    #[test]
    fn colliding_inputs_normalize_identically() {
        assert_eq!(default_normalizer("Sales "), default_normalizer("Sales"));
    }
}
