//! Rule-based noun lemmatizer.
//!
//! Reduces plural nouns to their dictionary base form using WordNet-style
//! detachment rules plus a table of irregular plurals. Every token is treated
//! as a noun; there is no part-of-speech tagging.

/// Irregular plurals that the suffix rules would get wrong.
const IRREGULAR: &[(&str, &str)] = &[
    ("alumni", "alumnus"),
    ("analyses", "analysis"),
    ("children", "child"),
    ("crises", "crisis"),
    ("criteria", "criterion"),
    ("curricula", "curriculum"),
    ("diagnoses", "diagnosis"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("hypotheses", "hypothesis"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("men", "man"),
    ("mice", "mouse"),
    ("people", "person"),
    ("phenomena", "phenomenon"),
    ("syllabi", "syllabus"),
    ("teeth", "tooth"),
    ("theses", "thesis"),
    ("vertices", "vertex"),
    ("women", "woman"),
];

/// Words ending in `s` that are already singular.
const INVARIANT: &[&str] = &["news", "series", "species", "kubernetes", "postgres", "windows"];

/// Suffixes after which a trailing `s` belongs to the base form.
const KEEP_SUFFIXES: &[&str] = &["ss", "us", "is", "ics"];

/// Sibilant endings that take `-es` in the plural.
const ES_SUFFIXES: &[&str] = &["sses", "ches", "shes", "xes", "zes"];

pub fn lemmatize(token: &str) -> String {
    if let Some((_, base)) = IRREGULAR.iter().find(|(plural, _)| *plural == token) {
        return (*base).to_string();
    }

    if token.chars().count() <= 3
        || INVARIANT.contains(&token)
        || KEEP_SUFFIXES.iter().any(|s| token.ends_with(s))
    {
        return token.to_string();
    }

    if token.chars().count() > 4 {
        if let Some(stem) = token.strip_suffix("ies") {
            return format!("{stem}y");
        }
    }

    if ES_SUFFIXES.iter().any(|s| token.ends_with(s)) {
        return token[..token.len() - 2].to_string();
    }

    match token.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_plural_loses_s() {
        assert_eq!(lemmatize("databases"), "database");
        assert_eq!(lemmatize("services"), "service");
        assert_eq!(lemmatize("masters"), "master");
    }

    #[test]
    fn test_ies_becomes_y() {
        assert_eq!(lemmatize("companies"), "company");
        assert_eq!(lemmatize("technologies"), "technology");
    }

    #[test]
    fn test_sibilant_plurals_drop_es() {
        assert_eq!(lemmatize("classes"), "class");
        assert_eq!(lemmatize("approaches"), "approach");
        assert_eq!(lemmatize("boxes"), "box");
    }

    #[test]
    fn test_irregular_table() {
        assert_eq!(lemmatize("children"), "child");
        assert_eq!(lemmatize("analyses"), "analysis");
        assert_eq!(lemmatize("women"), "woman");
    }

    #[test]
    fn test_singular_forms_unchanged() {
        for w in ["class", "status", "analysis", "physics", "aws", "python", "degree"] {
            assert_eq!(lemmatize(w), w);
        }
    }

    #[test]
    fn test_invariant_words_unchanged() {
        assert_eq!(lemmatize("kubernetes"), "kubernetes");
        assert_eq!(lemmatize("series"), "series");
    }

    #[test]
    fn test_lemmatize_is_idempotent_on_base_forms() {
        for w in ["database", "company", "class", "child", "bachelor"] {
            assert_eq!(lemmatize(&lemmatize(w)), lemmatize(w));
        }
    }
}
