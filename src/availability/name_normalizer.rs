//! Canonical ingredient/inventory names for matching.

/// Words ending in `s` that are not plurals, or whose singular would be wrong.
const PLURAL_EXCEPTIONS: &[&str] = &[
    "molasses", "hummus", "asparagus", "couscous", "swiss", "grits", "citrus", "lemongrass",
    "bass", "watercress", "schnapps", "series", "species",
];

/// Singulars ending in `ie`, whose plural would otherwise fall into the `ies -> y` rule.
const IE_SINGULARS: &[&str] = &[
    "cookie", "pie", "brownie", "smoothie", "veggie", "calorie", "hoagie", "sweetie", "birdie",
    "tie", "genie", "pixie", "movie", "beanie", "rookie", "prairie", "zombie",
];

pub fn normalize_name(name: &str) -> String {
    let lowered = name.to_lowercase().replace(['-', '_'], " ");
    let stripped = lowered.trim_matches(|c: char| !c.is_alphanumeric());
    let mut words: Vec<String> = stripped.split_whitespace().map(str::to_string).collect();

    if let Some(last) = words.last_mut() {
        *last = singularize(last);
    }
    words.join(" ")
}

fn singularize(word: &str) -> String {
    if word.chars().count() <= 3 || PLURAL_EXCEPTIONS.contains(&word) {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("ies") {
        let singular = format!("{}ie", stem);
        if IE_SINGULARS.contains(&singular.as_str()) {
            return singular;
        }
        return format!("{}y", stem);
    }
    if let Some(stem) = word.strip_suffix("es") {
        if ["o", "ch", "sh", "x", "z", "ss"].iter().any(|ending| stem.ends_with(ending)) {
            return stem.to_string();
        }
    }
    if word.ends_with('s') && !(word.ends_with("ss") || word.ends_with("us") || word.ends_with("is")) {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}
