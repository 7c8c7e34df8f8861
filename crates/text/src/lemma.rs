//! Rule-based English lemmatizer
//!
//! Irregular forms come from a lookup table; regular inflections
//! (`-s`, `-es`, `-ies`, `-ed`, `-ing`) are stripped with the usual
//! spelling repairs (undoubling, silent `e` restoration).

/// Irregular inflections mapped to their dictionary form
const IRREGULAR: &[(&str, &str)] = &[
    // be / have / do
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("'s", "be"),
    ("'re", "be"),
    ("'m", "be"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    ("'ve", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("doing", "do"),
    ("n't", "not"),
    ("'ll", "will"),
    ("'d", "would"),
    ("ca", "can"),
    ("wo", "will"),
    // verbs
    ("went", "go"),
    ("gone", "go"),
    ("goes", "go"),
    ("ran", "run"),
    ("came", "come"),
    ("saw", "see"),
    ("seen", "see"),
    ("took", "take"),
    ("taken", "take"),
    ("gave", "give"),
    ("given", "give"),
    ("made", "make"),
    ("said", "say"),
    ("got", "get"),
    ("gotten", "get"),
    ("knew", "know"),
    ("known", "know"),
    ("thought", "think"),
    ("told", "tell"),
    ("found", "find"),
    ("left", "leave"),
    ("felt", "feel"),
    ("kept", "keep"),
    ("began", "begin"),
    ("begun", "begin"),
    ("brought", "bring"),
    ("bought", "buy"),
    ("built", "build"),
    ("sent", "send"),
    ("spent", "spend"),
    ("stood", "stand"),
    ("understood", "understand"),
    ("wrote", "write"),
    ("written", "write"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("drank", "drink"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("met", "meet"),
    ("paid", "pay"),
    ("sold", "sell"),
    ("sat", "sit"),
    ("slept", "sleep"),
    ("won", "win"),
    ("lost", "lose"),
    ("held", "hold"),
    ("fell", "fall"),
    ("flew", "fly"),
    ("grew", "grow"),
    ("threw", "throw"),
    ("caught", "catch"),
    ("taught", "teach"),
    ("fought", "fight"),
    ("sought", "seek"),
    ("became", "become"),
    ("forgot", "forget"),
    ("forgotten", "forget"),
    ("broke", "break"),
    ("broken", "break"),
    ("woke", "wake"),
    ("led", "lead"),
    ("lay", "lie"),
    ("dying", "die"),
    ("lying", "lie"),
    ("tying", "tie"),
    ("using", "use"),
    ("created", "create"),
    ("creating", "create"),
    // nouns
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("people", "person"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("halves", "half"),
    ("wolves", "wolf"),
    ("data", "datum"),
    // adjectives
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
];

/// Words ending in an inflection-like suffix that are already base forms
const INVARIANT: &[&str] = &[
    "during", "morning", "evening", "nothing", "something", "anything", "everything",
    "ceiling", "wedding", "pudding", "building", "meeting", "bed", "red", "shed", "hundred",
    "sacred", "naked", "wicked", "news", "series", "species", "always", "perhaps", "various",
    "thus", "bus", "gas", "yes", "this", "his", "its", "physics", "mathematics",
    "analysis", "basis", "crisis", "lens", "christmas",
];

/// Lemmatize a single lowercase word
pub fn lemmatize(word: &str) -> String {
    if let Some((_, lemma)) = IRREGULAR.iter().find(|(form, _)| *form == word) {
        return (*lemma).to_string();
    }

    if INVARIANT.contains(&word) || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return word.to_string();
    }

    strip_inflection(word).unwrap_or_else(|| word.to_string())
}

fn strip_inflection(word: &str) -> Option<String> {
    let len = word.len();

    if let Some(stem) = word.strip_suffix("ies") {
        if len > 4 {
            return Some(format!("{}y", stem));
        }
    }

    if word.ends_with("sses") {
        return Some(word[..len - 2].to_string());
    }

    if let Some(stem) = word.strip_suffix("es") {
        if ["x", "z", "ch", "sh", "ss"].iter().any(|s| stem.ends_with(s)) && stem.len() >= 2 {
            return Some(stem.to_string());
        }
    }

    if let Some(stem) = word.strip_suffix("ing") {
        if stem.len() >= 2 && has_vowel(stem) {
            return Some(repair_stem(stem));
        }
        return None;
    }

    if word.ends_with("eed") {
        return None;
    }

    if let Some(stem) = word.strip_suffix("ed") {
        if stem.len() >= 3 && has_vowel(stem) {
            return Some(repair_stem(stem));
        }
        // used -> use, aged -> age
        if has_vowel(stem) {
            return Some(word[..len - 1].to_string());
        }
        return None;
    }

    if word.ends_with('s')
        && len > 3
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
    {
        return Some(word[..len - 1].to_string());
    }

    None
}

/// Undo spelling changes made when a suffix was attached
fn repair_stem(stem: &str) -> String {
    let bytes = stem.as_bytes();
    let n = bytes.len();

    // stopped -> stop, running -> run (but falling -> fall)
    if n >= 2 && bytes[n - 1] == bytes[n - 2] && is_consonant(bytes, n - 1) {
        if !matches!(bytes[n - 1], b'l' | b's' | b'z') {
            return stem[..n - 1].to_string();
        }
        return stem.to_string();
    }

    // related -> relate, enabled -> enable, organized -> organize
    let suffix_at = n >= 3 && stem.ends_with("at") && is_consonant(bytes, n - 3);
    if suffix_at || stem.ends_with("bl") || stem.ends_with("iz") {
        return format!("{}e", stem);
    }

    // produced -> produce, caused -> cause, increasing -> increase
    if stem.ends_with('c') || ends_vowel_sibilant(stem) {
        return format!("{}e", stem);
    }

    // making -> make, hoped -> hope
    if measure(stem) == 1 && ends_cvc(bytes) {
        return format!("{}e", stem);
    }

    stem.to_string()
}

fn is_consonant(bytes: &[u8], i: usize) -> bool {
    match bytes[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => i == 0 || !is_consonant(bytes, i - 1),
        _ => true,
    }
}

fn has_vowel(stem: &str) -> bool {
    let bytes = stem.as_bytes();
    (0..bytes.len()).any(|i| !is_consonant(bytes, i))
}

/// Number of vowel-consonant sequences in the stem
fn measure(stem: &str) -> usize {
    let bytes = stem.as_bytes();
    let mut count = 0;
    let mut prev_vowel = false;
    for i in 0..bytes.len() {
        let vowel = !is_consonant(bytes, i);
        if prev_vowel && !vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }
    count
}

/// Stem ends in a vowel followed by `s` or `z` (`caus`, `pleas`, `sneez`).
/// `focus` keeps its bare form.
fn ends_vowel_sibilant(stem: &str) -> bool {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    n >= 3
        && matches!(bytes[n - 1], b's' | b'z')
        && !is_consonant(bytes, n - 2)
        && !stem.ends_with("ocus")
}

/// consonant-vowel-consonant ending, last consonant not w, x or y
fn ends_cvc(bytes: &[u8]) -> bool {
    let n = bytes.len();
    n >= 3
        && is_consonant(bytes, n - 3)
        && !is_consonant(bytes, n - 2)
        && is_consonant(bytes, n - 1)
        && !matches!(bytes[n - 1], b'w' | b'x' | b'y')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irregular_forms() {
        assert_eq!(lemmatize("was"), "be");
        assert_eq!(lemmatize("were"), "be");
        assert_eq!(lemmatize("children"), "child");
        assert_eq!(lemmatize("went"), "go");
        assert_eq!(lemmatize("n't"), "not");
    }

    #[test]
    fn test_plural_nouns() {
        assert_eq!(lemmatize("cats"), "cat");
        assert_eq!(lemmatize("studies"), "study");
        assert_eq!(lemmatize("boxes"), "box");
        assert_eq!(lemmatize("classes"), "class");
        assert_eq!(lemmatize("makes"), "make");
    }

    #[test]
    fn test_progressive_forms() {
        assert_eq!(lemmatize("running"), "run");
        assert_eq!(lemmatize("making"), "make");
        assert_eq!(lemmatize("falling"), "fall");
        assert_eq!(lemmatize("jumping"), "jump");
        assert_eq!(lemmatize("eating"), "eat");
        assert_eq!(lemmatize("opening"), "open");
        assert_eq!(lemmatize("increasing"), "increase");
        assert_eq!(lemmatize("producing"), "produce");
        assert_eq!(lemmatize("creating"), "create");
        assert_eq!(lemmatize("focusing"), "focus");
        assert_eq!(lemmatize("missing"), "miss");
    }

    #[test]
    fn test_past_forms() {
        assert_eq!(lemmatize("walked"), "walk");
        assert_eq!(lemmatize("stopped"), "stop");
        assert_eq!(lemmatize("hoped"), "hope");
        assert_eq!(lemmatize("related"), "relate");
        assert_eq!(lemmatize("organized"), "organize");
        assert_eq!(lemmatize("used"), "use");
        assert_eq!(lemmatize("needed"), "need");
        assert_eq!(lemmatize("caused"), "cause");
        assert_eq!(lemmatize("increased"), "increase");
        assert_eq!(lemmatize("released"), "release");
        assert_eq!(lemmatize("pleased"), "please");
        assert_eq!(lemmatize("produced"), "produce");
        assert_eq!(lemmatize("created"), "create");
        assert_eq!(lemmatize("closed"), "close");
        assert_eq!(lemmatize("treated"), "treat");
    }

    #[test]
    fn test_base_forms_untouched() {
        assert_eq!(lemmatize("bring"), "bring");
        assert_eq!(lemmatize("during"), "during");
        assert_eq!(lemmatize("need"), "need");
        assert_eq!(lemmatize("class"), "class");
        assert_eq!(lemmatize("bus"), "bus");
        assert_eq!(lemmatize("fox"), "fox");
        assert_eq!(lemmatize("42"), "42");
    }
}
