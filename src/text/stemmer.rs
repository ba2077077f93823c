//! Porter stemming algorithm.
//!
//! Straightforward implementation of the suffix-stripping transform
//! described in Porter, "An algorithm for suffix stripping", Program,
//! Vol 14 no. 3 pp 130-137, July 1980. Used as an optional normalization
//! pass between the tokenizer and the index; it is off by default.

/// Porter stemmer for lower-cased English words.
///
/// Words shorter than the configured minimum length are returned unchanged;
/// stemming very short words loses more than it gains.
#[derive(Debug, Clone)]
pub struct Stemmer {
    min_length: usize,
}

impl Default for Stemmer {
    fn default() -> Self {
        Self { min_length: 3 }
    }
}

impl Stemmer {
    /// Creates a stemmer with the default minimum word length of 3.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a stemmer that leaves words shorter than `min_length`
    /// untouched.
    pub fn with_min_length(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Stems a single word.
    ///
    /// The word is lower-cased first; the five Porter steps are then applied
    /// in order.
    pub fn stem(&self, word: &str) -> String {
        let word = word.to_lowercase();
        if word.chars().count() < self.min_length {
            return word;
        }

        let mut buffer = StemBuffer {
            chars: word.chars().collect(),
        };
        buffer.step1();
        buffer.step2();
        buffer.step3();
        buffer.step4();
        buffer.step5();

        buffer.chars.into_iter().collect()
    }
}

/// Working buffer for one stemming pass.
struct StemBuffer {
    chars: Vec<char>,
}

impl StemBuffer {
    fn len(&self) -> usize {
        self.chars.len()
    }

    /// A character is a consonant unless it is a plain vowel, or a `y`
    /// preceded by a consonant.
    fn is_consonant(&self, idx: usize) -> bool {
        match self.chars[idx] {
            'a' | 'e' | 'i' | 'o' | 'u' => false,
            'y' => idx == 0 || !self.is_consonant(idx - 1),
            _ => true,
        }
    }

    /// Porter's measure m: the number of vowel-to-consonant transitions in
    /// the buffer, ignoring the trailing `end_length` characters.
    fn measure(&self, end_length: usize) -> usize {
        let end_idx = self.len() - end_length;
        let mut i = 0;
        loop {
            if i == end_idx {
                return 0;
            }
            if !self.is_consonant(i) {
                break;
            }
            i += 1;
        }

        let mut m = 0;
        loop {
            loop {
                if i == end_idx {
                    return m;
                }
                if self.is_consonant(i) {
                    break;
                }
                i += 1;
            }
            m += 1;
            loop {
                if i == end_idx {
                    return m;
                }
                if !self.is_consonant(i) {
                    break;
                }
                i += 1;
            }
        }
    }

    fn ends_with(&self, suffix: &str) -> bool {
        let n = suffix.len();
        if self.len() < n {
            return false;
        }
        self.chars[self.len() - n..].iter().copied().eq(suffix.chars())
    }

    /// Whether a vowel occurs before the trailing `end_length` characters.
    fn contains_vowel(&self, end_length: usize) -> bool {
        (0..self.len().saturating_sub(end_length)).any(|i| !self.is_consonant(i))
    }

    /// Whether the stem before the trailing `end_length` characters ends in
    /// a doubled consonant.
    fn double_consonant(&self, end_length: usize) -> bool {
        if self.len() < end_length + 2 {
            return false;
        }
        let end_idx = self.len() - end_length - 1;
        self.chars[end_idx] == self.chars[end_idx - 1] && self.is_consonant(end_idx)
    }

    /// Whether the stem before the trailing `end_length` characters ends
    /// consonant-vowel-consonant, the final consonant not being w, x, or y.
    fn ends_with_cvc(&self, end_length: usize) -> bool {
        if self.len() < end_length + 3 {
            return false;
        }
        let end_idx = self.len() - end_length - 1;
        self.is_consonant(end_idx - 2)
            && !self.is_consonant(end_idx - 1)
            && self.is_consonant(end_idx)
            && !matches!(self.chars[end_idx], 'w' | 'x' | 'y')
    }

    /// Drops the last `n` characters.
    fn shorten(&mut self, n: usize) {
        let new_len = self.len() - n;
        self.chars.truncate(new_len);
    }

    /// Replaces the trailing `suffix_len` characters with `replacement`.
    fn replace_suffix(&mut self, suffix_len: usize, replacement: &str) {
        self.shorten(suffix_len);
        self.chars.extend(replacement.chars());
    }

    /// Step 1: plurals and -ed/-ing, with fix-ups restoring a final `e`
    /// where stripping exposed a malformed stem.
    fn step1(&mut self) {
        if self.ends_with("sses") {
            self.shorten(2);
        } else if self.ends_with("ies") {
            self.shorten(2);
        } else if self.ends_with("s") && !self.ends_with("ss") {
            self.shorten(1);
        }

        if self.ends_with("eed") {
            if self.measure(3) > 0 {
                self.shorten(1);
            }
        } else if self.ends_with("ed") {
            if self.contains_vowel(2) {
                self.shorten(2);
                self.step1_fixup();
            }
        } else if self.ends_with("ing") {
            if self.contains_vowel(3) {
                self.shorten(3);
                self.step1_fixup();
            }
        }

        if self.ends_with("y") && self.contains_vowel(1) {
            let last = self.len() - 1;
            self.chars[last] = 'i';
        }
    }

    fn step1_fixup(&mut self) {
        if self.ends_with("at") || self.ends_with("bl") || self.ends_with("iz") {
            self.chars.push('e');
        } else if self.double_consonant(0)
            && !self.ends_with("l")
            && !self.ends_with("s")
            && !self.ends_with("z")
        {
            self.shorten(1);
        } else if self.measure(0) == 1 && self.ends_with_cvc(0) {
            self.chars.push('e');
        }
    }

    /// Step 2: double-suffix reductions, applied when the stem has a
    /// non-zero measure.
    fn step2(&mut self) {
        const RULES: [(&str, &str); 20] = [
            ("ational", "ate"),
            ("tional", "tion"),
            ("enci", "ence"),
            ("anci", "ance"),
            ("izer", "ize"),
            ("abli", "able"),
            ("alli", "al"),
            ("entli", "ent"),
            ("eli", "e"),
            ("ousli", "ous"),
            ("ization", "ize"),
            ("ation", "ate"),
            ("ator", "ate"),
            ("alism", "al"),
            ("iveness", "ive"),
            ("fulness", "ful"),
            ("ousness", "ous"),
            ("aliti", "al"),
            ("iviti", "ive"),
            ("biliti", "ble"),
        ];
        for (suffix, replacement) in RULES {
            if self.ends_with(suffix) && self.measure(suffix.len()) > 0 {
                self.replace_suffix(suffix.len(), replacement);
                return;
            }
        }
    }

    /// Step 3: -ic-, -full, -ness and similar.
    fn step3(&mut self) {
        const RULES: [(&str, usize); 7] = [
            ("icate", 3),
            ("ative", 5),
            ("alize", 3),
            ("iciti", 3),
            ("ical", 2),
            ("ful", 3),
            ("ness", 4),
        ];
        for (suffix, strip) in RULES {
            if self.ends_with(suffix) && self.measure(suffix.len()) > 0 {
                self.shorten(strip);
                return;
            }
        }
    }

    /// Step 4: strips remaining standard suffixes from stems with measure
    /// above one. The first matching suffix ends the step whether or not
    /// the measure condition lets it strip.
    fn step4(&mut self) {
        const SUFFIXES: [&str; 19] = [
            "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent",
            "ion", "ou", "ism", "ate", "iti", "ous", "ive", "ize",
        ];
        for suffix in SUFFIXES {
            if self.ends_with(suffix) {
                if suffix == "ion" {
                    if self.measure(3) > 1 && (self.ends_with("sion") || self.ends_with("tion")) {
                        self.shorten(3);
                    }
                } else if self.measure(suffix.len()) > 1 {
                    self.shorten(suffix.len());
                }
                return;
            }
        }
    }

    /// Step 5: final -e removal and -ll reduction.
    fn step5(&mut self) {
        if self.ends_with("e") {
            let m = self.measure(1);
            if m > 1 || (m == 1 && !self.ends_with_cvc(1)) {
                self.shorten(1);
            }
        }

        if self.ends_with("l") && self.measure(1) > 1 && self.double_consonant(0) {
            self.shorten(1);
        }
    }
}
