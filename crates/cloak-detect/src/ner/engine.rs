//! Lexicon-and-heuristic named-entity recognizer.
//!
//! Candidate entities are anchored on high-precision cues: honorifics and
//! given names for persons, suffix words for organizations, a gazetteer
//! for locations, month names for dates. Each pass claims its words so a
//! later pass cannot re-label them.

use cloak_core::errors::{CloakError, CloakResult};
use cloak_core::offset::CharIndex;
use regex::Regex;
use rustc_hash::FxHashSet;

use super::lexicon;

const URL_PATTERN: &str = r"\bhttps?://[^\s«»]+|\bwww\.[^\s«»]+";
const TIME_PATTERN: &str = r"\b\d{1,2}:\d{2}(?::\d{2})?\b";

/// A recognized entity with its upstream-style label and char-offset span.
#[derive(Debug, Clone)]
pub struct RawEntity {
    pub label: &'static str,
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub score: f64,
}

/// One tokenized word with byte and character offsets.
struct Word<'t> {
    text: &'t str,
    byte_start: usize,
    byte_end: usize,
    char_start: usize,
    char_end: usize,
}

impl Word<'_> {
    /// Capitalized like a proper noun: initial uppercase, some lowercase.
    fn is_name_cased(&self) -> bool {
        let mut chars = self.text.chars();
        match chars.next() {
            Some(first) if first.is_uppercase() => chars.any(|c| c.is_lowercase()),
            _ => false,
        }
    }

    fn is_small_number(&self) -> bool {
        !self.text.is_empty()
            && self.text.len() <= 4
            && self.text.bytes().all(|b| b.is_ascii_digit())
    }
}

pub struct NerEngine {
    honorifics: FxHashSet<&'static str>,
    given_names: FxHashSet<&'static str>,
    org_suffixes: FxHashSet<&'static str>,
    gpe_regions: FxHashSet<&'static str>,
    cities: FxHashSet<&'static str>,
    city_pairs: FxHashSet<(&'static str, &'static str)>,
    nrp_terms: FxHashSet<&'static str>,
    months: FxHashSet<&'static str>,
    url_re: Regex,
    time_re: Regex,
}

impl NerEngine {
    /// Build the recognizer for a language. Only English is packaged;
    /// any other language tag is a load failure.
    pub fn load(language: &str) -> CloakResult<Self> {
        if language != "en" {
            return Err(CloakError::ModelLoad {
                message: format!("no NER model packaged for language '{language}'"),
            });
        }
        let url_re = Regex::new(URL_PATTERN).map_err(|e| CloakError::ModelLoad {
            message: format!("url pattern: {e}"),
        })?;
        let time_re = Regex::new(TIME_PATTERN).map_err(|e| CloakError::ModelLoad {
            message: format!("time pattern: {e}"),
        })?;
        Ok(Self {
            honorifics: lexicon::HONORIFICS.iter().copied().collect(),
            given_names: lexicon::GIVEN_NAMES.iter().copied().collect(),
            org_suffixes: lexicon::ORG_SUFFIXES.iter().copied().collect(),
            gpe_regions: lexicon::GPE_REGIONS.iter().copied().collect(),
            cities: lexicon::CITIES.iter().copied().collect(),
            city_pairs: lexicon::CITY_PAIRS.iter().copied().collect(),
            nrp_terms: lexicon::NRP_TERMS.iter().copied().collect(),
            months: lexicon::MONTHS.iter().copied().collect(),
            url_re,
            time_re,
        })
    }

    /// Recognize entities in `text`. Spans are character offsets.
    pub fn analyze(&self, text: &str) -> Vec<RawEntity> {
        let index = CharIndex::new(text);
        let words = tokenize(text);
        let mut claimed = vec![false; words.len()];
        let mut entities = Vec::new();

        self.pass_urls(text, &index, &words, &mut claimed, &mut entities);
        self.pass_times(text, &index, &mut entities);
        self.pass_honorifics(text, &words, &mut claimed, &mut entities);
        self.pass_orgs(text, &words, &mut claimed, &mut entities);
        self.pass_city_pairs(text, &words, &mut claimed, &mut entities);
        self.pass_regions(&words, &mut claimed, &mut entities);
        self.pass_given_names(text, &words, &mut claimed, &mut entities);
        self.pass_nrp(&words, &mut claimed, &mut entities);
        self.pass_dates(text, &words, &mut claimed, &mut entities);

        entities.sort_by_key(|e| e.start);
        entities
    }

    fn pass_urls(
        &self,
        text: &str,
        index: &CharIndex,
        words: &[Word<'_>],
        claimed: &mut [bool],
        out: &mut Vec<RawEntity>,
    ) {
        for m in self.url_re.find_iter(text) {
            let start = index.byte_to_char(m.start());
            let end = index.byte_to_char(m.end());
            for (i, w) in words.iter().enumerate() {
                if w.char_start < end && w.char_end > start {
                    claimed[i] = true;
                }
            }
            out.push(RawEntity {
                label: "URL",
                text: m.as_str().to_string(),
                start,
                end,
                score: 0.6,
            });
        }
    }

    fn pass_times(&self, text: &str, index: &CharIndex, out: &mut Vec<RawEntity>) {
        for m in self.time_re.find_iter(text) {
            out.push(RawEntity {
                label: "TIME",
                text: m.as_str().to_string(),
                start: index.byte_to_char(m.start()),
                end: index.byte_to_char(m.end()),
                score: 0.65,
            });
        }
    }

    fn pass_honorifics(
        &self,
        text: &str,
        words: &[Word<'_>],
        claimed: &mut [bool],
        out: &mut Vec<RawEntity>,
    ) {
        let mut i = 0;
        while i < words.len() {
            if claimed[i] || !self.honorifics.contains(words[i].text) {
                i += 1;
                continue;
            }
            let mut last = None;
            let mut j = i + 1;
            while j < words.len() && j <= i + 2 && !claimed[j] && words[j].is_name_cased() {
                last = Some(j);
                j += 1;
            }
            if let Some(last) = last {
                claimed[i..=last].iter_mut().for_each(|c| *c = true);
                out.push(span_entity(text, words, i + 1, last, "PER", 0.85));
            }
            i = j;
        }
    }

    fn pass_orgs(
        &self,
        text: &str,
        words: &[Word<'_>],
        claimed: &mut [bool],
        out: &mut Vec<RawEntity>,
    ) {
        for i in 0..words.len() {
            if claimed[i] || !self.org_suffixes.contains(words[i].text) {
                continue;
            }
            let mut first = i;
            while first > 0
                && i - first < 4
                && !claimed[first - 1]
                && words[first - 1].is_name_cased()
                && !self.honorifics.contains(words[first - 1].text)
            {
                first -= 1;
            }
            if first < i {
                claimed[first..=i].iter_mut().for_each(|c| *c = true);
                out.push(span_entity(text, words, first, i, "ORG", 0.85));
            }
        }
    }

    fn pass_city_pairs(
        &self,
        text: &str,
        words: &[Word<'_>],
        claimed: &mut [bool],
        out: &mut Vec<RawEntity>,
    ) {
        for i in 0..words.len().saturating_sub(1) {
            if claimed[i] || claimed[i + 1] {
                continue;
            }
            if self.city_pairs.contains(&(words[i].text, words[i + 1].text)) {
                claimed[i] = true;
                claimed[i + 1] = true;
                out.push(span_entity(text, words, i, i + 1, "LOC", 0.75));
            }
        }
    }

    fn pass_regions(&self, words: &[Word<'_>], claimed: &mut [bool], out: &mut Vec<RawEntity>) {
        for (i, w) in words.iter().enumerate() {
            if claimed[i] {
                continue;
            }
            if self.gpe_regions.contains(w.text) {
                claimed[i] = true;
                out.push(word_entity(w, "GPE", 0.75));
            } else if self.cities.contains(w.text) {
                claimed[i] = true;
                out.push(word_entity(w, "LOC", 0.7));
            }
        }
    }

    fn pass_given_names(
        &self,
        text: &str,
        words: &[Word<'_>],
        claimed: &mut [bool],
        out: &mut Vec<RawEntity>,
    ) {
        let mut i = 0;
        while i < words.len() {
            if claimed[i] || !words[i].is_name_cased() || !self.given_names.contains(words[i].text)
            {
                i += 1;
                continue;
            }
            let surname = i + 1 < words.len()
                && !claimed[i + 1]
                && words[i + 1].is_name_cased()
                && !self.org_suffixes.contains(words[i + 1].text)
                && !self.months.contains(words[i + 1].text);
            if surname {
                claimed[i] = true;
                claimed[i + 1] = true;
                out.push(span_entity(text, words, i, i + 1, "PER", 0.8));
                i += 2;
            } else {
                claimed[i] = true;
                out.push(word_entity(&words[i], "PER", 0.6));
                i += 1;
            }
        }
    }

    fn pass_nrp(&self, words: &[Word<'_>], claimed: &mut [bool], out: &mut Vec<RawEntity>) {
        for (i, w) in words.iter().enumerate() {
            if !claimed[i] && self.nrp_terms.contains(w.text) {
                claimed[i] = true;
                out.push(word_entity(w, "NORP", 0.7));
            }
        }
    }

    fn pass_dates(
        &self,
        text: &str,
        words: &[Word<'_>],
        claimed: &mut [bool],
        out: &mut Vec<RawEntity>,
    ) {
        for i in 0..words.len() {
            if claimed[i] || !self.months.contains(words[i].text) {
                continue;
            }
            let mut first = i;
            let mut last = i;
            if i > 0 && !claimed[i - 1] && words[i - 1].is_small_number() {
                first = i - 1;
            }
            let mut j = i + 1;
            while j < words.len() && j <= i + 2 && !claimed[j] && words[j].is_small_number() {
                last = j;
                j += 1;
            }
            // A bare month name is not a date.
            if first == i && last == i {
                continue;
            }
            claimed[first..=last].iter_mut().for_each(|c| *c = true);
            out.push(span_entity(text, words, first, last, "DATE", 0.65));
        }
    }
}

fn tokenize(text: &str) -> Vec<Word<'_>> {
    let mut words = Vec::new();
    let mut current: Option<(usize, usize)> = None; // (byte_start, char_start)
    let mut char_offset = 0;
    for (byte_offset, c) in text.char_indices() {
        if c.is_alphanumeric() {
            if current.is_none() {
                current = Some((byte_offset, char_offset));
            }
        } else if let Some((byte_start, char_start)) = current.take() {
            words.push(Word {
                text: &text[byte_start..byte_offset],
                byte_start,
                byte_end: byte_offset,
                char_start,
                char_end: char_offset,
            });
        }
        char_offset += 1;
    }
    if let Some((byte_start, char_start)) = current {
        words.push(Word {
            text: &text[byte_start..],
            byte_start,
            byte_end: text.len(),
            char_start,
            char_end: char_offset,
        });
    }
    words
}

fn word_entity(word: &Word<'_>, label: &'static str, score: f64) -> RawEntity {
    RawEntity {
        label,
        text: word.text.to_string(),
        start: word.char_start,
        end: word.char_end,
        score,
    }
}

fn span_entity(
    text: &str,
    words: &[Word<'_>],
    first: usize,
    last: usize,
    label: &'static str,
    score: f64,
) -> RawEntity {
    let first = &words[first];
    let last = &words[last];
    RawEntity {
        label,
        text: text[first.byte_start..last.byte_end].to_string(),
        start: first.char_start,
        end: last.char_end,
        score,
    }
}
