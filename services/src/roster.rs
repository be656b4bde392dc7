//! The fixed class roster and its orthographic variant table.
//!
//! Students sometimes type their name with simplified characters where the
//! roster records traditional ones (or the other way round). The variant
//! table lists every alternate spelling accepted for a canonical name.
//! Matching is a single lookup: a variant of a variant is not followed.

use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashSet};

/// Canonical spellings, in roster order.
pub const STUDENTS: [&str; 23] = [
    "薛舒文", "黄玉婷", "周騫騫", "林雨晴", "王睿清",
    "朱家緯", "蔡姿穎", "茅懋", "陈曦", "徐若熒",
    "许如清", "徐淑潔", "朱沅珊", "洪佳逸", "孟楨璽",
    "金旭沢", "刘浩然", "陈紫彤", "唐韻茜", "王雨桐",
    "刘佳艳", "安书雯", "姚奕晨",
];

/// Accepted alternate spellings per canonical name.
pub const VARIANTS: &[(&str, &[&str])] = &[
    ("周騫騫", &["周骞骞"]),
    ("蔡姿穎", &["蔡姿颖"]),
    ("唐韻茜", &["唐韵茜"]),
    ("孟楨璽", &["孟桢玺", "孟祯玺"]),
    ("金旭沢", &["金旭泽"]),
    ("徐若熒", &["徐若荧"]),
    ("徐淑潔", &["徐淑洁"]),
    ("朱家緯", &["朱家纬"]),
    ("刘浩然", &["劉浩然"]),
    ("刘佳艳", &["劉佳艳", "劉佳豔"]),
    ("陈曦", &["陳曦"]),
    ("陈紫彤", &["陳紫彤"]),
    ("许如清", &["許如清"]),
    ("安书雯", &["安書雯"]),
];

static BUILTIN: Lazy<Roster> = Lazy::new(|| {
    Roster::new(
        STUDENTS.iter().map(|s| s.to_string()),
        VARIANTS.iter().map(|(canonical, variants)| {
            (
                canonical.to_string(),
                variants.iter().map(|v| v.to_string()).collect(),
            )
        }),
    )
});

#[derive(Debug, Clone)]
pub struct Roster {
    students: Vec<String>,
    variants: BTreeMap<String, Vec<String>>,
}

impl Roster {
    /// Builds a roster. Duplicate canonical names keep their first position.
    pub fn new<S, V>(students: S, variants: V) -> Self
    where
        S: IntoIterator<Item = String>,
        V: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut seen = HashSet::new();
        let students = students
            .into_iter()
            .filter(|name| seen.insert(name.clone()))
            .collect();

        let mut table: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (canonical, alternates) in variants {
            let entry = table.entry(canonical).or_default();
            for alt in alternates {
                if !entry.contains(&alt) {
                    entry.push(alt);
                }
            }
        }

        Self {
            students,
            variants: table,
        }
    }

    /// The process-wide roster.
    pub fn builtin() -> &'static Roster {
        &BUILTIN
    }

    pub fn students(&self) -> &[String] {
        &self.students
    }

    pub fn variants(&self) -> &BTreeMap<String, Vec<String>> {
        &self.variants
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn contains(&self, canonical: &str) -> bool {
        self.students.iter().any(|s| s == canonical)
    }

    /// True iff `candidate` is `canonical` itself or one of its listed variants.
    pub fn is_variant_of(&self, candidate: &str, canonical: &str) -> bool {
        candidate == canonical
            || self
                .variants
                .get(canonical)
                .is_some_and(|alts| alts.iter().any(|a| a == candidate))
    }

    /// The first roster student (in roster order) that `candidate` spells.
    pub fn canonical_for(&self, candidate: &str) -> Option<&str> {
        self.students
            .iter()
            .find(|canonical| self.is_variant_of(candidate, canonical))
            .map(String::as_str)
    }
}
