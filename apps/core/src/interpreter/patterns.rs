//! Pattern tables for entity detection.
//!
//! Each table is an ordered list of (matcher, canonical value) pairs compiled
//! once on first use. Table order is the order canonical values are appended
//! to the result, so reordering a table changes output.
//!
//! All matchers run against normalized (trimmed, lowercased) text.

use regex::Regex;
use std::sync::LazyLock;

/// A single entry of a pattern table.
#[derive(Debug, Clone)]
pub struct EntityPattern<V> {
    pub matcher: Regex,
    pub value: V,
}

/// Entry type for every category whose canonical value is a single label.
pub type CanonicalPattern = EntityPattern<&'static str>;

/// Canonical value of a profession cue.
///
/// A combined cue such as "np/pa" stands for more than one profession.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfessionValue {
    One(&'static str),
    Many(&'static [&'static str]),
}

impl ProfessionValue {
    /// Canonical labels in the order they are merged.
    pub fn values(&self) -> &[&'static str] {
        match self {
            ProfessionValue::One(value) => std::slice::from_ref(value),
            ProfessionValue::Many(values) => values,
        }
    }
}

/// Canonical lowercase month names, January first.
pub const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

// Panicking is acceptable here: every pattern is a literal checked by test_tables_compile
fn pattern<V>(re: &str, value: V) -> EntityPattern<V> {
    EntityPattern {
        matcher: Regex::new(re).unwrap_or_else(|e| panic!("Invalid regex {:?}: {}", re, e)),
        value,
    }
}

fn regex(re: &str) -> Regex {
    Regex::new(re).unwrap_or_else(|e| panic!("Invalid regex {:?}: {}", re, e))
}

pub static SPECIALTY_PATTERNS: LazyLock<Vec<CanonicalPattern>> = LazyLock::new(|| {
    vec![
        pattern(r"\bdermatolog(?:y|ist|ists|ical)\b|\bderm\b", "Dermatology"),
        pattern(r"\bcardiolog(?:y|ist|ists)\b|\bcardiac\b", "Cardiology"),
        pattern(r"\boncolog(?:y|ist|ists)\b|\bcancer specialists?\b", "Oncology"),
        pattern(r"\bneurolog(?:y|ist|ists)\b", "Neurology"),
        pattern(r"\bp(?:a)?ediatric(?:s|ian|ians)?\b", "Pediatrics"),
        pattern(r"\bpsychiatr(?:y|ist|ists|ic)\b", "Psychiatry"),
        pattern(r"\bendocrinolog(?:y|ist|ists)\b", "Endocrinology"),
        pattern(r"\bgastroenterolog(?:y|ist|ists)\b|\bgi\b", "Gastroenterology"),
        pattern(r"\brheumatolog(?:y|ist|ists)\b", "Rheumatology"),
        pattern(r"\bophthalmolog(?:y|ist|ists)\b", "Ophthalmology"),
        pattern(r"\borthop(?:a)?edic(?:s)?\b|\borthop(?:a)?edists?\b", "Orthopedics"),
        pattern(r"\bradiolog(?:y|ist|ists)\b", "Radiology"),
        pattern(r"\bpulmonolog(?:y|ist|ists)\b", "Pulmonology"),
        pattern(r"\bnephrolog(?:y|ist|ists)\b", "Nephrology"),
        pattern(r"\burolog(?:y|ist|ists)\b", "Urology"),
        pattern(r"\bh(?:a)?ematolog(?:y|ist|ists)\b", "Hematology"),
        pattern(
            r"\ballerg(?:y|ist|ists)\b|\bimmunolog(?:y|ist|ists)\b",
            "Allergy & Immunology",
        ),
        pattern(
            r"\bob/?gyn\b|\bobstetric(?:s|ian|ians)\b|\bgyn(?:a)?ecolog(?:y|ist|ists)\b",
            "Obstetrics & Gynecology",
        ),
        pattern(
            r"\bfamily (?:medicine|practice|physicians?|doctors?)\b",
            "Family Medicine",
        ),
        pattern(r"\binternal medicine\b|\binternists?\b", "Internal Medicine"),
        pattern(
            r"\bemergency (?:medicine|physicians?|doctors?)\b",
            "Emergency Medicine",
        ),
        pattern(r"\binfectious diseases?\b", "Infectious Disease"),
        pattern(r"\ban(?:a)?esthesiolog(?:y|ist|ists)\b", "Anesthesiology"),
    ]
});

const NP_PA: &[&str] = &["Nurse Practitioner", "Physician Assistant"];

pub static PROFESSION_PATTERNS: LazyLock<Vec<EntityPattern<ProfessionValue>>> =
    LazyLock::new(|| {
        vec![
            pattern(
                r"\bphysicians?\b|\bdoctors?\b|\bmds?\b",
                ProfessionValue::One("Physician"),
            ),
            pattern(
                r"\bnurse practitioners?\b|\bnps?\b",
                ProfessionValue::One("Nurse Practitioner"),
            ),
            pattern(
                r"\bphysician assistants?\b|\bphysician associates?\b|\bpas?\b",
                ProfessionValue::One("Physician Assistant"),
            ),
            pattern(
                r"\bnps?\s*/\s*pas?\b|\bnps?\s+(?:and|&)\s+pas?\b|\badvanced practice (?:providers?|clinicians?)\b",
                ProfessionValue::Many(NP_PA),
            ),
            pattern(
                r"\bregistered nurses?\b|\brns?\b",
                ProfessionValue::One("Registered Nurse"),
            ),
            pattern(r"\bpharmacists?\b|\bpharmds?\b", ProfessionValue::One("Pharmacist")),
        ]
    });

pub static CAMPAIGN_PATTERNS: LazyLock<Vec<CanonicalPattern>> = LazyLock::new(|| {
    vec![
        pattern(r"\bnewsletters?\b", "newsletter"),
        pattern(r"\bwebinars?\b", "webinar"),
        pattern(r"\bsurveys?\b", "survey"),
        pattern(r"\bproduct launch(?:es)?\b|\blaunch campaigns?\b", "product launch"),
        pattern(
            r"\bevent invit(?:e|es|ation|ations)\b|\binvitations?\b",
            "event invitation",
        ),
        pattern(r"\bcme\b|\bcontinuing medical education\b", "cme"),
        pattern(r"\bconferences?\b|\bcongress(?:es)?\b", "conference"),
        pattern(r"\bannouncements?\b", "announcement"),
        pattern(r"\bdigests?\b", "digest"),
    ]
});

pub static METRIC_PATTERNS: LazyLock<Vec<CanonicalPattern>> = LazyLock::new(|| {
    vec![
        pattern(r"\bengagement(?: scores?)?\b|\bengaged\b", "engagement_score"),
        pattern(r"\bopen(?:ing)? rates?\b|\bopens\b|\bopened\b", "open_rate"),
        pattern(
            r"\bclick(?:-through|through)? rates?\b|\bclicks?\b|\bclicked\b|\bctr\b",
            "click_rate",
        ),
        pattern(
            r"\bopen(?:ing)? (?:times?|hours?)\b|\btime of (?:day|open)\b",
            "open_time",
        ),
        pattern(
            r"\brespon(?:se|d) times?\b|\btime to (?:respond|response|click)\b",
            "response_time",
        ),
        pattern(
            r"\bunsubscrib(?:e|es|ed|ing)\b|\bopt[- ]outs?\b",
            "unsubscribe_rate",
        ),
        pattern(r"\bbounce(?:s|d| rates?)?\b", "bounce_rate"),
    ]
});

pub static TOPIC_PATTERNS: LazyLock<Vec<CanonicalPattern>> = LazyLock::new(|| {
    vec![
        pattern(r"\bclinical trials?\b|\btrial (?:data|results)\b", "Clinical Trials"),
        pattern(r"\btreatment guidelines?\b|\bguidelines?\b", "Treatment Guidelines"),
        pattern(r"\bdrug safety\b|\bsafety\b|\badverse events?\b", "Drug Safety"),
        pattern(r"\bpatient education\b|\bpatient resources?\b", "Patient Education"),
        pattern(
            r"\bproduct info(?:rmation)?\b|\bprescribing information\b|\bdosing\b",
            "Product Information",
        ),
        pattern(r"\bcase stud(?:y|ies)\b", "Case Studies"),
        pattern(r"\bresearch\b|\bpublications?\b", "Research"),
        pattern(r"\bdisease awareness\b|\bawareness\b", "Disease Awareness"),
        pattern(r"\bmedical news\b|\bnews\b", "Medical News"),
    ]
});

/// Practitioner nouns ("dermatologist", "cardiologists") that steer intent.
///
/// Field names ("dermatology") are entity cues only and are not listed here.
pub static SPECIALIST_NOUNS: LazyLock<Regex> = LazyLock::new(|| {
    regex(
        r"\b(?:dermatologist|cardiologist|oncologist|neurologist|pediatrician|psychiatrist|endocrinologist|gastroenterologist|rheumatologist|ophthalmologist|orthopedist|radiologist|pulmonologist|nephrologist|urologist|hematologist|allergist|immunologist|obstetrician|gynecologist|internist|anesthesiologist)s?\b",
    )
});

pub static MONTH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    regex(r"\b(january|february|march|april|may|june|july|august|september|october|november|december)\b")
});

pub static YEAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| regex(r"\b(20\d{2})\b"));

pub static QUARTER_PATTERN: LazyLock<Regex> = LazyLock::new(|| regex(r"\bq([1-4])\b"));

pub static MONTH_RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let month = r"(january|february|march|april|may|june|july|august|september|october|november|december)";
    regex(&format!(r"\b{month}\s*(?:to|-)\s*{month}\b"))
});

pub static DEPLOYMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| regex(r"\bdeployment\s*#?\s*([1-3])\b"));

pub static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| regex(r"[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}"));

pub static LIMIT_PATTERN: LazyLock<Regex> = LazyLock::new(|| regex(r"(?i)top\s+(\d+)"));
