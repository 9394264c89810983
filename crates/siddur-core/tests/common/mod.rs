use siddur_core::{
    CivilDate, ClassifierConfig, ConditionClassifier, ConditionContext, HebrewCalendar,
};

/// Parse a `YYYY-MM-DD` literal
#[allow(dead_code)]
pub fn date(s: &str) -> CivilDate {
    s.parse().expect("test date literal")
}

#[allow(dead_code)]
pub fn diaspora() -> ConditionClassifier<HebrewCalendar> {
    ConditionClassifier::standard(ClassifierConfig::diaspora()).expect("default config is valid")
}

#[allow(dead_code)]
pub fn local() -> ConditionClassifier<HebrewCalendar> {
    ConditionClassifier::standard(ClassifierConfig::local()).expect("default config is valid")
}

/// Classify a date with diaspora rules
#[allow(dead_code)]
pub fn classify(s: &str) -> ConditionContext {
    diaspora().classify(&date(s)).expect("date classifies")
}
