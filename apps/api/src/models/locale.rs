use serde::{Deserialize, Serialize};

use crate::models::profile::Language;

/// One string per supported output language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub english: String,
    pub hindi: String,
    pub tamil: String,
    pub telugu: String,
    pub kannada: String,
}

impl LocalizedText {
    pub fn new(english: &str, hindi: &str, tamil: &str, telugu: &str, kannada: &str) -> Self {
        Self {
            english: english.to_string(),
            hindi: hindi.to_string(),
            tamil: tamil.to_string(),
            telugu: telugu.to_string(),
            kannada: kannada.to_string(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::English => &self.english,
            Language::Hindi => &self.hindi,
            Language::Tamil => &self.tamil,
            Language::Telugu => &self.telugu,
            Language::Kannada => &self.kannada,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Language, &str)> {
        Language::ALL.into_iter().map(move |lang| (lang, self.get(lang)))
    }
}
