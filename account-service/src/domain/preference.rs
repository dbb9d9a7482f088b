use serde::{Deserialize, Serialize};

use crate::domain::Language;

#[derive(Deserialize, Serialize, Debug)]
pub struct LanguagePreferenceBody {
    pub language: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct LanguagePreferenceResponse {
    pub language: Language,
    pub rtl: bool,
}

impl From<Language> for LanguagePreferenceResponse {
    fn from(language: Language) -> Self {
        LanguagePreferenceResponse {
            language,
            rtl: language.is_rtl(),
        }
    }
}
