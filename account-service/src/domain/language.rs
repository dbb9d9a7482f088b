use serde::{Deserialize, Serialize};

/// Interface language picked in the site's language selector.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
    He,
}

impl Language {
    pub fn parse(code: &str) -> Result<Language, String> {
        match code {
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            "he" => Ok(Language::He),
            other => Err(format!("Language {} is not supported", other)),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
            Language::He => "he",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar | Language::He)
    }
}
