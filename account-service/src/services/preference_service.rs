use crate::app_state::KeyValueStoreType;
use crate::domain::data_stores::StorageError;
use crate::domain::Language;
use crate::utils::SELECTED_LANGUAGE_KEY;

/// Site preferences that outlive a visit. Only the interface language is
/// persisted.
pub struct PreferenceService {
    storage: KeyValueStoreType,
}

impl PreferenceService {
    pub fn new(storage: KeyValueStoreType) -> Self {
        PreferenceService { storage }
    }

    pub async fn selected_language(&self) -> Language {
        match self.storage.read().await.get_item(SELECTED_LANGUAGE_KEY).await {
            Ok(Some(code)) => Language::parse(&code).unwrap_or_else(|e| {
                log::warn!("ignoring stored {}: {}", SELECTED_LANGUAGE_KEY, e);
                Language::default()
            }),
            Ok(None) => Language::default(),
            Err(e) => {
                log::warn!("could not read {}: {}", SELECTED_LANGUAGE_KEY, e);
                Language::default()
            }
        }
    }

    pub async fn set_selected_language(&self, language: Language) -> Result<(), StorageError> {
        self.storage
            .write()
            .await
            .set_item(SELECTED_LANGUAGE_KEY, language.code().to_string())
            .await
    }
}
