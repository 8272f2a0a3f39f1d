//! Backup export and import of the profile and history.

use chrono::Utc;
use composition_core::ExportData;
use serde_json::Value;
use tracing::info;

use crate::error::AnalysisError;
use crate::history::HistoryStore;
use crate::profile::ProfileStore;

/// Backup format version written by this crate.
pub const BACKUP_VERSION: &str = "1.0";

/// Snapshot the profile and history into a backup document.
pub async fn export_backup(profiles: &ProfileStore, history: &HistoryStore) -> ExportData {
    ExportData {
        version: BACKUP_VERSION.to_string(),
        export_date: Utc::now().format("%Y-%m-%d").to_string(),
        profile: profiles.load().await,
        history: history.list().await,
    }
}

/// Render a backup document as pretty JSON.
pub fn to_json(data: &ExportData) -> Result<String, AnalysisError> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Parse and validate a backup document.
///
/// `version`, `profile` and `history` must be present and well formed.
pub fn parse_backup(raw: &str) -> Result<ExportData, AnalysisError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| AnalysisError::InvalidBackup(format!("not JSON: {}", e)))?;

    let object = value
        .as_object()
        .ok_or_else(|| AnalysisError::InvalidBackup("expected a JSON object".to_string()))?;

    if !object.get("version").is_some_and(Value::is_string) {
        return Err(AnalysisError::InvalidBackup("missing version".to_string()));
    }
    if !object.get("profile").is_some_and(Value::is_object) {
        return Err(AnalysisError::InvalidBackup("missing profile".to_string()));
    }
    if !object.get("history").is_some_and(Value::is_array) {
        return Err(AnalysisError::InvalidBackup("missing history".to_string()));
    }

    serde_json::from_value(value).map_err(|e| AnalysisError::InvalidBackup(e.to_string()))
}

/// Validate a backup and replace the stored profile and history with it.
pub async fn import_backup(
    raw: &str,
    profiles: &ProfileStore,
    history: &HistoryStore,
) -> Result<ExportData, AnalysisError> {
    let data = parse_backup(raw)?;
    profiles.save(&data.profile).await?;
    history.import(data.history.clone()).await?;
    info!("Imported backup with {} history items", data.history.len());
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use composition_core::{Concern, KeyValueStore, MemoryStore, UserProfile};

    use crate::Analyzer;

    fn stores() -> (ProfileStore, HistoryStore) {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        (ProfileStore::new(store.clone()), HistoryStore::new(store))
    }

    #[tokio::test]
    async fn test_export_import_round_trip() {
        let (profiles, history) = stores();
        profiles.update(|p| p.toggle_concern(Concern::Acne)).await.unwrap();
        let profile = profiles.load().await;
        let result = Analyzer::offline().analyze_local("Aqua, Glycerin, Niacinamide", &profile, Some("Serum"));
        history.save(result, None).await.unwrap();

        let exported = export_backup(&profiles, &history).await;
        assert_eq!(exported.version, BACKUP_VERSION);
        assert_eq!(exported.export_date.len(), 10);
        let json = to_json(&exported).unwrap();
        assert!(json.contains("\"exportDate\""));

        let (target_profiles, target_history) = stores();
        let imported = import_backup(&json, &target_profiles, &target_history).await.unwrap();
        assert_eq!(imported, exported);
        assert_eq!(target_profiles.load().await, profile);
        assert_eq!(target_history.list().await, exported.history);
    }

    #[test]
    fn test_rejects_invalid_documents() {
        for raw in [
            "nope",
            "[]",
            r#"{"profile": {}, "history": []}"#,
            r#"{"version": "1.0", "history": []}"#,
            r#"{"version": "1.0", "profile": {}}"#,
            r#"{"version": "1.0", "profile": {}, "history": [{"id": 1}]}"#,
        ] {
            assert!(matches!(parse_backup(raw), Err(AnalysisError::InvalidBackup(_))), "{}", raw);
        }
    }

    #[test]
    fn test_accepts_minimal_document() {
        let data = parse_backup(r#"{"version": "1.0", "profile": {}, "history": []}"#).unwrap();
        assert_eq!(data.profile, UserProfile::default());
        assert!(data.history.is_empty());
        assert!(data.export_date.is_empty());
    }
}
