//! Subcommand handlers. Every command prints JSON on stdout.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;

use analyzer::{
    export_backup, import_backup, to_json, validate_input, Analyzer, AnalyzerConfig, HistoryStore, Progress,
    ProfileStore,
};
use composition_core::{KeyValueStore, UserProfile};
use ingredient_lexicon::{has_source_language_majority, split_ingredients};
use ingredient_sources::SourcesConfig;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

use crate::{BackupAction, Command, HistoryAction, MissingAction, ProfileAction};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Wired analyzer and stores sharing one database.
pub struct App {
    analyzer: Analyzer,
    profiles: ProfileStore,
    history: HistoryStore,
}

/// One token of a `translate` run.
#[derive(Debug, Serialize)]
struct TranslatedToken {
    original: String,
    english: String,
}

impl App {
    pub fn new(store: Arc<dyn KeyValueStore>, offline: bool) -> Self {
        let mut config = AnalyzerConfig::from_env();
        if offline {
            config = config.with_offline(true);
        }
        Self {
            analyzer: Analyzer::with_remote_sources(config, SourcesConfig::from_env(), store.clone()),
            profiles: ProfileStore::new(store.clone()),
            history: HistoryStore::new(store),
        }
    }

    pub async fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::Analyze {
                text,
                file,
                product,
                save,
                ..
            } => self.analyze(read_input(text, file)?, product, save).await,
            Command::Barcode { code, save } => self.barcode(&code, save).await,
            Command::Translate { text } => self.translate(&text),
            Command::Profile { action } => self.profile(action).await,
            Command::History { action } => self.history(action).await,
            Command::Backup { action } => self.backup(action).await,
            Command::Missing { action } => self.missing(action).await,
        }
    }

    /// Write pending collector records.
    pub async fn flush(&self) -> std::result::Result<(), composition_core::StorageError> {
        match self.analyzer.collector() {
            Some(collector) => collector.flush().await,
            None => Ok(()),
        }
    }

    async fn analyze(&self, raw: String, product: Option<String>, save: bool) -> Result<()> {
        validate_input(&raw)?;
        let profile = self.profiles.load().await;

        let report = |current: usize, total: usize| debug!("Analyzed {}/{}", current, total);
        let progress: Progress<'_> = &report;
        let result = self
            .analyzer
            .analyze_with_progress(&raw, &profile, product.as_deref(), Some(progress))
            .await;

        if save {
            self.history.save(result.clone(), product.as_deref()).await?;
        }
        print_json(&result)
    }

    async fn barcode(&self, code: &str, save: bool) -> Result<()> {
        let profile = self.profiles.load().await;
        let result = self.analyzer.analyze_barcode(code, &profile, None).await?;
        info!("Analyzed '{}' ({} ingredients)", result.product_name, result.ingredients.len());

        if save {
            self.history.save(result.clone(), None).await?;
        }
        print_json(&result)
    }

    fn translate(&self, text: &str) -> Result<()> {
        let translator = self.analyzer.translator();
        let tokens: Vec<TranslatedToken> = split_ingredients(text)
            .into_iter()
            .map(|original| TranslatedToken {
                english: translator.translate_token(&original),
                original,
            })
            .collect();

        print_json(&json!({
            "sourceLanguageMajority": has_source_language_majority(text),
            "translated": translator.translate_composition_block(text),
            "tokens": tokens,
        }))
    }

    async fn profile(&self, action: ProfileAction) -> Result<()> {
        let profile: UserProfile = match action {
            ProfileAction::Show => self.profiles.load().await,
            ProfileAction::ToggleSkin { skin_type } => self.profiles.update(|p| p.toggle_skin_type(skin_type)).await?,
            ProfileAction::ToggleConcern { concern } => self.profiles.update(|p| p.toggle_concern(concern)).await?,
            ProfileAction::TogglePreference { preference } => {
                self.profiles.update(|p| p.toggle_preference(preference)).await?
            }
            ProfileAction::Complete => self.profiles.update(UserProfile::complete_onboarding).await?,
            ProfileAction::Reset => self.profiles.update(UserProfile::reset).await?,
        };
        print_json(&profile)
    }

    async fn history(&self, action: HistoryAction) -> Result<()> {
        match action {
            HistoryAction::List => print_json(&self.history.list().await),
            HistoryAction::Show { id } => {
                let item = self
                    .history
                    .get(&id)
                    .await
                    .ok_or_else(|| format!("history item not found: {}", id))?;
                print_json(&item)
            }
            HistoryAction::Remove { id } => {
                let removed = self.history.remove(&id).await?;
                print_json(&json!({ "removed": removed }))
            }
            HistoryAction::Clear => {
                self.history.clear().await?;
                print_json(&json!({ "cleared": true }))
            }
        }
    }

    async fn backup(&self, action: BackupAction) -> Result<()> {
        match action {
            BackupAction::Export { out } => {
                let data = export_backup(&self.profiles, &self.history).await;
                let raw = to_json(&data)?;
                match out {
                    Some(path) => {
                        fs::write(&path, raw)?;
                        info!("Wrote backup to {}", path.display());
                        print_json(&json!({ "exported": data.history.len(), "path": path }))
                    }
                    None => {
                        println!("{}", raw);
                        Ok(())
                    }
                }
            }
            BackupAction::Import { file } => {
                let raw = fs::read_to_string(&file)?;
                let data = import_backup(&raw, &self.profiles, &self.history).await?;
                print_json(&json!({
                    "version": data.version,
                    "exportDate": data.export_date,
                    "imported": data.history.len(),
                }))
            }
        }
    }

    async fn missing(&self, action: MissingAction) -> Result<()> {
        let collector = self.analyzer.collector().ok_or("missing-ingredient collection is not configured")?;
        match action {
            MissingAction::List => print_json(&collector.list().await),
            MissingAction::Export => {
                println!("{}", collector.export_json().await?);
                Ok(())
            }
            MissingAction::Clear => {
                collector.clear().await?;
                print_json(&json!({ "cleared": true }))
            }
        }
    }
}

/// Ingredient text from `--text`, `--file`, or stdin.
fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return Ok(fs::read_to_string(path)?);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
