//! Full trainer sessions through a scripted editor.

use std::fs;
use std::path::{Path, PathBuf};

use artikel_dictionary::{AssetDirectory, DictionaryLoader};
use artikel_foundation::Level;
use artikel_quiz::{Quiz, QuizState, SeededSampler};
use artikel_runtime::{Config, ScriptedEditor, Trainer};

type DiskTrainer = Trainer<DictionaryLoader<AssetDirectory>, ScriptedEditor, Vec<u8>>;

fn config(asset_dir: &Path) -> Config {
    Config {
        asset_dir: asset_dir.to_path_buf(),
        auto_advance_ms: 0,
        seed: Some(5),
        ..Config::default()
    }
}

fn trainer(config: &Config, lines: &[&str]) -> DiskTrainer {
    let loader = DictionaryLoader::new(AssetDirectory::new(&config.asset_dir));
    let sampler = SeededSampler::new(config.seed.unwrap_or_default());
    Trainer::with_io(
        Quiz::with_sampler(loader, sampler),
        ScriptedEditor::new(lines.iter().copied()),
        Vec::new(),
        config,
    )
}

fn output(trainer: &DiskTrainer) -> String {
    String::from_utf8_lossy(trainer.output()).into_owned()
}

fn bundled_assets() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets")
}

#[test]
fn single_word_dictionary_round_and_retry() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("german_nouns_a1.csv"),
        "german,german example,english,english example\n\"die Ansage, -n\",Hören Sie die Ansage.,announcement,Listen.\n",
    )
    .unwrap();

    let config = config(dir.path());
    let mut trainer = trainer(&config, &["start", "der", "practice", "die", "quit"]);
    trainer.run().unwrap();

    let out = output(&trainer);
    assert!(out.contains("1 words available"));
    assert!(out.contains("Not der, it is die Ansage"));
    assert!(out.contains("Success:   0%"));
    assert!(out.contains("Richtig!"));
    assert!(out.contains("Glückwunsch"));

    let result = trainer.quiz().state().result().unwrap();
    assert!(result.is_complete());
    assert_eq!(result.original().len(), 1);
}

#[test]
fn switching_levels_on_bundled_assets() {
    let config = config(&bundled_assets());
    let mut trainer = trainer(&config, &["level a2", "start 3", "back"]);
    trainer.run().unwrap();

    assert_eq!(trainer.level(), &Level::new("A2").unwrap());
    assert_eq!(trainer.quiz().level().map(Level::as_str), Some("A2"));
    assert!(matches!(trainer.quiz().state(), QuizState::InSession(_)));
    assert!(output(&trainer).contains("Word 1 of 3"));
}

#[test]
fn missing_asset_directory_shows_error_and_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir.path().join("missing"));
    let mut trainer = trainer(&config, &["start"]);
    trainer.run().unwrap();

    assert!(output(&trainer).contains("Could not load level A1"));
    assert!(matches!(trainer.quiz().state(), QuizState::Failed { .. }));
}

#[test]
fn answers_are_recorded_in_history() {
    let config = config(&bundled_assets());
    let mut trainer = trainer(&config, &["start 2", "  ", "hint", "1", "2"]);
    trainer.run().unwrap();

    assert_eq!(trainer.editor().history(), ["start 2", "hint", "1", "2"]);
    let result = trainer.quiz().state().result().unwrap();
    assert_eq!(result.total_answered(), 2);
}
