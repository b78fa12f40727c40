//! Loading dictionaries from an asset directory on disk.

use std::fs;

use artikel_dictionary::{AssetDirectory, Dictionary, DictionaryLoader};
use artikel_foundation::{Article, ErrorKind, Level};
use tempfile::TempDir;

const HEADER: &str = "german,german example,english,english example\n";

fn asset_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).expect("write asset");
    }
    dir
}

fn level(id: &str) -> Level {
    Level::new(id).unwrap()
}

// =============================================================================
// Successful Loads
// =============================================================================

#[test]
fn loads_level_file() {
    let contents = format!(
        "{HEADER}\"der Bahnhof, -¨e\",\"Entschuldigung, wo ist der Bahnhof?\",train station,\"Excuse me, where is it?\"\n"
    );
    let dir = asset_dir(&[("german_nouns_a1.csv", &contents)]);
    let loader = DictionaryLoader::new(AssetDirectory::new(dir.path()));

    let entries = loader.load(&level("a1")).unwrap();

    assert_eq!(entries.len(), 1);
    let entry = entries.first().unwrap();
    assert_eq!(entry.article(), Article::Der);
    assert_eq!(entry.noun(), "Bahnhof");
    assert_eq!(entry.source_example(), "Entschuldigung, wo ist der Bahnhof?");
    assert_eq!(entry.translation(), "train station");
}

#[test]
fn file_order_is_kept() {
    let contents = format!(
        "{HEADER}die Uhr,a,clock,b\n\nder Zug,c,train,d\ndas Brot,e,bread,f\n"
    );
    let dir = asset_dir(&[("german_nouns_b1.csv", &contents)]);
    let loader = DictionaryLoader::new(AssetDirectory::new(dir.path()));

    let nouns: Vec<String> = loader
        .load(&level("B1"))
        .unwrap()
        .iter()
        .map(|e| e.noun().to_string())
        .collect();

    assert_eq!(nouns, ["Uhr", "Zug", "Brot"]);
}

#[test]
fn malformed_rows_do_not_fail_the_load() {
    let contents = format!(
        "{HEADER}ein Stuhl,x,chair,y\ndie Lampe,x,lamp,y\nder Tisch,only three,fields\nder,x,y,z\n"
    );
    let dir = asset_dir(&[("german_nouns_a1.csv", &contents)]);
    let loader = DictionaryLoader::new(AssetDirectory::new(dir.path()));

    let entries = loader.load(&level("A1")).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries.first().unwrap().noun(), "Lampe");
}

// =============================================================================
// Load Errors
// =============================================================================

#[test]
fn missing_file_is_resource_not_found() {
    let dir = asset_dir(&[]);
    let loader = DictionaryLoader::new(AssetDirectory::new(dir.path()));

    let err = loader.load(&level("C1")).unwrap_err();
    assert!(err.is_load_error());
    assert!(matches!(err.kind, ErrorKind::ResourceNotFound { ref resource } if resource.ends_with("german_nouns_c1.csv")));
}

#[test]
fn invalid_utf8_keeps_valid_rows() {
    let dir = tempfile::tempdir().unwrap();
    let mut bytes = HEADER.as_bytes().to_vec();
    bytes.extend_from_slice(b"der Tisch,Der Tisch ist gro\xdf.,table,x\n");
    bytes.extend_from_slice(b"die T\xfcr,a,door,b\n");
    bytes.extend_from_slice(b"das Buch,Das Buch ist neu.,book,y\n");
    fs::write(dir.path().join("german_nouns_a1.csv"), bytes).unwrap();
    let loader = DictionaryLoader::new(AssetDirectory::new(dir.path()));

    let entries = loader.load(&level("A1")).unwrap();

    let articles: Vec<_> = entries.iter().map(|e| e.article()).collect();
    assert_eq!(articles, [Article::Der, Article::Die, Article::Das]);
    assert_eq!(entries.last().map(|e| e.noun()), Some("Buch"));
}

#[test]
fn no_valid_rows_is_empty_dictionary() {
    let contents = format!("{HEADER}ein Stuhl,x,chair,y\n\n");
    let dir = asset_dir(&[("german_nouns_a1.csv", &contents)]);
    let loader = DictionaryLoader::new(AssetDirectory::new(dir.path()));

    let err = loader.load(&level("A1")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyDictionary { .. }));
}

#[test]
fn directory_in_place_of_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("german_nouns_a1.csv")).unwrap();
    let loader = DictionaryLoader::new(AssetDirectory::new(dir.path()));

    assert!(loader.load(&level("A1")).unwrap_err().is_load_error());
}
