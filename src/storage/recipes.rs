use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

/// Recipe identifier, numeric or textual
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeId {
    Number(u64),
    Text(String),
}

/// Wire shape of a recipe as the front-end consumes it.
///
/// The store itself keeps raw JSON so records that don't match this shape
/// are still served unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "pais")]
    pub country: String,
    #[serde(rename = "imagen")]
    pub image: String,
    /// Preparation time in minutes
    #[serde(rename = "tiempo")]
    pub prep_minutes: u32,
    #[serde(rename = "categorias", default)]
    pub categories: Vec<String>,
    #[serde(rename = "ingredientes", default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(rename = "instrucciones", default)]
    pub instructions: Vec<String>,
    pub rating: f64,
    pub reviews: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "cantidad")]
    pub quantity: String,
    #[serde(rename = "icono")]
    pub icon: String,
}

/// Where the loaded records came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    File,
    Fallback,
    Unreadable,
}

impl fmt::Display for LoadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LoadSource::File => "file",
            LoadSource::Fallback => "fallback",
            LoadSource::Unreadable => "unreadable",
        })
    }
}

#[derive(Debug, Error)]
enum LoadError {
    #[error("recipe file not found")]
    Missing,

    #[error("failed to read recipe file: {0}")]
    Read(#[source] std::io::Error),

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("expected a JSON array, found {0}")]
    NotAnArray(&'static str),
}

/// Immutable, cheaply clonable snapshot of the recipes loaded at startup
#[derive(Debug, Clone)]
pub struct RecipeStore {
    records: Arc<[Value]>,
    source: LoadSource,
}

impl RecipeStore {
    /// Load recipes from a JSON array file.
    ///
    /// A missing file yields the built-in fallback recipe; an unreadable or
    /// malformed file yields an empty store. Neither case is an error.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        let store = match read_records(path) {
            Ok(records) => Self::from_records(records, LoadSource::File),
            Err(LoadError::Missing) => {
                warn!(path = %path.display(), "Recipe file not found, using fallback data");
                Self::fallback()
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to load recipes");
                Self::from_records(Vec::new(), LoadSource::Unreadable)
            }
        };

        info!(
            count = store.len(),
            source = %store.source,
            "📚 Recipes loaded"
        );
        store
    }

    pub fn from_records(records: Vec<Value>, source: LoadSource) -> Self {
        Self {
            records: records.into(),
            source,
        }
    }

    /// Single built-in recipe served when no data file exists
    pub fn fallback() -> Self {
        let records = match serde_json::to_value(fallback_recipe()) {
            Ok(value) => vec![value],
            Err(e) => {
                error!(error = %e, "Failed to serialize fallback recipe");
                Vec::new()
            }
        };
        Self::from_records(records, LoadSource::Fallback)
    }

    pub fn all(&self) -> Arc<[Value]> {
        Arc::clone(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn source(&self) -> LoadSource {
        self.source
    }
}

fn read_records(path: &Path) -> Result<Vec<Value>, LoadError> {
    let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LoadError::Missing,
        _ => LoadError::Read(e),
    })?;

    match serde_json::from_str::<Value>(&raw)? {
        Value::Array(records) => Ok(records),
        other => Err(LoadError::NotAnArray(json_kind(&other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn fallback_recipe() -> Recipe {
    let ingredient = |name: &str, quantity: &str, icon: &str| Ingredient {
        name: name.to_string(),
        quantity: quantity.to_string(),
        icon: icon.to_string(),
    };

    Recipe {
        id: RecipeId::Number(1),
        name: "Paella Valenciana".to_string(),
        country: "España".to_string(),
        image: "🥘".to_string(),
        prep_minutes: 60,
        categories: vec!["Arroces".to_string(), "Tradicional".to_string()],
        ingredients: vec![
            ingredient("Arroz bomba", "400 g", "🍚"),
            ingredient("Pollo", "500 g", "🍗"),
            ingredient("Judía verde", "200 g", "🫛"),
            ingredient("Azafrán", "1 pizca", "🌼"),
            ingredient("Aceite de oliva", "4 cucharadas", "🫒"),
        ],
        instructions: vec![
            "Sofríe el pollo en la paella con el aceite.".to_string(),
            "Añade las verduras y rehoga unos minutos.".to_string(),
            "Incorpora el agua y el azafrán y deja hervir.".to_string(),
            "Agrega el arroz y cocina 18 minutos sin remover.".to_string(),
            "Deja reposar 5 minutos antes de servir.".to_string(),
        ],
        rating: 4.8,
        reviews: 124,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    #[test]
    fn missing_file_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecipeStore::load(dir.path().join("recipes.json"));

        assert_eq!(store.source(), LoadSource::Fallback);
        assert_eq!(store.len(), 1);

        let recipe: Recipe = serde_json::from_value(store.all()[0].clone()).unwrap();
        assert_eq!(recipe.id, RecipeId::Number(1));
        assert!(!recipe.instructions.is_empty());
    }

    #[test]
    fn valid_file_is_loaded_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        fs::write(
            &path,
            json!([{ "id": 1, "nombre": "Tacos" }, { "id": "b", "nombre": "Ramen" }]).to_string(),
        )
        .unwrap();

        let store = RecipeStore::load(&path);
        assert_eq!(store.source(), LoadSource::File);
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0]["nombre"], "Tacos");
        assert_eq!(store.all()[1]["id"], "b");
    }

    #[test]
    fn malformed_records_pass_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        fs::write(&path, r#"[42, "text", {"unexpected": true}, {"id": 1}, {"id": 1}]"#).unwrap();

        let store = RecipeStore::load(&path);
        assert_eq!(store.len(), 5);
        assert_eq!(store.all()[0], json!(42));
        assert_eq!(store.all()[2], json!({ "unexpected": true }));
    }

    #[test]
    fn invalid_json_yields_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        fs::write(&path, "[{ not json").unwrap();

        let store = RecipeStore::load(&path);
        assert_eq!(store.source(), LoadSource::Unreadable);
        assert!(store.is_empty());
    }

    #[test]
    fn non_array_document_yields_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        fs::write(&path, r#"{"recetas": []}"#).unwrap();

        let store = RecipeStore::load(&path);
        assert_eq!(store.source(), LoadSource::Unreadable);
        assert!(store.is_empty());
    }

    #[test]
    fn clones_share_the_same_records() {
        let store = RecipeStore::fallback();
        let clone = store.clone();
        assert!(Arc::ptr_eq(&store.all(), &clone.all()));
    }
}
