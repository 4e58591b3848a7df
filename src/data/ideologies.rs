use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_IDEOLOGY_DATA: &str = include_str!("../../assets/data/ideologies.json");
const SUPPORTED_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeologyCatalog {
    pub schema_version: u32,
    pub ideologies: Vec<IdeologyEntry>,
}

/// One selectable ideology: its menu name, the line shown on selection and
/// the text printed once the user accepts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeologyEntry {
    pub name: String,
    pub description: String,
    #[serde(rename = "action")]
    pub action_text: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse ideology catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Validation(String),
}

pub fn load_default_catalog() -> Result<IdeologyCatalog, CatalogError> {
    IdeologyCatalog::from_json(DEFAULT_IDEOLOGY_DATA)
}

impl IdeologyCatalog {
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: IdeologyCatalog = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.schema_version != SUPPORTED_SCHEMA_VERSION {
            return Err(CatalogError::Validation(format!(
                "unsupported ideology schema_version {}",
                self.schema_version
            )));
        }
        if self.ideologies.is_empty() {
            return Err(CatalogError::Validation(
                "ideology catalog cannot be empty".to_string(),
            ));
        }
        let mut names = HashSet::new();
        for entry in &self.ideologies {
            if entry.name.trim().is_empty() {
                return Err(CatalogError::Validation(
                    "ideology name cannot be empty".to_string(),
                ));
            }
            if !names.insert(entry.name.as_str()) {
                return Err(CatalogError::Validation(format!(
                    "duplicate ideology name {}",
                    entry.name
                )));
            }
            if entry.description.trim().is_empty() {
                return Err(CatalogError::Validation(format!(
                    "ideology {} missing description",
                    entry.name
                )));
            }
            if entry.action_text.trim().is_empty() {
                return Err(CatalogError::Validation(format!(
                    "ideology {} missing action",
                    entry.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> IdeologyEntry {
        IdeologyEntry {
            name: name.to_string(),
            description: format!("{name} describes itself."),
            action_text: format!("{name} acts."),
        }
    }

    fn catalog(entries: Vec<IdeologyEntry>) -> IdeologyCatalog {
        IdeologyCatalog {
            schema_version: 1,
            ideologies: entries,
        }
    }

    #[test]
    fn embedded_catalog_is_valid_and_ordered() {
        let catalog = load_default_catalog().expect("embedded catalog");
        let names: Vec<&str> = catalog.ideologies.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Liberalism",
                "Capitalism",
                "Conservatism",
                "Fascism",
                "Socialism",
                "Communism",
                "Anarchism",
            ]
        );
    }

    #[test]
    fn embedded_catalog_keeps_multiline_action_text() {
        let catalog = load_default_catalog().expect("embedded catalog");
        let capitalism = &catalog.ideologies[1];
        assert_eq!(
            capitalism.description,
            "Capitalism emphasizes private ownership and free market economy."
        );
        assert_eq!(capitalism.action_text.lines().count(), 4);
        assert!(capitalism
            .action_text
            .ends_with("—starting at $9.99 per minute!"));
    }

    #[test]
    fn embedded_catalog_text_is_exact() {
        let expected = [
            (
                "Liberalism",
                "Liberalism emphasizes individual freedom and limited government intervention.",
                "You can now declare that everyone has the right to do anything, anywhere, at any time, even if it means turning your living room into a rock concert venue!",
            ),
            (
                "Capitalism",
                "Capitalism emphasizes private ownership and free market economy.",
                "You can now start selling everything around you,\nincluding your neighbor's lawn and the air you breathe, for a most 'modest' profit!\nAlso there are subscription plans are now available for talking to this program\n—starting at $9.99 per minute!",
            ),
            (
                "Conservatism",
                "Conservatism emphasizes tradition, authority, and the preservation of established institutions.",
                "You can now insist on replacing all modern technology with candlelight, horse-drawn carriages, and carrier pigeons.\n-'If it was good enough for grandpa, it’s good enough for us!'",
            ),
            (
                "Fascism",
                "Fascism emphasizes authoritarianism, nationalism, and the supremacy of the state.",
                "You can now enforce strict loyalty to The Rule (of your choosing) and\n1. Mandate national anthem karaoke every hour (Wooohoo!)\n2. Replace all street names with your own name (yours is prettier anyyway)",
            ),
            (
                "Socialism",
                "Socialism emphasizes common ownership and democratic control of the means of production.",
                "You can now redistribute everything equally.\nYour neighbor’s jacuzzi is now a community soup pot, your car has become the public bus,\nand everyone gets exactly 3 potatoes a week, no exceptions!!!",
            ),
            (
                "Communism",
                "Communism emphasizes common ownership and the absence of social classes.",
                "You can now create a classless, stateless society. Where everyone works tirelessly on the beautiful collective farm,\nbut nobody is quite sure who’s in charge of deciding what to plant.",
            ),
            (
                "Anarchism",
                "Anarchism advocates for a stateless society and the abolition of hierarchical structures.",
                "With that you have abolished all authority. Traffic lights are now art installations, taxes are nothing but a memory,\nand your neighbor is now their own independent nation-state with their own lawbook and everything!\nI also heard that they have weapons at home :)",
            ),
        ];
        let catalog = load_default_catalog().expect("embedded catalog");
        assert_eq!(catalog.ideologies.len(), expected.len());
        for (entry, (name, description, action)) in catalog.ideologies.iter().zip(expected) {
            assert_eq!(entry.name, name);
            assert_eq!(entry.description, description, "{name} description");
            assert_eq!(entry.action_text, action, "{name} action");
        }
    }

    #[test]
    fn rejects_empty_catalog() {
        let err = catalog(Vec::new()).validate().unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = catalog(vec![entry("Liberalism"), entry("Liberalism")])
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("duplicate ideology name Liberalism"));
    }

    #[test]
    fn rejects_blank_text() {
        let mut blank = entry("Anarchism");
        blank.action_text = "  ".to_string();
        let err = catalog(vec![blank]).validate().unwrap_err();
        assert!(err.to_string().contains("missing action"));

        let mut blank = entry("Anarchism");
        blank.description = String::new();
        let err = catalog(vec![blank]).validate().unwrap_err();
        assert!(err.to_string().contains("missing description"));
    }

    #[test]
    fn rejects_unknown_schema_version() {
        let mut catalog = catalog(vec![entry("Socialism")]);
        catalog.schema_version = 2;
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::Validation(_))
        ));
    }

    #[test]
    fn reports_malformed_json() {
        let err = IdeologyCatalog::from_json("{\"schema_version\": 1}").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }
}
