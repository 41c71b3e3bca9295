//! Campaign plan loader.

use std::path::Path;

use battle_core::MonsterId;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// An ordered run of encounters, final boss last.
///
/// The plan only names monsters; their stats stay in the roster catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignPlan {
    pub name: String,
    pub roster: Vec<MonsterId>,
}

/// Loader for the campaign plan from TOML files.
pub struct CampaignLoader;

impl CampaignLoader {
    /// Load a campaign plan from a TOML file.
    ///
    /// TOML format: a `name` string and a `roster` array of monster ids.
    pub fn load(path: &Path) -> LoadResult<CampaignPlan> {
        let content = read_file(path)?;
        let plan: CampaignPlan = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse campaign plan TOML: {}", e))?;

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAMPAIGN_TOML: &str = r#"
name = "The Long Road"
roster = [1, 2, 3, 4, 5]
"#;

    #[test]
    fn loads_the_roster_in_written_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("campaign.toml");
        std::fs::write(&path, CAMPAIGN_TOML).unwrap();

        let plan = CampaignLoader::load(&path).unwrap();
        assert_eq!(plan.name, "The Long Road");
        assert_eq!(
            plan.roster,
            vec![
                MonsterId(1),
                MonsterId(2),
                MonsterId(3),
                MonsterId(4),
                MonsterId(5),
            ]
        );
    }

    #[test]
    fn an_empty_roster_is_still_a_plan() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("campaign.toml");
        std::fs::write(&path, "name = \"Rest Day\"\nroster = []\n").unwrap();

        let plan = CampaignLoader::load(&path).unwrap();
        assert!(plan.roster.is_empty());
    }
}
