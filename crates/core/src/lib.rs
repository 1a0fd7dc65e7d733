use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Calendar date format used for every date the dashboard exchanges (`YYYY-MM-DD`).
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeStatistic {
    pub ratio: f64,
    pub amount: f64,
}

impl ChangeStatistic {
    pub fn new(ratio: f64, amount: f64) -> Self {
        Self { ratio, amount }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Trendline {
    pub slope: f64,
    pub intercept: f64,
}

/// Daily cost series for a single group, project or catalog entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    pub id: String,
    pub aggregation: Vec<i64>,
    pub change: ChangeStatistic,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trendline: Option<Trendline>,
}

/// Per-product growth keyed by product id, kept in the order products were listed.
pub type ProjectGrowth = IndexMap<String, Cost>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricData {
    pub id: String,
    pub format: String,
    pub aggregation: Vec<i64>,
    pub change: ChangeStatistic,
}

/// Children of a breakdown node. Resource lists are serialized as arrays,
/// leaves as an (empty) object keyed by child id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityChildren {
    List(Vec<Entity>),
    Keyed(BTreeMap<String, Entity>),
}

impl EntityChildren {
    pub fn leaf() -> Self {
        EntityChildren::Keyed(BTreeMap::new())
    }

    pub fn len(&self) -> usize {
        match self {
            EntityChildren::List(items) => items.len(),
            EntityChildren::Keyed(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = &Entity> + '_> {
        match self {
            EntityChildren::List(items) => Box::new(items.iter()),
            EntityChildren::Keyed(items) => Box::new(items.values()),
        }
    }
}

impl Default for EntityChildren {
    fn default() -> Self {
        EntityChildren::leaf()
    }
}

/// Node of a cost breakdown tree (product, service, resource).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<ChangeStatistic>,
    #[serde(default)]
    pub entities: EntityChildren,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub title: String,
    pub subtitle: String,
    pub url: String,
    pub button_text: String,
    /// Custom rendering hook on the dashboard side; always `null` here.
    pub element: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInsightsOptions {
    #[serde(default)]
    pub group: String,
    pub product: String,
    #[serde(default)]
    pub intervals: String,
    #[serde(default)]
    pub project: Option<String>,
}
