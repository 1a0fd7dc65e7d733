use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGroupsRequest {
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
pub struct GroupRequest {
    pub group: String,
}

#[derive(Debug, Deserialize)]
pub struct ProjectCostRequest {
    pub project: String,
    #[serde(default)]
    pub intervals: String,
}

#[derive(Debug, Deserialize)]
pub struct GroupCostRequest {
    pub group: String,
    #[serde(default)]
    pub intervals: String,
}

#[derive(Debug, Deserialize)]
pub struct MetricRequest {
    pub metric: String,
    #[serde(default)]
    pub intervals: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntityRequest {
    pub catalog_entity_ref: String,
    #[serde(default)]
    pub intervals: String,
}
