//! Mock cost client producing synthetic AWS-style cost data.
//!
//! Series are independent per-day samples around a base value, see
//! [`random_cost`]. Nothing here fails: unknown ids fall back to defaults.

use std::sync::Arc;

use async_trait::async_trait;
use cost_core::{
    Alert, ChangeStatistic, Cost, Entity, EntityChildren, Group, MetricData,
    ProductInsightsOptions, Project, ProjectGrowth, Trendline,
};

use crate::api::CostInsightsApi;
use crate::random::{RandomSource, ThreadRandom, random_cost};
use crate::util::time::{Clock, SystemClock, last_n_days, previous_day};

const PROJECT_WINDOW_DAYS: u32 = 60;
const GROUP_WINDOW_DAYS: u32 = 90;
const METRIC_WINDOW_DAYS: u32 = 90;
const PRODUCT_WINDOW_DAYS: u32 = 60;
const CATALOG_WINDOW_DAYS: u32 = 30;

/// Base value and spread of a generated series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesShape {
    pub base: f64,
    pub variance: f64,
}

impl SeriesShape {
    pub const fn new(base: f64, variance: f64) -> Self {
        Self { base, variance }
    }

    /// Inclusive bounds every generated value falls in.
    pub fn bounds(&self) -> (i64, i64) {
        let half = self.variance / 2.0;
        (
            (self.base - half).floor() as i64,
            (self.base + half).ceil() as i64,
        )
    }
}

pub const PROJECT_DAILY_COST: SeriesShape = SeriesShape::new(15000.0, 3000.0);
pub const GROUP_DAILY_COST: SeriesShape = SeriesShape::new(45000.0, 8000.0);
pub const DAILY_METRIC: SeriesShape = SeriesShape::new(50000.0, 10000.0);
pub const CATALOG_ENTITY_DAILY_COST: SeriesShape = SeriesShape::new(8000.0, 1500.0);
pub const DEFAULT_PRODUCT: SeriesShape = SeriesShape::new(5000.0, 1000.0);

struct ResourceSeed {
    id: &'static str,
    shape: SeriesShape,
    change: (f64, f64),
}

const fn resource(
    id: &'static str,
    base: f64,
    variance: f64,
    ratio: f64,
    amount: f64,
) -> ResourceSeed {
    ResourceSeed {
        id,
        shape: SeriesShape::new(base, variance),
        change: (ratio, amount),
    }
}

const EC2_RESOURCES: &[ResourceSeed] = &[
    resource("i-0abc123def456", 2500.0, 500.0, 0.15, 375.0),
    resource("i-0xyz789ghi012", 3000.0, 600.0, 0.22, 660.0),
];
const S3_RESOURCES: &[ResourceSeed] = &[
    resource("my-app-assets-bucket", 1200.0, 200.0, 0.08, 96.0),
    resource("my-app-logs-bucket", 800.0, 150.0, 0.18, 144.0),
];
const RDS_RESOURCES: &[ResourceSeed] = &[resource("prod-postgres-db", 3500.0, 700.0, 0.12, 420.0)];
const LAMBDA_RESOURCES: &[ResourceSeed] = &[
    resource("api-handler-function", 400.0, 80.0, 0.25, 100.0),
    resource("data-processor-function", 600.0, 120.0, 0.30, 180.0),
];

const CATALOG_PRODUCTS: &[ResourceSeed] = &[
    resource("ec2", 3500.0, 700.0, 0.20, 700.0),
    resource("s3", 1500.0, 300.0, 0.12, 180.0),
    resource("rds", 2500.0, 500.0, 0.15, 375.0),
];

const PROJECT_GROWTH: &[(&str, [i64; 5], f64, f64)] = &[
    ("ec2", [5000, 5200, 5500, 6000, 6200], 0.24, 1200.0),
    ("s3", [2000, 2100, 2050, 2200, 2300], 0.15, 300.0),
    ("rds", [3500, 3600, 3700, 3800, 3900], 0.11, 400.0),
    ("lambda", [800, 850, 900, 950, 1000], 0.25, 200.0),
];

const PRODUCT_INSIGHTS_CHANGE_RATIO: f64 = 0.18;

/// Series shape for a product id; unknown products use [`DEFAULT_PRODUCT`].
pub fn product_shape(product: &str) -> SeriesShape {
    match product {
        "ec2" => SeriesShape::new(8000.0, 1500.0),
        "s3" => SeriesShape::new(3000.0, 600.0),
        "rds" => SeriesShape::new(5500.0, 1000.0),
        "lambda" => SeriesShape::new(1200.0, 300.0),
        _ => DEFAULT_PRODUCT,
    }
}

fn product_resources(product: &str) -> &'static [ResourceSeed] {
    match product {
        "ec2" => EC2_RESOURCES,
        "s3" => S3_RESOURCES,
        "rds" => RDS_RESOURCES,
        "lambda" => LAMBDA_RESOURCES,
        _ => &[],
    }
}

pub struct MockCostClient {
    random: Arc<dyn RandomSource>,
    clock: Arc<dyn Clock>,
}

impl MockCostClient {
    pub fn new() -> Self {
        Self::with_sources(Arc::new(ThreadRandom), Arc::new(SystemClock))
    }

    pub fn with_sources(random: Arc<dyn RandomSource>, clock: Arc<dyn Clock>) -> Self {
        Self { random, clock }
    }

    fn series(&self, window_days: u32, shape: SeriesShape) -> Vec<i64> {
        last_n_days(self.clock.today(), window_days)
            .iter()
            .map(|_| random_cost(self.random.as_ref(), shape.base, shape.variance))
            .collect()
    }

    fn resource_entity(&self, window_days: u32, seed: &ResourceSeed) -> Entity {
        Entity {
            id: seed.id.to_string(),
            aggregation: Some(self.series(window_days, seed.shape)),
            change: Some(ChangeStatistic::new(seed.change.0, seed.change.1)),
            entities: EntityChildren::leaf(),
        }
    }
}

impl Default for MockCostClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CostInsightsApi for MockCostClient {
    async fn get_user_groups(&self, _user_id: &str) -> Vec<Group> {
        vec![
            Group {
                id: "group-a".to_string(),
                name: Some("Team A".to_string()),
            },
            Group {
                id: "group-b".to_string(),
                name: Some("Team B".to_string()),
            },
        ]
    }

    async fn get_group_projects(&self, _group: &str) -> Vec<Project> {
        vec![
            Project {
                id: "project-1".to_string(),
                name: Some("Production Environment".to_string()),
            },
            Project {
                id: "project-2".to_string(),
                name: Some("Development Environment".to_string()),
            },
        ]
    }

    async fn get_alerts(&self, _group: &str) -> Vec<Alert> {
        vec![
            Alert {
                title: "Unexpected EC2 Cost Increase".to_string(),
                subtitle: "EC2 costs increased by 45% this week".to_string(),
                url: "/cost-insights".to_string(),
                button_text: "View Details".to_string(),
                element: None,
            },
            Alert {
                title: "S3 Storage Optimization".to_string(),
                subtitle: "Consider moving to S3 Glacier for cold data".to_string(),
                url: "/cost-insights".to_string(),
                button_text: "Learn More".to_string(),
                element: None,
            },
        ]
    }

    async fn get_last_complete_billing_date(&self) -> String {
        previous_day(self.clock.today())
    }

    async fn get_project_daily_cost(&self, project: &str, intervals: &str) -> Cost {
        tracing::debug!(project, intervals, "generating project daily cost");
        Cost {
            id: project.to_string(),
            aggregation: self.series(PROJECT_WINDOW_DAYS, PROJECT_DAILY_COST),
            change: ChangeStatistic::new(0.23, 2500.0),
            trendline: Some(Trendline {
                slope: 150.0,
                intercept: 12000.0,
            }),
        }
    }

    async fn get_group_daily_cost(&self, group: &str, intervals: &str) -> Cost {
        tracing::debug!(group, intervals, "generating group daily cost");
        Cost {
            id: group.to_string(),
            aggregation: self.series(GROUP_WINDOW_DAYS, GROUP_DAILY_COST),
            change: ChangeStatistic::new(0.18, 7200.0),
            trendline: Some(Trendline {
                slope: 320.0,
                intercept: 38000.0,
            }),
        }
    }

    async fn get_daily_metric_data(&self, metric: &str, intervals: &str) -> MetricData {
        tracing::debug!(metric, intervals, "generating daily metric data");
        MetricData {
            id: metric.to_string(),
            format: "number".to_string(),
            aggregation: self.series(METRIC_WINDOW_DAYS, DAILY_METRIC),
            change: ChangeStatistic::new(0.15, 7500.0),
        }
    }

    async fn get_project_growth(&self, _project: &str, _intervals: &str) -> ProjectGrowth {
        PROJECT_GROWTH
            .iter()
            .map(|(id, aggregation, ratio, amount)| {
                let cost = Cost {
                    id: id.to_string(),
                    aggregation: aggregation.to_vec(),
                    change: ChangeStatistic::new(*ratio, *amount),
                    trendline: None,
                };
                (id.to_string(), cost)
            })
            .collect()
    }

    async fn get_product_insights(&self, options: &ProductInsightsOptions) -> Entity {
        tracing::debug!(
            product = %options.product,
            group = %options.group,
            project = options.project.as_deref().unwrap_or(""),
            "generating product insights"
        );
        let shape = product_shape(&options.product);
        let children = product_resources(&options.product)
            .iter()
            .map(|seed| self.resource_entity(PRODUCT_WINDOW_DAYS, seed))
            .collect();

        Entity {
            id: options.product.clone(),
            aggregation: Some(self.series(PRODUCT_WINDOW_DAYS, shape)),
            change: Some(ChangeStatistic::new(
                PRODUCT_INSIGHTS_CHANGE_RATIO,
                (shape.base * PRODUCT_INSIGHTS_CHANGE_RATIO).round(),
            )),
            entities: EntityChildren::List(children),
        }
    }

    async fn get_catalog_entity_daily_cost(&self, catalog_entity_ref: &str, intervals: &str) -> Cost {
        tracing::debug!(catalog_entity_ref, intervals, "generating catalog entity daily cost");
        Cost {
            id: catalog_entity_ref.to_string(),
            aggregation: self.series(CATALOG_WINDOW_DAYS, CATALOG_ENTITY_DAILY_COST),
            change: ChangeStatistic::new(0.16, 1280.0),
            trendline: Some(Trendline {
                slope: 100.0,
                intercept: 7000.0,
            }),
        }
    }

    async fn get_catalog_entity_products(&self, catalog_entity_ref: &str, _intervals: &str) -> Entity {
        let children = CATALOG_PRODUCTS
            .iter()
            .map(|seed| self.resource_entity(CATALOG_WINDOW_DAYS, seed))
            .collect();
        Entity {
            id: catalog_entity_ref.to_string(),
            aggregation: None,
            change: None,
            entities: EntityChildren::List(children),
        }
    }
}
