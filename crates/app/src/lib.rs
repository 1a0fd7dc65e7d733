pub mod api;
pub mod apis;
pub mod app;
pub mod error;
pub mod mock;
pub mod random;
pub mod registry;
pub mod services;
pub mod util;

pub use api::CostInsightsApi;
pub use apis::{COST_INSIGHTS_API_REF, apis};
pub use app::{AppConfig, AppState};
pub use error::{AppError, Result};
pub use mock::MockCostClient;
pub use random::{RandomSource, SeededRandom, ThreadRandom, random_cost};
pub use registry::{ApiFactory, ApiRef, ApiRegistry};
pub use services::{AppServices, CostInsightsService};
pub use util::time::{Clock, FixedClock, SystemClock, format_date, last_n_days, previous_day};
