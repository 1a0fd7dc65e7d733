use cost_app::AppState;

#[derive(Clone)]
pub struct AppContext {
    pub app_state: AppState,
}

impl AppContext {
    pub fn new(app_state: AppState) -> Self {
        Self { app_state }
    }
}
