use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BillingDateResponse {
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct CapabilitiesResponse {
    pub apis: Vec<String>,
}

#[derive(Serialize)]
pub struct OkResponse {
    pub ok: bool,
}
