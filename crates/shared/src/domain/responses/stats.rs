use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, FromRow)]
pub struct StatsTotals {
    pub total_orders: i64,
    pub total_revenue: i64,
    pub total_users: i64,
    pub total_sellers: i64,
    pub total_buyers: i64,
    pub total_products: i64,
}

/// One bucket of the trailing six-month series, keyed by calendar month.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, FromRow)]
pub struct MonthlyStat {
    pub month: String,
    pub revenue: i64,
    pub orders: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub totals: StatsTotals,
    pub monthly: Vec<MonthlyStat>,
}
