//! PostgreSQL implementation of MarketIntelligenceRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::DomainError;
use crate::domain::trade::MarketIntelligenceRecord;
use crate::ports::MarketIntelligenceRepository;

/// Inserts market intelligence snapshots into `market_intelligence`.
#[derive(Clone)]
pub struct PostgresMarketIntelligenceRepository {
    pool: PgPool,
}

impl std::fmt::Debug for PostgresMarketIntelligenceRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresMarketIntelligenceRepository")
            .field("pool", &"PgPool")
            .finish()
    }
}

impl PostgresMarketIntelligenceRepository {
    /// Creates a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MarketIntelligenceRepository for PostgresMarketIntelligenceRepository {
    async fn insert(&self, record: &MarketIntelligenceRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO market_intelligence (
                country, product_category, demand_trend, price_trend,
                regulatory_changes, opportunity_score, data_date
            ) VALUES ($1, $2, $3, $4, $5, $6::float8, $7)
            "#,
        )
        .bind(&record.country)
        .bind(&record.product_category)
        .bind(record.demand_trend.as_str())
        .bind(record.price_trend.as_str())
        .bind(&record.regulatory_changes)
        .bind(record.opportunity_score)
        .bind(record.data_date)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert market intelligence", e))?;

        Ok(())
    }
}
