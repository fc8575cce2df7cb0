//! GraphQL schema over the catalog registry
//!
//! Resolvers read the `SharedState` from request data and go through the same
//! registry calls and helpers as the JSON-RPC layer.

use crate::catalog::{
    helpers::{place_purchase, sorted_by_id, validate_item},
    models::{CatalogItem, PurchaseRequest, PurchaseResult},
};
use crate::state::SharedState;
use async_graphql::{Context, EmptySubscription, Error, InputObject, Object, Result, Schema, ID};

pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema. The state is attached per request, see `handlers`.
pub fn build_schema() -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription).finish()
}

// =============================================================================
// Objects
// =============================================================================

/// A sellable egg variant
#[Object(name = "Egg")]
impl CatalogItem {
    async fn id(&self) -> ID {
        ID::from(self.id.as_str())
    }

    #[graphql(name = "type")]
    async fn kind(&self) -> &str {
        &self.kind
    }

    async fn price(&self) -> f64 {
        self.unit_price
    }

    async fn quantity_available(&self) -> u32 {
        self.quantity_available
    }

    async fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[Object]
impl PurchaseResult {
    async fn success(&self) -> bool {
        self.success
    }

    async fn message(&self) -> &str {
        &self.message
    }

    async fn remaining_quantity(&self) -> u32 {
        self.remaining_quantity
    }
}

/// A full item for `upsertEgg`
#[derive(Debug, InputObject)]
pub struct EggInput {
    pub id: ID,
    #[graphql(name = "type")]
    pub kind: String,
    pub price: f64,
    pub quantity_available: u32,
    pub description: Option<String>,
}

impl EggInput {
    fn into_item(self) -> CatalogItem {
        CatalogItem {
            id: self.id.0,
            kind: self.kind,
            unit_price: self.price,
            quantity_available: self.quantity_available,
            description: self.description,
        }
    }
}

// =============================================================================
// Roots
// =============================================================================

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every egg in the catalog, ordered by id
    async fn eggs(&self, ctx: &Context<'_>) -> Result<Vec<CatalogItem>> {
        let state = ctx.data::<SharedState>()?;
        Ok(sorted_by_id(state.catalog.list()))
    }

    /// One egg, or null for an unknown id
    async fn egg(&self, ctx: &Context<'_>, id: ID) -> Result<Option<CatalogItem>> {
        let state = ctx.data::<SharedState>()?;
        Ok(state.catalog.get(&id))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Buys `quantity` eggs; refusals come back as `success: false`
    async fn purchase_egg(
        &self,
        ctx: &Context<'_>,
        id: ID,
        quantity: i32,
        payment_method: Option<String>,
        pickup_time: Option<String>,
    ) -> Result<PurchaseResult> {
        let state = ctx.data::<SharedState>()?;
        let request = PurchaseRequest {
            id: id.0,
            quantity: i64::from(quantity),
            payment_method,
            pickup_time,
        };
        Ok(place_purchase(state, request))
    }

    /// Creates or replaces an egg
    async fn upsert_egg(&self, ctx: &Context<'_>, egg: EggInput) -> Result<CatalogItem> {
        let state = ctx.data::<SharedState>()?;
        let egg = egg.into_item();
        validate_item(&egg).map_err(|e| Error::new(format!("Invalid egg: {}", e)))?;

        state.catalog.upsert(egg.clone());
        tracing::info!(id = %egg.id, "catalog item upserted");

        Ok(egg)
    }
}
