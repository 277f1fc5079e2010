//! Resource need entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::kinds::{Priority, ResourceCategory, ResourceStatus};

/// A quantified need attached to one portal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceNeed {
    pub id: Uuid,
    pub portal_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: ResourceCategory,
    pub quantity: i64,
    pub unit: Option<String>,
    pub priority: Priority,
    pub status: ResourceStatus,
    pub created_at: DateTime<Utc>,
}

impl ResourceNeed {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Uuid,
        portal_id: Uuid,
        title: String,
        description: String,
        category: ResourceCategory,
        quantity: i64,
        unit: Option<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            portal_id,
            title,
            description,
            category,
            quantity,
            unit,
            priority,
            status: ResourceStatus::Needed,
            created_at: Utc::now(),
        }
    }

    /// Quantity counted as fulfilled for stats aggregation.
    ///
    /// Partially fulfilled needs are estimated at half the quantity,
    /// rounded to the nearest whole unit.
    pub fn fulfilled_quantity(&self) -> i64 {
        match self.status {
            ResourceStatus::Fulfilled => self.quantity,
            #[allow(clippy::cast_possible_truncation)]
            ResourceStatus::PartiallyFulfilled => (self.quantity as f64 * 0.5).round() as i64,
            ResourceStatus::Needed => 0,
        }
    }
}
