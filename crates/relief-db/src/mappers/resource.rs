//! Resource need model -> entity mapper

use relief_core::entities::ResourceNeed;
use relief_core::error::DomainError;

use crate::models::ResourceNeedModel;

impl TryFrom<ResourceNeedModel> for ResourceNeed {
    type Error = DomainError;

    fn try_from(model: ResourceNeedModel) -> Result<Self, Self::Error> {
        Ok(ResourceNeed {
            id: model.id,
            portal_id: model.portal_id,
            title: model.title,
            description: model.description,
            category: model.category.parse()?,
            quantity: model.quantity,
            unit: model.unit,
            priority: model.priority.parse()?,
            status: model.status.parse()?,
            created_at: model.created_at,
        })
    }
}
