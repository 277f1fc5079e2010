//! Update model -> entity mapper
//!
//! Updates carry no enum-like columns, yet the conversion stays fallible
//! so repositories can treat every row mapping uniformly.

use relief_core::entities::Update;
use relief_core::error::DomainError;

use crate::models::UpdateModel;

impl TryFrom<UpdateModel> for Update {
    type Error = DomainError;

    fn try_from(model: UpdateModel) -> Result<Self, Self::Error> {
        Ok(Update {
            id: model.id,
            portal_id: model.portal_id,
            title: model.title,
            content: model.content,
            created_by: model.created_by,
            is_resolution: model.is_resolution,
            created_at: model.created_at,
        })
    }
}
