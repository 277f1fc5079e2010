//! Manual model -> entity mappers

use relief_core::entities::{Manual, ManualSection, PortalManualLink};
use relief_core::error::DomainError;

use crate::models::{ManualModel, PortalManualModel};

impl TryFrom<ManualModel> for Manual {
    type Error = DomainError;

    fn try_from(model: ManualModel) -> Result<Self, Self::Error> {
        let sections: Vec<ManualSection> = serde_json::from_value(model.sections)
            .map_err(|e| DomainError::InternalError(format!("invalid manual sections: {e}")))?;

        Ok(Manual {
            id: model.id,
            disaster_type: model.disaster_type.parse()?,
            title: model.title,
            content: model.content,
            sections,
            for_victims: model.for_victims,
            for_helpers: model.for_helpers,
            created_by: model.created_by,
            created_at: model.created_at,
            last_updated: model.last_updated,
        })
    }
}

impl TryFrom<PortalManualModel> for PortalManualLink {
    type Error = DomainError;

    fn try_from(model: PortalManualModel) -> Result<Self, Self::Error> {
        Ok(PortalManualLink {
            id: model.id,
            portal_id: model.portal_id,
            manual_id: model.manual_id,
            disaster_type: model.disaster_type.parse()?,
            attached_at: model.attached_at,
        })
    }
}
