//! Portal model -> entity mapper

use relief_core::entities::Portal;
use relief_core::error::DomainError;

use crate::models::PortalModel;

impl TryFrom<PortalModel> for Portal {
    type Error = DomainError;

    fn try_from(model: PortalModel) -> Result<Self, Self::Error> {
        Ok(Portal {
            id: model.id,
            title: model.title,
            description: model.description,
            location: model.location,
            urgency: model.urgency.parse()?,
            disaster_type: model.disaster_type.parse()?,
            image: model.image,
            created_by: model.created_by,
            status: model.status.parse()?,
            resolution_summary: model.resolution_summary,
            created_at: model.created_at,
            resolved_at: model.resolved_at,
            last_updated: model.last_updated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn model() -> PortalModel {
        PortalModel {
            id: Uuid::new_v4(),
            title: "Riverbank Flooding".to_string(),
            description: "Flash flooding along the east bank".to_string(),
            location: "Dhaka".to_string(),
            urgency: "high".to_string(),
            disaster_type: "flood".to_string(),
            image: None,
            created_by: "uid-1".to_string(),
            status: "active".to_string(),
            resolution_summary: None,
            created_at: Utc::now(),
            resolved_at: None,
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn test_valid_row_maps() {
        let portal = Portal::try_from(model()).unwrap();
        assert!(portal.is_active());
        assert_eq!(portal.location, "Dhaka");
    }

    #[test]
    fn test_bad_status_is_rejected() {
        let mut m = model();
        m.status = "bogus".to_string();
        let err = Portal::try_from(m).unwrap_err();
        assert!(err.is_validation());
    }
}
