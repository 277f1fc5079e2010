//! Volunteer model -> entity mapper

use relief_core::entities::Volunteer;
use relief_core::error::DomainError;

use crate::models::VolunteerModel;

impl TryFrom<VolunteerModel> for Volunteer {
    type Error = DomainError;

    fn try_from(model: VolunteerModel) -> Result<Self, Self::Error> {
        Ok(Volunteer {
            id: model.id,
            portal_id: model.portal_id,
            user_id: model.user_id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            skills: model.skills,
            availability: model.availability,
            status: model.status.parse()?,
            registered_at: model.registered_at,
        })
    }
}
