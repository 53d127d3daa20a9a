//! Club entity <-> model mapper

use hub_core::entities::Club;
use hub_core::value_objects::Snowflake;

use crate::models::ClubModel;

/// Convert ClubModel to Club entity
impl From<ClubModel> for Club {
    fn from(model: ClubModel) -> Self {
        Club {
            id: Snowflake::new(model.id),
            name: model.name,
            description: model.description,
            logo_url: model.logo_url,
            category: model.category,
            created_by: Snowflake::new(model.created_by),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
