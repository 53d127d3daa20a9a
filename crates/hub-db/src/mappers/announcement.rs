//! Announcement entity <-> model mapper

use hub_core::entities::Announcement;
use hub_core::value_objects::Snowflake;

use crate::models::AnnouncementModel;

/// Convert AnnouncementModel to Announcement entity
impl From<AnnouncementModel> for Announcement {
    fn from(model: AnnouncementModel) -> Self {
        Announcement {
            id: Snowflake::new(model.id),
            club_id: Snowflake::new(model.club_id),
            title: model.title,
            body: model.body,
            created_by: Snowflake::new(model.created_by),
            created_at: model.created_at,
        }
    }
}
