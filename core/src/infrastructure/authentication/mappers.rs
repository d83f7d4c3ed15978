use chrono::{TimeZone, Utc};

use crate::domain::authentication::entities::AccessToken;
use crate::entity::personal_access_tokens::Model as AccessTokenModel;

impl From<AccessTokenModel> for AccessToken {
    fn from(model: AccessTokenModel) -> Self {
        AccessToken {
            id: model.id,
            user_id: model.user_id,
            name: model.name,
            created_at: Utc.from_utc_datetime(&model.created_at),
            expires_at: Utc.from_utc_datetime(&model.expires_at),
        }
    }
}
