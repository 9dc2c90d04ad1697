use serde::{Deserialize, Serialize};

pub const SUBSCRIBED_MESSAGE: &str =
    "Thank you for subscribing! You'll receive our next newsletter.";

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SubscribeDto {
    pub email: String,
}
