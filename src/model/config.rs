use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeetingPointOptionDto {
    pub name: String,
    /// Absent for "Otro", which takes a free custom name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoutePaceOptionDto {
    pub value: String,
    pub emoji: String,
    pub label: String,
    pub description: String,
}

/// Static catalogs the frontend needs to build its forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    pub meeting_points: Vec<MeetingPointOptionDto>,
    pub route_paces: Vec<RoutePaceOptionDto>,
    pub route_levels: Vec<String>,
}
