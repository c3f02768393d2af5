use serde::{Deserialize, Serialize};

/// Listing of every route the server answers, returned at `/`
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SitemapDto {
    pub routes: Vec<RouteDto>,
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RouteDto {
    pub path: String,
    pub method: String,
}
