use crate::response::{ApiResponse, Data};
use crate::state::AppState;
use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct RosterView<'a> {
    pub students: &'a [String],
    pub variants: &'a BTreeMap<String, Vec<String>>,
}

/// GET /api/roster
///
/// The canonical student names, in roster order, and the alternate
/// spellings accepted for each.
///
/// ### Response
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "message": "名单获取成功",
///   "data": {
///     "students": ["薛舒文", "黄玉婷", "周騫騫"],
///     "variants": { "周騫騫": ["周骞骞"] }
///   }
/// }
/// ```
pub async fn get_roster(State(app_state): State<AppState>) -> impl IntoResponse {
    let roster = app_state.roster();
    Json(ApiResponse::success(
        Data {
            data: RosterView {
                students: roster.students(),
                variants: roster.variants(),
            },
        },
        "名单获取成功",
    ))
}
