use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use chrono::{Datelike, Utc};

use crate::db::DbService;
use crate::types::activity::ActivityRes;
use crate::types::calendar::{CalendarQuery, CalendarRes};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::calendar::{bucket_by_day, month_bounds, month_grid, month_name};

#[get("/calendar")]
async fn month_view(
    db: web::Data<DbService>,
    auth: BearerAuth,
    query: web::Query<CalendarQuery>,
) -> ApiResult<CalendarRes> {
    let user = db.session_user(auth.token()).await?;

    // today drives the defaults and the highlight, independent of the
    // queried month
    let today = Utc::now().date_naive();
    let month = query.month.unwrap_or(today.month());
    let year = query.year.unwrap_or(today.year());

    let weeks = month_grid(year, month)?;
    let (start, end) = month_bounds(year, month)?;

    let activities = db.activities_in_range(user.id, start, end).await?;
    let activities: Vec<ActivityRes> = activities.into_iter().map(ActivityRes::from).collect();
    let activities_by_day = bucket_by_day(activities, |a| a.date.day());

    Ok(ApiResponse::Ok(CalendarRes {
        year,
        month,
        month_name: month_name(month),
        weeks,
        activities_by_day,
        today,
        fields: db.list_fields(user.id).await?,
        activity_types: db.list_activity_types().await?,
    }))
}
