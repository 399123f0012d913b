pub use super::attendance::Entity as Attendance;
pub use super::favorite::Entity as Favorite;
pub use super::meeting_point::Entity as MeetingPoint;
pub use super::photo::Entity as Photo;
pub use super::review::Entity as Review;
pub use super::route::Entity as Route;
pub use super::route_call::Entity as RouteCall;
pub use super::user::Entity as User;
