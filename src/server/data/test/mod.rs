mod attendance;
mod favorite;
mod photo;
mod review;
mod route;
mod route_call;
mod user;
