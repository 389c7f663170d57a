mod event;
mod region;
mod user;
