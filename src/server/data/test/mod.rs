mod book;
mod job;
mod location;
mod review;
mod tag;
mod user;
