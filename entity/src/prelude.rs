pub use super::book::Entity as Book;
pub use super::book_tag::Entity as BookTag;
pub use super::job::Entity as Job;
pub use super::job_skill::Entity as JobSkill;
pub use super::location::Entity as Location;
pub use super::review::Entity as Review;
pub use super::tag::Entity as Tag;
pub use super::user::Entity as User;
