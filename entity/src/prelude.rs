pub use super::event::Entity as Event;
pub use super::region::Entity as Region;
pub use super::user::Entity as User;
