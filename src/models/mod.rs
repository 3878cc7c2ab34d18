pub mod answer;
pub mod record;
pub mod review_status;
pub mod ship;
pub mod user_role;
pub mod zone;

pub use answer::{Answer, Polarity};
pub use record::{InspectionRecord, PhotoEntry};
pub use review_status::ReviewStatus;
pub use ship::Ship;
pub use user_role::UserRole;
pub use zone::Zone;
