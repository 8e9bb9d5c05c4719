pub mod athlete;
pub mod category;
pub mod session;
pub mod training_center;

pub use session::PgSession;
