pub mod service_name;
pub mod validation;

pub use service_name::ServiceName;
