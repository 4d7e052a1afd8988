pub mod request;
pub mod response;

pub use request::CalculateCommissionRequest;
pub use response::CalculateCommissionResponse;
