pub mod verify_dto;

pub use verify_dto::VerifyEmailRequest;
