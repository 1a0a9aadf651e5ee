pub mod business_number;
pub mod convert;
pub mod crypto;
