//! msg-adapters: steps concretos sobre los contratos de msg-core
pub mod error;
pub mod steps;

pub use error::DecodeFailure;
pub use steps::decode::Base64DecodeStep;
