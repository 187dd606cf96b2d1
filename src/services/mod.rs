pub mod account_service;
pub mod mediasoup_service;
pub mod openvidu_service;
pub mod queue_service;
pub mod sessions;

pub use account_service::*;
pub use mediasoup_service::*;
pub use openvidu_service::*;
pub use queue_service::*;
pub use sessions::*;
