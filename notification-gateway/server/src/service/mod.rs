pub mod error;
mod notification_gateway;

pub use self::notification_gateway::NotificationGateway;
