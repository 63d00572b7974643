/// Dispatcher trait implemented by the HTTP session and by test doubles
pub mod interface;

pub use interface::Dispatcher;
