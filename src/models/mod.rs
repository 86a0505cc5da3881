pub mod block;
pub mod session;
