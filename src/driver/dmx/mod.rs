pub mod prelude;
pub mod encoder;
pub mod codec;
pub mod entity;
pub mod completion;
pub mod dmx_thread;
pub mod connection;
pub mod traits;
pub mod dmx_driver;

pub use completion::WriteHandle;
pub use dmx_driver::DmxDriver;
pub use prelude::{ChannelSelector, DmxArg};
pub use traits::DmxWriter;
