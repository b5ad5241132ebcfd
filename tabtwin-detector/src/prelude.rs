pub use crate::bus::*;

pub use lifeline::prelude::*;
pub use log::{debug, info};
pub use postage::{sink::Sink, stream::Stream};
