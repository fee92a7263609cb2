mod booking;
mod car;
mod common;
mod dealer;

pub use self::{booking::*, car::*, common::*, dealer::*};
