mod booking;
mod car;
mod dealer;

pub use self::{booking::*, car::*, dealer::*};
