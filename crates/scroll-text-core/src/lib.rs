pub mod component;
pub mod config;
pub mod constants;
pub mod letters;
pub mod motion;
pub mod random;
pub mod stylesheet;

pub use component::*;
pub use config::*;
pub use letters::*;
pub use motion::*;
pub use random::*;
pub use stylesheet::*;
