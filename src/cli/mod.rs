pub mod args;
pub mod input;
pub mod output;
pub mod run;

pub use args::*;
pub use input::*;
pub use output::*;
pub use run::*;
