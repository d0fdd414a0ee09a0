pub mod cli;
mod responder;
mod selector;

pub use responder::MemeResponder;
pub use selector::CaptionSelector;
