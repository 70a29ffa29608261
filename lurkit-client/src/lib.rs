mod composer;
pub use composer::{Composer, ComposerKind};

pub mod format;
pub use format::Format;

mod thread;
pub use thread::{Comments, Thread};

pub mod api {
    pub use lurkit_api::*;
}
