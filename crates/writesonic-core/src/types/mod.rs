mod content;
mod request;
mod settings;
mod validation;

pub use content::*;
pub use request::*;
pub use settings::*;
pub use validation::*;
