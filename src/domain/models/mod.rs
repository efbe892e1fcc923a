mod generation_config;
mod persona;
mod prompt_template;
mod template_store;

pub use generation_config::*;
pub use persona::*;
pub use prompt_template::*;
pub use template_store::*;
