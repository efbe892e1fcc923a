pub mod chat_controller;
pub mod generate_controller;
pub mod params_controller;
pub mod template_controller;

pub use chat_controller::ChatController;
pub use generate_controller::GenerateController;
pub use params_controller::ParamsController;
pub use template_controller::TemplateController;
