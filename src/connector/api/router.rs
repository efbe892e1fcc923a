use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{ChatController, GenerateController, ParamsController, TemplateController};

pub struct Router<'a> {
    generate_controller: GenerateController<'a>,
    chat_controller: ChatController<'a>,
    template_controller: TemplateController,
    params_controller: ParamsController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            generate_controller: GenerateController::new(container),
            chat_controller: ChatController::new(container),
            template_controller: TemplateController::new(),
            params_controller: ParamsController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Generate { prompt, stop } => {
                self.generate_controller.generate(prompt, stop).await
            }
            Commands::Chat {
                input,
                history,
                history_file,
                agent,
                observation,
                stop,
            } => {
                self.chat_controller
                    .chat(input, history, history_file, agent, observation, stop)
                    .await
            }
            Commands::Template { name } => self.template_controller.show(name),
            Commands::Params => self.params_controller.params(),
        }
    }
}
