use crate::config::CarzConfig;
use crate::model::Car;

pub mod config;
pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command produced. `listed_cars` is the view to render: `Some`
/// means a (possibly empty) collection was fetched and the list or details
/// view should be shown; `None` means the command renders messages only,
/// as a cancelled delete does.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_cars: Vec<Car>,
    pub listed_cars: Option<Vec<Car>>,
    pub config: Option<CarzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_cars(mut self, cars: Vec<Car>) -> Self {
        self.listed_cars = Some(cars);
        self
    }

    pub fn with_config(mut self, config: CarzConfig) -> Self {
        self.config = Some(config);
        self
    }
}
