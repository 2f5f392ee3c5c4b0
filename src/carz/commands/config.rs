use crate::commands::{CmdMessage, CmdResult};
use crate::config::CarzConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = CarzConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = CarzConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => {
                    result.add_message(CmdMessage::info(val));
                    Ok(result)
                }
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)));
                    Ok(result)
                }
            }
        }
        ConfigAction::Set(key, value) => {
            let mut config = CarzConfig::load(config_dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(config_dir)?;
            let mut result = CmdResult::default().with_config(config.clone());
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn set_then_show_round_trips() {
        let temp_dir = tempfile::tempdir().unwrap();

        let result = run(
            temp_dir.path(),
            ConfigAction::Set("code".into(), "F7M6MG".into()),
        )
        .unwrap();
        assert!(result.messages[0].content.contains("code set to F7M6MG"));

        let result = run(temp_dir.path(), ConfigAction::ShowKey("code".into())).unwrap();
        assert_eq!(result.messages[0].content, "F7M6MG");
    }

    #[test]
    fn show_all_returns_the_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = run(temp_dir.path(), ConfigAction::ShowAll).unwrap();
        let config = result.config.unwrap();
        assert_eq!(config, CarzConfig::default());
    }

    #[test]
    fn unknown_key_is_an_error_message() {
        let temp_dir = tempfile::tempdir().unwrap();

        let result = run(temp_dir.path(), ConfigAction::ShowKey("colour".into())).unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Error));

        let result = run(
            temp_dir.path(),
            ConfigAction::Set("colour".into(), "red".into()),
        )
        .unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
    }
}
