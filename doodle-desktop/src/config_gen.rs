use std::fs;
use std::path::Path;
use serde::Serialize;
use doodle_core::choice::{ChoiceItem, ChoiceList};
use doodle_core::config::{AnimationConfig, ContainerConfig, DialogueConfig, SystemConfig};

#[derive(Serialize)]
struct FullConfig {
    system: SystemConfig,
    animation: AnimationConfig,
    dialogue: DialogueConfig,
    containers: ContainerConfig,
    choices: Vec<ChoiceItem>,
}

pub fn ensure_config_exists(path: &str) {
    if Path::new(path).exists() {
        return;
    }

    println!("Creating default configuration at '{}'...", path);

    let default_config = FullConfig {
        system: SystemConfig::default(),
        animation: AnimationConfig::default(),
        dialogue: DialogueConfig::default(),
        containers: ContainerConfig::default(),
        choices: ChoiceList::default().0,
    };

    let toml_str = match toml::to_string_pretty(&default_config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to serialize default config: {}", e);
            return;
        }
    };

    if let Err(e) = fs::write(path, toml_str) {
        eprintln!("Failed to write config file: {}", e);
    } else {
        println!("Config file created successfully.");
    }
}
