use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::query::GameField;

const CONFIG_FILE: &str = "config.yaml";
const DEFAULT_COLLECTION: &str = "games.csv";
const DEFAULT_SORT: &str = "name";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path to the collection CSV.
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Field games are sorted on when no sort is given.
    #[serde(default = "default_sort")]
    pub default_sort: String,

    #[serde(skip_serializing, skip_deserializing)]
    base_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            collection: DEFAULT_COLLECTION.to_string(),
            default_sort: DEFAULT_SORT.to_string(),
            base_path: String::new(),
        }
    }
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

fn default_sort() -> String {
    DEFAULT_SORT.to_string()
}

impl Config {
    fn validate(&self) {
        if let Err(err) = GameField::resolve(&self.default_sort) {
            panic!("default_sort is not a sortable field: {err}");
        }
    }

    pub fn load() -> Self {
        let home = homedir::my_home()
            .ok()
            .flatten()
            .expect("cannot resolve home directory");
        let base = home.join(".config").join("meeple");
        Self::load_with(base.to_str().expect("home path is not valid utf8"))
    }

    pub fn load_with(base_path: &str) -> Self {
        let dir = PathBuf::from(base_path);
        let file = dir.join(CONFIG_FILE);

        // create new if does not exist
        if !file.exists() {
            std::fs::create_dir_all(&dir).expect("cannot create config directory");
            std::fs::write(
                &file,
                serde_yml::to_string(&Self::default()).unwrap().as_bytes(),
            )
            .expect("cannot write default config");
        }

        let config_str = std::fs::read_to_string(&file).expect("config file is not valid utf8");
        let mut config: Self = serde_yml::from_str(&config_str).expect("config is malformed");

        config.base_path = base_path.to_string();
        config.validate();

        // resave in case the file is missing newer defaults
        if config_str != serde_yml::to_string(&config).unwrap() {
            config.save();
        }

        config
    }

    pub fn save(&self) {
        let dir = PathBuf::from(&self.base_path);
        let config_str = serde_yml::to_string(&self).unwrap();
        std::fs::write(dir.join(CONFIG_FILE), config_str).expect("cannot write config");
    }
}
