/*!
Command payload + options file loading.

Wire shape (PUT body is always a one-element array):

  [
    {
      "name": "verify",
      "description": "Verify",
      "type": 1,
      "options": [ { "type": 3, "name": "email", "description": "...", "required": false } ]
    }
  ]

Options file (`--options-file`, JSON or YAML by extension) is an array whose
entries are either `--option` strings or objects:

  - "email:string:false:Your email"
  - { name: age, type: integer, required: true, description: Your age }
*/

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::option::{CommandOption, OptionType, parse_option, parse_required};

/// Application command type for CHAT_INPUT (slash) commands.
pub const CHAT_INPUT: u8 = 1;

/// One slash command definition.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CommandPayload {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: u8,
    pub options: Vec<CommandOption>,
}

impl CommandPayload {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        options: Vec<CommandOption>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: CHAT_INPUT,
            options,
        }
    }

    /// Wrap into the batch form the bulk-overwrite endpoint expects.
    pub fn into_batch(self) -> Vec<CommandPayload> {
        vec![self]
    }
}

/* ---- Options File ---- */

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OptionEntry {
    Compact(String),
    Full {
        name: String,
        #[serde(rename = "type")]
        kind: String,
        #[serde(default)]
        required: RequiredFlag,
        #[serde(default)]
        description: String,
    },
}

/// `required` in a file may be a real boolean or any of the CLI spellings.
#[derive(Debug, Default, Deserialize)]
#[serde(untagged)]
enum RequiredFlag {
    #[default]
    Missing,
    Bool(bool),
    Int(i64),
    Text(String),
}

impl RequiredFlag {
    fn as_bool(&self) -> bool {
        match self {
            RequiredFlag::Missing => false,
            RequiredFlag::Bool(b) => *b,
            RequiredFlag::Int(n) => *n == 1,
            RequiredFlag::Text(s) => parse_required(s),
        }
    }
}

impl OptionEntry {
    fn into_option(self) -> Result<CommandOption> {
        match self {
            OptionEntry::Compact(raw) => {
                parse_option(&raw).with_context(|| format!("invalid option entry: {raw}"))
            }
            OptionEntry::Full {
                name,
                kind,
                required,
                description,
            } => Ok(CommandOption {
                kind: OptionType::parse(&kind)?,
                name,
                description,
                required: required.as_bool(),
            }),
        }
    }
}

/// Load option records from a JSON / YAML file, preserving file order.
pub fn load_options_file(path: &str) -> Result<Vec<CommandOption>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read options file: {path}"))?;
    let lower = path.to_ascii_lowercase();

    let entries: Vec<OptionEntry> = if lower.ends_with(".yaml") || lower.ends_with(".yml") {
        serde_yaml::from_str(&raw).context("failed to parse YAML options file")?
    } else {
        serde_json::from_str(&raw).context("failed to parse JSON options file")?
    };

    entries.into_iter().map(OptionEntry::into_option).collect()
}

/* --------------------------------- Tests ---------------------------------- */
