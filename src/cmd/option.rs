/*!
Slash command option records.

Parses the compact `--option` syntax:

  name:type:required:description

into a `CommandOption`. The description is the remainder after the third
colon, so it may contain colons itself.

Supported types (Discord application command option type codes):
  string=3 integer=4 boolean=5 user=6 channel=7 role=8 mentionable=9 number=10

`required` accepts 1 / true / yes / y (case-insensitive); everything else is false.
*/

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Option value type accepted by the platform.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum OptionType {
    String,
    Integer,
    Boolean,
    User,
    Channel,
    Role,
    Mentionable,
    Number,
}

impl OptionType {
    /// All variants, in code order.
    #[cfg(test)]
    pub const fn variants() -> &'static [OptionType] {
        &[
            OptionType::String,
            OptionType::Integer,
            OptionType::Boolean,
            OptionType::User,
            OptionType::Channel,
            OptionType::Role,
            OptionType::Mentionable,
            OptionType::Number,
        ]
    }

    /// Exact (lowercase) name lookup.
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "string" => Some(OptionType::String),
            "integer" => Some(OptionType::Integer),
            "boolean" => Some(OptionType::Boolean),
            "user" => Some(OptionType::User),
            "channel" => Some(OptionType::Channel),
            "role" => Some(OptionType::Role),
            "mentionable" => Some(OptionType::Mentionable),
            "number" => Some(OptionType::Number),
            _ => None,
        }
    }

    /// Like `from_name`, but the error names the rejected value.
    pub fn parse(s: &str) -> Result<Self, OptionParseError> {
        Self::from_name(s).ok_or_else(|| OptionParseError::UnsupportedType(s.to_string()))
    }

    /// Numeric code used on the wire.
    pub const fn code(&self) -> u8 {
        match self {
            OptionType::String => 3,
            OptionType::Integer => 4,
            OptionType::Boolean => 5,
            OptionType::User => 6,
            OptionType::Channel => 7,
            OptionType::Role => 8,
            OptionType::Mentionable => 9,
            OptionType::Number => 10,
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OptionType::String => "string",
            OptionType::Integer => "integer",
            OptionType::Boolean => "boolean",
            OptionType::User => "user",
            OptionType::Channel => "channel",
            OptionType::Role => "role",
            OptionType::Mentionable => "mentionable",
            OptionType::Number => "number",
        };
        f.write_str(s)
    }
}

impl Serialize for OptionType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// One typed option of a slash command. Field order matches the wire payload.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CommandOption {
    #[serde(rename = "type")]
    pub kind: OptionType,
    pub name: String,
    pub description: String,
    pub required: bool,
}

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum OptionParseError {
    #[error("Invalid --option format. Expected name:type:required:description")]
    Format,
    #[error("Unsupported option type: {0}")]
    UnsupportedType(String),
}

/// Permissive truthy check for the `required` field.
pub fn parse_required(raw: &str) -> bool {
    matches!(
        raw.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "y"
    )
}

/// Parse `name:type:required:description` into a `CommandOption`.
///
/// Used directly as the clap value parser for `--option`, so failures
/// surface as usage errors before anything else runs.
pub fn parse_option(raw: &str) -> Result<CommandOption, OptionParseError> {
    let parts: Vec<&str> = raw.splitn(4, ':').collect();
    let [name, type_name, required_raw, description] = parts.as_slice() else {
        return Err(OptionParseError::Format);
    };

    let kind = OptionType::parse(type_name)?;

    Ok(CommandOption {
        kind,
        name: name.to_string(),
        description: description.to_string(),
        required: parse_required(required_raw),
    })
}

/* --------------------------------- Tests ---------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_four_fields() {
        let opt = parse_option("email:string:false:Your email").unwrap();
        assert_eq!(opt.name, "email");
        assert_eq!(opt.kind, OptionType::String);
        assert_eq!(opt.kind.code(), 3);
        assert_eq!(opt.description, "Your email");
        assert!(!opt.required);
    }

    #[test]
    fn description_keeps_extra_colons() {
        let opt = parse_option("when:string:yes:Time as HH:MM:SS").unwrap();
        assert_eq!(opt.description, "Time as HH:MM:SS");
        assert!(opt.required);
    }

    #[test]
    fn empty_description_is_allowed() {
        let opt = parse_option("n:number:1:").unwrap();
        assert_eq!(opt.description, "");
        assert_eq!(opt.kind.code(), 10);
    }

    #[test]
    fn too_few_parts_rejected() {
        assert_eq!(parse_option("email"), Err(OptionParseError::Format));
        assert_eq!(parse_option("email:string"), Err(OptionParseError::Format));
        assert_eq!(
            parse_option("email:string:true"),
            Err(OptionParseError::Format)
        );
    }

    #[test]
    fn unknown_type_named_in_error() {
        let err = parse_option("age:float:true:Your age").unwrap_err();
        assert_eq!(err, OptionParseError::UnsupportedType("float".into()));
        assert!(err.to_string().contains("float"));
    }

    #[test]
    fn type_match_is_exact() {
        assert!(parse_option("x:String:true:d").is_err());
        assert!(parse_option("x: string:true:d").is_err());
    }

    #[test]
    fn required_truthy_spellings() {
        for raw in ["1", "true", "TRUE", "Yes", "y", "Y"] {
            assert!(parse_required(raw), "{raw} should be truthy");
        }
        for raw in ["0", "false", "no", "n", "", "ture", "on", " yes"] {
            assert!(!parse_required(raw), "{raw} should be false");
        }
    }

    #[test]
    fn type_codes_are_stable() {
        let codes: Vec<u8> = OptionType::variants().iter().map(|t| t.code()).collect();
        assert_eq!(codes, vec![3, 4, 5, 6, 7, 8, 9, 10]);
        for t in OptionType::variants() {
            assert_eq!(OptionType::from_name(&t.to_string()), Some(*t));
        }
    }

    #[test]
    fn serializes_with_numeric_type_first() {
        let opt = parse_option("who:user:y:Target user").unwrap();
        let json = serde_json::to_string(&opt).unwrap();
        assert_eq!(
            json,
            r#"{"type":6,"name":"who","description":"Target user","required":true}"#
        );
    }
}
