//! Connection-string parsing. The keyword-scanning state machine (quoted
//! and unquoted attribute values, first-one-wins on repeats) is kept
//! near-verbatim from `ODBCUri`; what changes is the keyword set (this
//! driver's `DRIVER`/`DSN`/`UID`/`PWD`/`DATABASE`/`ROLE`/`CHARSET`/
//! `DIALECT`/`READONLY`/`AUTOQUOTED`/`CLIENT`/`CONNSETTINGS`/
//! `WRITE_RESULT_AS_DIAG` instead of a MongoDB URI's attribute set) and what
//! the fully-parsed attributes resolve to (a plain [`ConnectionSettings`]
//! struct instead of `mongodb::options::ClientOptions`).

use lazy_static::lazy_static;
use regex::{RegexSet, RegexSetBuilder};
use shared_sql_utils::DSNOpts;
use std::collections::HashMap;
use thiserror::Error;

const EMPTY_URI_ERROR: &str = "connection string must not be empty";
const INVALID_ATTR_FORMAT_ERROR: &str = "all attributes must be of the form keyword=value";
const MISSING_CLOSING_BRACE_ERROR: &str = "attribute value beginning with '{' must end with '}'";

pub const DRIVER: &str = "driver";
pub const DSN: &str = "dsn";
pub const UID: &str = "uid";
pub const USER: &str = "user";
pub const PWD: &str = "pwd";
pub const PASSWORD: &str = "password";
pub const DATABASE: &str = "database";
pub const ROLE: &str = "role";
pub const CHARSET: &str = "charset";
pub const DIALECT: &str = "dialect";
pub const READONLY: &str = "readonly";
pub const AUTOQUOTED: &str = "autoquoted";
pub const CLIENT: &str = "client";
pub const CONNSETTINGS: &str = "connsettings";
pub const WRITE_RESULT_AS_DIAG: &str = "write_result_as_diag";
pub const APPNAME: &str = "appname";
pub const LOGLEVEL: &str = "loglevel";
// Accepted so a DSN-resolved attribute string round-trips through the same
// parser; neither has a field of its own on `ConnectionSettings`.
pub const URI: &str = "uri";
pub const SERVER: &str = "server";

const UID_KWS: &[&str] = &[UID, USER];
const PWD_KWS: &[&str] = &[PWD, PASSWORD];

lazy_static! {
    static ref KEYWORDS: RegexSet = RegexSetBuilder::new(
        [
            DRIVER,
            DSN,
            UID,
            USER,
            PWD,
            PASSWORD,
            DATABASE,
            ROLE,
            CHARSET,
            DIALECT,
            READONLY,
            AUTOQUOTED,
            CLIENT,
            CONNSETTINGS,
            WRITE_RESULT_AS_DIAG,
            APPNAME,
            LOGLEVEL,
            URI,
            SERVER,
        ]
        .into_iter()
        .map(|x| "^".to_string() + x + "$")
        .collect::<Vec<_>>()
    )
    .case_insensitive(true)
    .build()
    .unwrap();
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UriError {
    #[error("invalid connection string: {0}")]
    InvalidFormat(String),
    #[error("{0} is required for a valid connection string")]
    MissingAttribute(&'static str),
    #[error("invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

type Result<T> = std::result::Result<T, UriError>;

fn transform_keyword(keyword: &str) -> String {
    match keyword {
        UID | USER => UID.to_string(),
        PWD | PASSWORD => PWD.to_string(),
        _ => keyword.to_string(),
    }
}

/// A parsed, not-yet-validated connection string: every recognized
/// `keyword=value` pair, keyed by its canonical (synonym-resolved) name.
#[derive(Debug, PartialEq, Eq)]
pub struct OdbcUri(HashMap<String, String>);

impl std::ops::Deref for OdbcUri {
    type Target = HashMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl OdbcUri {
    pub fn new(connection_string: &str) -> Result<OdbcUri> {
        if connection_string.is_empty() {
            return Err(UriError::InvalidFormat(EMPTY_URI_ERROR.to_string()));
        }
        let mut ret = OdbcUri::process(connection_string.to_string())?;
        if let Some(dsn) = ret.get(DSN).cloned() {
            let mut dsn_opts = DSNOpts::from_attribute_string(connection_string);
            dsn_opts.dsn = dsn;
            if let Ok(resolved) = dsn_opts.from_private_profile_string() {
                ret = OdbcUri::process(format!(
                    "{connection_string};{}",
                    resolved.to_connection_string()
                ))?;
            }
        }
        Ok(ret)
    }

    fn process(connection_string: String) -> Result<OdbcUri> {
        let mut input = connection_string;
        let mut ret = OdbcUri(HashMap::new());
        while let Some((keyword, value, rest)) = OdbcUri::get_next_attribute(input)? {
            ret.0.entry(transform_keyword(&keyword)).or_insert(value);
            match rest {
                Some(rest) => input = rest,
                None => break,
            }
        }
        Ok(ret)
    }

    fn get_next_attribute(connection_string: String) -> Result<Option<(String, String, Option<String>)>> {
        let index = connection_string.find(|c| c != ';');
        let Some(index) = index else {
            return Ok(None);
        };
        let connection_string = &connection_string[index..];
        let eq = connection_string
            .find('=')
            .ok_or_else(|| UriError::InvalidFormat(INVALID_ATTR_FORMAT_ERROR.to_string()))?;
        let (keyword, rest) = connection_string.split_at(eq);
        let rest = &rest[1..];
        if !KEYWORDS.is_match(keyword) {
            return Err(UriError::InvalidFormat(format!(
                "'{keyword}' is not a valid connection string keyword"
            )));
        }
        let (value, rest) = if let Some(rest) = rest.strip_prefix('{') {
            OdbcUri::handle_braced_value(rest)?
        } else {
            OdbcUri::handle_unbraced_value(rest)
        };
        Ok(Some((keyword.to_lowercase(), value, rest)))
    }

    fn handle_braced_value(input: &str) -> Result<(String, Option<String>)> {
        let mut after_brace = false;
        for (i, c) in input.chars().enumerate() {
            if after_brace && c == ';' {
                let rest = input.get(i + 1..).filter(|s| !s.is_empty());
                return Ok((input[..i - 1].to_string(), rest.map(String::from)));
            }
            if c == '}' {
                if i + 1 == input.len() {
                    return Ok((input[..i].to_string(), None));
                }
                after_brace = true;
            } else {
                after_brace = false;
            }
        }
        Err(UriError::InvalidFormat(
            MISSING_CLOSING_BRACE_ERROR.to_string(),
        ))
    }

    fn handle_unbraced_value(input: &str) -> (String, Option<String>) {
        match input.find(';') {
            None => (input.to_string(), None),
            Some(index) => {
                let (value, rest) = input.split_at(index);
                if rest.len() == 1 {
                    (value.to_string(), None)
                } else {
                    (value.to_string(), rest.get(1..).map(String::from))
                }
            }
        }
    }

    fn remove(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }

    fn remove_mandatory(&mut self, names: &[&str], canonical: &'static str) -> Result<String> {
        for name in names {
            if let Some(v) = self.remove(name) {
                return Ok(v);
            }
        }
        Err(UriError::MissingAttribute(canonical))
    }

    fn parse_bool(&mut self, name: &str, default: bool) -> Result<bool> {
        match self.remove(name) {
            None => Ok(default),
            Some(v) => match v.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(UriError::InvalidValue("boolean attribute", v)),
            },
        }
    }

    /// Consumes the parsed attributes into validated [`ConnectionSettings`].
    /// `UID`/`PWD` (or their `USER`/`PASSWORD` synonyms) are mandatory;
    /// every other key defaults per spec.md §6.
    pub fn into_settings(mut self) -> Result<ConnectionSettings> {
        let driver = self.remove(DRIVER);
        let dsn = self.remove(DSN);
        let uid = self.remove_mandatory(UID_KWS, "UID")?;
        let pwd = self.remove_mandatory(PWD_KWS, "PWD")?;
        let database = self.remove(DATABASE);
        let role = self.remove(ROLE);
        let charset = self.remove(CHARSET);
        let dialect = self
            .remove(DIALECT)
            .map(|v| {
                v.parse::<i32>()
                    .map_err(|_| UriError::InvalidValue(DIALECT, v))
            })
            .transpose()?;
        let readonly = self.parse_bool(READONLY, false)?;
        let autoquoted = self.parse_bool(AUTOQUOTED, false)?;
        let client = self.remove(CLIENT);
        let connsettings = self.remove(CONNSETTINGS);
        let write_result_as_diag = self.parse_bool(WRITE_RESULT_AS_DIAG, false)?;
        let app_name = self.remove(APPNAME);
        let log_level = self.remove(LOGLEVEL);
        Ok(ConnectionSettings {
            driver,
            dsn,
            uid,
            pwd,
            database,
            role,
            charset,
            dialect,
            readonly,
            autoquoted,
            client,
            connsettings,
            write_result_as_diag,
            app_name,
            log_level,
        })
    }
}

/// The fully-validated connection attributes a driver-manager connection
/// string or DSN resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub driver: Option<String>,
    pub dsn: Option<String>,
    pub uid: String,
    pub pwd: String,
    pub database: Option<String>,
    pub role: Option<String>,
    pub charset: Option<String>,
    pub dialect: Option<i32>,
    pub readonly: bool,
    pub autoquoted: bool,
    pub client: Option<String>,
    pub connsettings: Option<String>,
    pub write_result_as_diag: bool,
    pub app_name: Option<String>,
    pub log_level: Option<String>,
}

#[cfg(test)]
mod unit {
    use super::*;

    #[test]
    fn empty_string_is_rejected() {
        assert!(OdbcUri::new("").is_err());
    }

    #[test]
    fn unbraced_value_is_parsed() {
        let uri = OdbcUri::new("uid=alice;pwd=secret;database=mydb").unwrap();
        assert_eq!(uri.get(UID), Some(&"alice".to_string()));
        assert_eq!(uri.get(DATABASE), Some(&"mydb".to_string()));
    }

    #[test]
    fn braced_value_preserves_semicolons() {
        let uri = OdbcUri::new("uid=alice;pwd={sec;ret};database=mydb").unwrap();
        assert_eq!(uri.get(PWD), Some(&"sec;ret".to_string()));
    }

    #[test]
    fn uid_and_user_are_synonyms_first_one_wins() {
        let uri = OdbcUri::new("user=alice;uid=bob;pwd=x").unwrap();
        assert_eq!(uri.get(UID), Some(&"alice".to_string()));
    }

    #[test]
    fn unknown_keyword_is_rejected() {
        assert!(OdbcUri::new("bogus=1;uid=a;pwd=b").is_err());
    }

    #[test]
    fn into_settings_requires_uid_and_pwd() {
        let uri = OdbcUri::new("database=mydb").unwrap();
        assert!(uri.into_settings().is_err());
    }

    #[test]
    fn into_settings_fills_defaults() {
        let uri = OdbcUri::new("uid=alice;pwd=secret;database=mydb;readonly=true").unwrap();
        let settings = uri.into_settings().unwrap();
        assert_eq!(settings.uid, "alice");
        assert_eq!(settings.pwd, "secret");
        assert_eq!(settings.database.as_deref(), Some("mydb"));
        assert!(settings.readonly);
        assert!(!settings.autoquoted);
    }

    #[test]
    fn invalid_dialect_is_rejected() {
        let uri = OdbcUri::new("uid=a;pwd=b;dialect=notanumber").unwrap();
        assert!(uri.into_settings().is_err());
    }
}
