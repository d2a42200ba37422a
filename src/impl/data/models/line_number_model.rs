use std::str::FromStr;

use fractic_server_error::ServerError;
use serde::{Deserialize, Deserializer};

use crate::errors::InvalidLineNumber;

#[derive(Debug)]
pub(crate) struct LineNumberModel(pub u64);

impl FromStr for LineNumberModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = s
            .trim()
            .parse::<u64>()
            .map_err(|e| InvalidLineNumber::with_debug(s, &e))?;
        LineNumberModel::try_from(n)
    }
}

impl TryFrom<u64> for LineNumberModel {
    type Error = ServerError;
    fn try_from(n: u64) -> Result<Self, Self::Error> {
        if n == 0 {
            return Err(InvalidLineNumber::new("0"));
        }
        Ok(LineNumberModel(n))
    }
}

impl<'de> Deserialize<'de> for LineNumberModel {
    fn deserialize<D>(deserializer: D) -> Result<LineNumberModel, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Upstream pages deliver line numbers either as JSON numbers or as
        // numeric strings.
        #[derive(serde_derive::Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        let parsed = match Raw::deserialize(deserializer)? {
            Raw::Number(n) => u64::try_from(n)
                .map_err(|_| InvalidLineNumber::new(&n.to_string()))
                .and_then(LineNumberModel::try_from),
            Raw::Text(s) => LineNumberModel::from_str(&s),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

impl Into<u64> for LineNumberModel {
    fn into(self) -> u64 {
        self.0
    }
}
