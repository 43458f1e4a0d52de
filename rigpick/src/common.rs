use anyhow::{anyhow, bail};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::{fmt::Display, str::FromStr};

#[derive(SerializeDisplay, DeserializeFromStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Currency {
    GBP,
    USD,
}

impl Currency {
    /* find the currency mentioned anywhere in a price string */
    pub fn from_price<S: AsRef<str>>(s: S) -> Option<Self> {
        let s = s.as_ref();
        if s.contains('£') {
            return Some(Self::GBP);
        }
        if s.contains('$') {
            return Some(Self::USD);
        }
        s.split(|c: char| c.is_whitespace() || c.is_numeric())
            .find_map(|tok| {
                (!tok.is_empty())
                    .then(|| Self::from_abbreviation(tok))
                    .flatten()
            })
    }

    pub fn from_abbreviation<S: AsRef<str>>(s: S) -> Option<Self> {
        match s
            .as_ref()
            .chars()
            .flat_map(char::to_lowercase)
            .filter(|c| c.is_alphabetic())
            .collect::<String>()
            .as_str()
        {
            "gb" | "gbp" => Some(Self::GBP),
            "us" | "usd" => Some(Self::USD),
            _ => None,
        }
    }
}

impl FromStr for Currency {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::from_abbreviation(s) {
            Some(thing) => Ok(thing),
            None => bail!("no such abbreviation"),
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::GBP => "GBP",
                Self::USD => "USD",
            }
        )
    }
}

/*
 * Convert something like "£312.03" to 312.03
 * "£312.03"  -> 312.03
 * "1,299.99" -> 1299.99
 * "312"      -> 312.0
 */
pub(crate) fn parse_pounds<T: AsRef<str>>(s: T) -> Option<f64> {
    s.as_ref()
        .chars()
        .filter(|c| c.is_numeric() || *c == '.')
        .collect::<String>()
        .parse::<f64>()
        .ok()
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
pub struct Money(pub Currency, pub f64);

impl FromStr for Money {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cur = Currency::from_price(s).unwrap_or(Currency::GBP);
        let amount = s
            .split(char::is_whitespace)
            .find_map(|s| (!s.is_empty()).then(|| parse_pounds(s)).flatten())
            .ok_or_else(|| anyhow!("failed to find price"))?;
        Ok(Self(cur, amount))
    }
}

pub struct Client<const COOKIES: bool>(pub reqwest::Client);

impl<const COOKIES: bool> Default for Client<COOKIES> {
    fn default() -> Self {
        Self(
            reqwest::Client::builder()
                .cookie_store(COOKIES)
                .build()
                .unwrap(),
        )
    }
}
