//! ResultCode - the normalized "flight direction" produced by the scorer.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::Category;
use crate::domain::foundation::ValidationError;

/// Which category or categories scored highest.
///
/// Renders as `"Being > Flowing"` for a single leader, `"Being = Trusting"`
/// for a two-way tie (names alphabetical), or `"Being = Flowing = Trusting"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultCode {
    Leader { primary: Category, secondary: Category },
    PairTie(Category, Category),
    AllTie,
}

impl ResultCode {
    /// Builds a two-way tie with the names in alphabetical order, so the
    /// argument order never matters.
    pub fn pair(a: Category, b: Category) -> Self {
        if a.name() <= b.name() {
            ResultCode::PairTie(a, b)
        } else {
            ResultCode::PairTie(b, a)
        }
    }

    /// Every code the scorer can produce for three categories: six ordered
    /// leader codes, three pair ties, and the all-way tie.
    pub fn all() -> Vec<ResultCode> {
        let cats = Category::all();
        let mut codes = Vec::with_capacity(10);
        for &primary in cats {
            for &secondary in cats.iter().filter(|c| **c != primary) {
                codes.push(ResultCode::Leader { primary, secondary });
            }
        }
        for (i, &a) in cats.iter().enumerate() {
            for &b in &cats[i + 1..] {
                codes.push(ResultCode::pair(a, b));
            }
        }
        codes.push(ResultCode::AllTie);
        codes
    }

    /// Categories named by this code, leader first.
    pub fn categories(&self) -> Vec<Category> {
        match *self {
            ResultCode::Leader { primary, secondary } => vec![primary, secondary],
            ResultCode::PairTie(a, b) => vec![a, b],
            ResultCode::AllTie => Category::all().to_vec(),
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultCode::Leader { primary, secondary } => write!(f, "{} > {}", primary, secondary),
            ResultCode::PairTie(a, b) => write!(f, "{} = {}", a, b),
            ResultCode::AllTie => {
                let names: Vec<&str> = Category::all().iter().map(|c| c.name()).collect();
                write!(f, "{}", names.join(" = "))
            }
        }
    }
}

impl FromStr for ResultCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::invalid_format("result_code", format!("'{}'", s));

        if let Some((a, b)) = s.split_once(" > ") {
            let primary: Category = a.parse()?;
            let secondary: Category = b.parse()?;
            if primary == secondary {
                return Err(invalid());
            }
            return Ok(ResultCode::Leader { primary, secondary });
        }

        let parts: Vec<&str> = s.split(" = ").collect();
        match parts.as_slice() {
            [a, b] => {
                let (a, b): (Category, Category) = (a.parse()?, b.parse()?);
                if a == b {
                    return Err(invalid());
                }
                Ok(ResultCode::pair(a, b))
            }
            [_, _, _] => {
                let mut named = parts
                    .iter()
                    .map(|p| p.parse::<Category>())
                    .collect::<Result<Vec<_>, _>>()?;
                named.sort();
                named.dedup();
                if named.len() == 3 {
                    Ok(ResultCode::AllTie)
                } else {
                    Err(invalid())
                }
            }
            _ => Err(invalid()),
        }
    }
}

impl Serialize for ResultCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ResultCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
