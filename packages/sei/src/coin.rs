use std::{collections::BTreeMap, fmt::Display, str::FromStr};

use anyhow::{Context, Result};
use cosmos_sdk_proto::cosmos::base::v1beta1::Coin as ProtoCoin;
use serde::{Deserialize, Serialize};

/// An amount of a single denomination.
///
/// Amounts are unsigned integers. The JSON form is
/// `{"denom": "usei", "amount": "100"}` and the string form is `100usei`.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Coin {
    /// Denomination, e.g. `usei`
    pub denom: String,
    /// Amount in the smallest unit of the denomination
    #[serde(with = "crate::json::string_u128")]
    pub amount: u128,
}

impl Coin {
    /// Construct a new coin value.
    pub fn new(denom: impl Into<String>, amount: u128) -> Self {
        Coin {
            denom: denom.into(),
            amount,
        }
    }

    /// Add two coins of the same denomination.
    pub fn checked_add(&self, other: &Coin) -> Result<Coin> {
        anyhow::ensure!(
            self.denom == other.denom,
            "Cannot add coins of different denominations: {self} + {other}"
        );
        let amount = self
            .amount
            .checked_add(other.amount)
            .with_context(|| format!("Overflow adding {self} + {other}"))?;
        Ok(Coin::new(self.denom.clone(), amount))
    }

    /// Subtract a coin of the same denomination, failing on underflow.
    pub fn checked_sub(&self, other: &Coin) -> Result<Coin> {
        anyhow::ensure!(
            self.denom == other.denom,
            "Cannot subtract coins of different denominations: {self} - {other}"
        );
        let amount = self
            .amount
            .checked_sub(other.amount)
            .with_context(|| format!("Insufficient funds: {self} - {other}"))?;
        Ok(Coin::new(self.denom.clone(), amount))
    }

    /// Scale the amount by an integer factor.
    pub fn checked_mul(&self, factor: u128) -> Result<Coin> {
        let amount = self
            .amount
            .checked_mul(factor)
            .with_context(|| format!("Overflow multiplying {self} by {factor}"))?;
        Ok(Coin::new(self.denom.clone(), amount))
    }

    /// Divide the amount by an integer, rounding down.
    pub fn checked_div(&self, divisor: u128) -> Result<Coin> {
        let amount = self
            .amount
            .checked_div(divisor)
            .with_context(|| format!("Cannot divide {self} by zero"))?;
        Ok(Coin::new(self.denom.clone(), amount))
    }

    /// Remainder of dividing the amount by an integer.
    pub fn checked_rem(&self, divisor: u128) -> Result<Coin> {
        let amount = self
            .amount
            .checked_rem(divisor)
            .with_context(|| format!("Cannot take {self} modulo zero"))?;
        Ok(Coin::new(self.denom.clone(), amount))
    }
}

impl Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

fn validate_denom(denom: &str) -> Result<()> {
    let mut chars = denom.chars();
    let first = chars.next().context("Must not have an empty denom")?;
    anyhow::ensure!(
        first.is_ascii_alphabetic(),
        "Denom must start with an ASCII letter"
    );
    anyhow::ensure!(
        chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-')),
        "Denom contains invalid characters"
    );
    Ok(())
}

impl FromStr for Coin {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        (|| {
            anyhow::ensure!(!s.is_empty(), "Cannot parse empty string");
            let idx = s
                .find(|c: char| !c.is_ascii_digit())
                .context("All characters are ASCII digits")?;
            let (amount, denom) = s.split_at(idx);
            anyhow::ensure!(!amount.is_empty(), "Must not have an empty amount");
            validate_denom(denom)?;
            Ok(Coin {
                denom: denom.to_owned(),
                amount: amount.parse()?,
            })
        })()
        .with_context(|| format!("Could not parse coin value {s:?}"))
    }
}

impl From<&Coin> for ProtoCoin {
    fn from(Coin { denom, amount }: &Coin) -> Self {
        ProtoCoin {
            denom: denom.clone(),
            amount: amount.to_string(),
        }
    }
}

impl From<Coin> for ProtoCoin {
    fn from(Coin { denom, amount }: Coin) -> Self {
        ProtoCoin {
            denom,
            amount: amount.to_string(),
        }
    }
}

impl TryFrom<ProtoCoin> for Coin {
    type Error = anyhow::Error;

    fn try_from(ProtoCoin { denom, amount }: ProtoCoin) -> Result<Self> {
        let amount = amount
            .parse()
            .with_context(|| format!("Invalid amount {amount:?} for denom {denom}"))?;
        Ok(Coin { denom, amount })
    }
}

pub(crate) fn coins_to_proto(coins: &[Coin]) -> Vec<ProtoCoin> {
    coins.iter().map(ProtoCoin::from).collect()
}

pub(crate) fn coins_from_proto(coins: Vec<ProtoCoin>) -> Result<Vec<Coin>> {
    coins.into_iter().map(Coin::try_from).collect()
}

pub(crate) fn coin_from_proto(coin: Option<ProtoCoin>) -> Result<Coin> {
    coin.context("Missing coin")?.try_into()
}

/// A set of coins keyed by denomination.
///
/// Coins of the same denomination are merged on insertion, so
/// `1000usei,1000usei` becomes `2000usei`.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(into = "Vec<Coin>", try_from = "Vec<Coin>")]
pub struct Coins(BTreeMap<String, u128>);

impl Coins {
    /// An empty set of coins.
    pub fn new() -> Self {
        Coins::default()
    }

    /// Add a coin, merging with any existing amount of the same denom.
    pub fn add(&mut self, Coin { denom, amount }: Coin) -> Result<()> {
        let entry = self.0.entry(denom).or_default();
        *entry = entry
            .checked_add(amount)
            .context("Overflow while adding coins")?;
        Ok(())
    }

    /// Remove a coin's amount from the set. Denoms that reach zero are dropped.
    pub fn sub(&mut self, coin: &Coin) -> Result<()> {
        let held = self.amount_of(&coin.denom);
        let remaining = held.checked_sub(coin.amount).with_context(|| {
            format!("Insufficient funds: have {held}{}, need {coin}", coin.denom)
        })?;
        if remaining == 0 {
            self.0.remove(&coin.denom);
        } else {
            self.0.insert(coin.denom.clone(), remaining);
        }
        Ok(())
    }

    /// The coin for the given denom, if present.
    pub fn get(&self, denom: &str) -> Option<Coin> {
        self.0
            .get(denom)
            .map(|amount| Coin::new(denom.to_owned(), *amount))
    }

    /// Amount held of the given denom, zero when absent.
    pub fn amount_of(&self, denom: &str) -> u128 {
        self.0.get(denom).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the coins, ordered by denom.
    pub fn iter(&self) -> impl Iterator<Item = Coin> + '_ {
        self.0
            .iter()
            .map(|(denom, amount)| Coin::new(denom.clone(), *amount))
    }
}

impl From<Coins> for Vec<Coin> {
    fn from(Coins(coins): Coins) -> Self {
        coins
            .into_iter()
            .map(|(denom, amount)| Coin { denom, amount })
            .collect()
    }
}

impl TryFrom<Vec<Coin>> for Coins {
    type Error = anyhow::Error;

    fn try_from(coins: Vec<Coin>) -> Result<Self> {
        let mut res = Coins::new();
        for coin in coins {
            res.add(coin)?;
        }
        Ok(res)
    }
}

impl FromStr for Coins {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Coin::from_str)
            .collect::<Result<Vec<_>>>()?
            .try_into()
    }
}

impl Display for Coins {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (idx, (denom, amount)) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, ",")?;
            }
            write!(f, "{amount}{denom}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::Arbitrary;

    use super::*;

    fn parse_coin(s: &str) -> anyhow::Result<Coin> {
        s.parse()
    }

    #[test]
    fn sanity() {
        assert_eq!(parse_coin("1001usei").unwrap(), Coin::new("usei", 1001));
        assert_eq!(
            parse_coin("5ibc/27394FB092D2ECCD").unwrap(),
            Coin::new("ibc/27394FB092D2ECCD", 5)
        );
        parse_coin("1.523usei").unwrap_err();
        parse_coin("foobar").unwrap_err();
        parse_coin("123").unwrap_err();
        parse_coin("").unwrap_err();
        parse_coin("12usei!").unwrap_err();
    }

    #[test]
    fn display() {
        assert_eq!(Coin::new("usei", 123456).to_string(), "123456usei");
    }

    #[test]
    fn json_shape() {
        let coin: Coin =
            serde_json::from_value(serde_json::json!({"denom": "usei", "amount": "1000"})).unwrap();
        assert_eq!(coin, Coin::new("usei", 1000));
        assert_eq!(
            serde_json::to_value(&coin).unwrap(),
            serde_json::json!({"denom": "usei", "amount": "1000"})
        );
    }

    #[test]
    fn proto_amount_must_be_numeric() {
        Coin::try_from(ProtoCoin {
            denom: "usei".to_owned(),
            amount: "12.5".to_owned(),
        })
        .unwrap_err();
    }

    #[test]
    fn checked_add() {
        let coin = Coin::new("usei", 1000);
        assert_eq!(
            coin.checked_add(&Coin::new("usei", 2000)).unwrap(),
            Coin::new("usei", 3000)
        );
        coin.checked_add(&Coin::new("ukrw", 2000)).unwrap_err();
        Coin::new("usei", u128::MAX)
            .checked_add(&Coin::new("usei", 1))
            .unwrap_err();
    }

    #[test]
    fn arithmetic() {
        let coin = Coin::new("usei", 1000);
        assert_eq!(
            coin.checked_sub(&Coin::new("usei", 1000)).unwrap(),
            Coin::new("usei", 0)
        );
        Coin::new("usei", 2000)
            .checked_sub(&Coin::new("ukrw", 1000))
            .unwrap_err();
        coin.checked_sub(&Coin::new("usei", 1001)).unwrap_err();

        assert_eq!(coin.checked_mul(3).unwrap(), Coin::new("usei", 3000));
        Coin::new("usei", u128::MAX).checked_mul(2).unwrap_err();

        assert_eq!(coin.checked_div(5).unwrap(), Coin::new("usei", 200));
        assert_eq!(coin.checked_div(3).unwrap(), Coin::new("usei", 333));
        coin.checked_div(0).unwrap_err();

        assert_eq!(coin.checked_rem(43).unwrap(), Coin::new("usei", 1000 % 43));
        coin.checked_rem(0).unwrap_err();
    }

    #[test]
    fn coins_sub() {
        let mut coins: Coins = "1000usei,5ukrw".parse().unwrap();
        coins.sub(&Coin::new("usei", 400)).unwrap();
        assert_eq!(coins.amount_of("usei"), 600);
        coins.sub(&Coin::new("ukrw", 5)).unwrap();
        assert_eq!(coins.get("ukrw"), None);
        assert_eq!(coins.len(), 1);

        coins.sub(&Coin::new("usei", 601)).unwrap_err();
        coins.sub(&Coin::new("uatom", 1)).unwrap_err();
        // Failed subtraction leaves the set untouched.
        assert_eq!(coins.to_string(), "600usei");
    }

    #[test]
    fn clobbers_similar_denom() {
        let coins = Coins::try_from(vec![
            Coin::new("ukrw", 1000),
            Coin::new("usei", 1000),
            Coin::new("usei", 1000),
        ])
        .unwrap();
        assert_eq!(coins.amount_of("ukrw"), 1000);
        assert_eq!(coins.amount_of("usei"), 2000);
        assert_eq!(coins.amount_of("uatom"), 0);
        assert_eq!(coins.len(), 2);
    }

    #[test]
    fn coins_from_str() {
        let coins: Coins = "5ukrw,12usei".parse().unwrap();
        assert_eq!(coins.get("ukrw"), Some(Coin::new("ukrw", 5)));
        assert_eq!(coins.get("usei"), Some(Coin::new("usei", 12)));
        assert_eq!(coins.to_string(), "5ukrw,12usei");
        assert!("".parse::<Coins>().unwrap().is_empty());
        "5ukrw,abc".parse::<Coins>().unwrap_err();
    }

    #[test]
    fn coins_json_is_a_list() {
        let coins: Coins = "12usei,5ukrw".parse().unwrap();
        assert_eq!(
            serde_json::to_value(&coins).unwrap(),
            serde_json::json!([
                {"denom": "ukrw", "amount": "5"},
                {"denom": "usei", "amount": "12"},
            ])
        );
    }

    #[derive(Clone, Debug)]
    struct DenomString(String);

    impl Arbitrary for DenomString {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            // See https://github.com/BurntSushi/quickcheck/issues/279
            let sizes = (3..20).collect::<Vec<_>>();
            let letters = ('a'..='z').collect::<Vec<_>>();
            DenomString(
                (1..*g.choose(&sizes).unwrap())
                    .map(|_| *g.choose(&letters).unwrap())
                    .collect(),
            )
        }
    }

    quickcheck::quickcheck! {
        fn roundtrip(amount: u128, denom: DenomString) -> bool {
            let expected = Coin::new(denom.0, amount);
            let actual = parse_coin(&expected.to_string()).unwrap();
            assert_eq!(expected, actual);
            true
        }

        fn add_then_sub(a: u64, b: u64) -> bool {
            let a = Coin::new("usei", a.into());
            let b = Coin::new("usei", b.into());
            a.checked_add(&b).unwrap().checked_sub(&b).unwrap() == a
        }
    }
}
