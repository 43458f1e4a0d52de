use serde::de::Visitor;
use serde_with::DeserializeAs;
use std::{marker::PhantomData, str::FromStr};

/*
 * Parses a number that arrives as a display string, e.g. "1,299.99" or
 * "650W". Everything that is not a digit or a decimal point is dropped
 * before parsing, so thousands separators and unit suffixes are tolerated.
 */
pub struct LooseNumber<T>
where
    T: FromStr,
{
    _t: PhantomData<T>,
}

impl<'de, T> DeserializeAs<'de, T> for LooseNumber<T>
where
    T: FromStr,
{
    fn deserialize_as<D>(deserializer: D) -> Result<T, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Helper<TT>
        where
            TT: FromStr,
        {
            _tt: PhantomData<TT>,
        }

        impl<'de, TT> Visitor<'de> for Helper<TT>
        where
            TT: FromStr,
        {
            type Value = TT;

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                let digits: String = v.chars().filter(|c| c.is_numeric() || *c == '.').collect();
                TT::from_str(digits.as_str())
                    .map_err(|_| E::custom("format error while parsing in LooseNumber"))
            }

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_fmt(format_args!("a number rendered as a display string"))
            }
        }

        deserializer.deserialize_str(Helper::<T> { _tt: PhantomData })
    }
}
