use crate::constants::{ANDROID, IOS, WEB};
use bitflags::bitflags;
use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Platforms an application ships on.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct PlatformSet: u8 {
        const IOS = 1 << 0;
        const ANDROID = 1 << 1;
        const WEB = 1 << 2;

        const MOBILE = Self::IOS.bits() | Self::ANDROID.bits();
        const ALL = Self::MOBILE.bits() | Self::WEB.bits();
    }
}

impl PlatformSet {
    /// Canonical presentation order.
    const ORDERED: [(Self, &'static str, &'static str); 3] =
        [(Self::IOS, IOS, "iOS"), (Self::ANDROID, ANDROID, "Android"), (Self::WEB, WEB, "Web")];

    /// Lowercase tags of the contained platforms, in `ios, android, web` order.
    pub fn tags(self) -> impl Iterator<Item = &'static str> {
        Self::ORDERED.into_iter().filter(move |(flag, ..)| self.contains(*flag)).map(|(_, tag, _)| tag)
    }

    /// Display names of the contained platforms (`iOS`, `Android`, `Web`).
    pub fn display_names(self) -> impl Iterator<Item = &'static str> {
        Self::ORDERED
            .into_iter()
            .filter(move |(flag, ..)| self.contains(*flag))
            .map(|(_, _, display)| display)
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.bits().count_ones() as usize
    }
}

impl From<&str> for PlatformSet {
    fn from(s: &str) -> Self {
        match s {
            IOS => Self::IOS,
            ANDROID => Self::ANDROID,
            WEB => Self::WEB,
            "mobile" => Self::MOBILE,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl Serialize for PlatformSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.count()))?;
        for tag in self.tags() {
            seq.serialize_element(tag)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for PlatformSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TagsVisitor;

        impl<'de> Visitor<'de> for TagsVisitor {
            type Value = PlatformSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a list of platform tags")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut set = PlatformSet::empty();
                while let Some(tag) = seq.next_element::<String>()? {
                    let flag = PlatformSet::from(tag.as_str());
                    if flag.is_empty() {
                        return Err(serde::de::Error::unknown_variant(&tag, &[IOS, ANDROID, WEB]));
                    }
                    set |= flag;
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(TagsVisitor)
    }
}
