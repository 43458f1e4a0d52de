use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError, DeserializeFromStr, PickFirst, SerializeDisplay};
use std::{convert::Infallible, fmt::Display, str::FromStr};

use crate::common::LooseNumber;

/* The slots every complete build must fill, in enumeration order. */
pub const REQUIRED_CATEGORIES: [Category; 7] = [
    Category::Cpu,
    Category::Gpu,
    Category::Motherboard,
    Category::Ram,
    Category::Storage,
    Category::Psu,
    Category::Case,
];

#[derive(SerializeDisplay, DeserializeFromStr, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Cpu,
    Gpu,
    Motherboard,
    Ram,
    Storage,
    Psu,
    Case,
    OperatingSystem,
    /* peripheral categories pass through verbatim */
    Other(String),
}

impl Category {
    pub fn parse<S: AsRef<str>>(s: S) -> Self {
        match s.as_ref().to_ascii_lowercase().as_str() {
            "cpu" => Self::Cpu,
            "gpu" | "graphics card" => Self::Gpu,
            "motherboard" => Self::Motherboard,
            "ram" | "memory" => Self::Ram,
            "storage" => Self::Storage,
            "psu" | "power supply" => Self::Psu,
            "case" => Self::Case,
            "operating system" | "os" => Self::OperatingSystem,
            _ => Self::Other(s.as_ref().to_string()),
        }
    }

    pub fn is_required(&self) -> bool {
        REQUIRED_CATEGORIES.contains(self)
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cpu => write!(f, "CPU"),
            Self::Gpu => write!(f, "GPU"),
            Self::Motherboard => write!(f, "Motherboard"),
            Self::Ram => write!(f, "RAM"),
            Self::Storage => write!(f, "Storage"),
            Self::Psu => write!(f, "PSU"),
            Self::Case => write!(f, "Case"),
            Self::OperatingSystem => write!(f, "Operating System"),
            Self::Other(s) => write!(f, "{}", s),
        }
    }
}

/*
 * One catalog entry. Catalogs are assembled from third-party feeds, so the
 * numeric fields tolerate display strings and fall back to 0 when absent or
 * unreadable rather than rejecting the record.
 */
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Component {
    #[serde(rename = "type")]
    pub category: Category,
    pub name: String,
    #[serde(default)]
    #[serde_as(as = "DefaultOnError<PickFirst<(_, LooseNumber<f64>)>>")]
    pub price: f64,
    #[serde(default)]
    #[serde_as(as = "DefaultOnError<PickFirst<(_, LooseNumber<f64>)>>")]
    pub performance_score: f64,
    #[serde(default)]
    pub socket: Option<String>,
    #[serde(default)]
    pub ram_type: Option<String>,
    #[serde(default)]
    #[serde_as(as = "DefaultOnError<PickFirst<(_, LooseNumber<f64>)>>")]
    pub wattage: f64,
}

impl Component {
    /* performance per pound, scaled by how much the purpose cares */
    pub fn value_for_money(&self, weight: f64) -> f64 {
        self.performance_score * weight / self.price.max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, Component};

    #[test]
    fn test_category_names() {
        assert_eq!(Category::parse("CPU"), Category::Cpu);
        assert_eq!(Category::parse("psu"), Category::Psu);
        assert_eq!(Category::parse("Operating System"), Category::OperatingSystem);
        assert_eq!(
            Category::parse("keyboard"),
            Category::Other("keyboard".to_string())
        );
        /* unknown categories keep their exact spelling */
        assert_eq!(Category::parse("Keyboard").to_string(), "Keyboard");
        assert_eq!(Category::OperatingSystem.to_string(), "Operating System");
    }

    #[test]
    fn test_lenient_record() {
        let component: Component = serde_json::from_str(
            r#"{
                "type": "CPU",
                "name": "Ryzen 5 2600",
                "price": "1,299.99",
                "socket": "AM4"
            }"#,
        )
        .unwrap();
        assert_eq!(component.category, Category::Cpu);
        assert_eq!(component.price, 1299.99);
        assert_eq!(component.performance_score, 0.0);
        assert_eq!(component.wattage, 0.0);
        assert_eq!(component.socket.as_deref(), Some("AM4"));
        assert_eq!(component.ram_type, None);
    }

    #[test]
    fn test_numeric_record() {
        let component: Component = serde_json::from_str(
            r#"{"type": "PSU", "name": "Test PSU", "price": 80, "performance_score": 60, "wattage": 600}"#,
        )
        .unwrap();
        assert_eq!(component.price, 80.0);
        assert_eq!(component.wattage, 600.0);
    }

    #[test]
    fn test_value_for_money() {
        let mut component: Component =
            serde_json::from_str(r#"{"type": "GPU", "name": "x", "price": 400, "performance_score": 200}"#)
                .unwrap();
        assert_eq!(component.value_for_money(1.5), 0.75);
        /* free items do not divide by zero */
        component.price = 0.0;
        assert_eq!(component.value_for_money(1.0), 200.0);
    }
}
